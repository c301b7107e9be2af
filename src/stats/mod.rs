//! 统计模块 - 统一管理哈希表操作指标

pub mod operation;

pub use operation::{
    AtomicOperationStats, DisabledOperationRecorder, OperationCount, OperationRecorder,
    OperationStatsSnapshot,
};

/// 按开关创建统计记录器
pub fn recorder(enabled: bool) -> Box<dyn OperationRecorder> {
    if enabled {
        Box::new(AtomicOperationStats::new())
    } else {
        Box::new(DisabledOperationRecorder)
    }
}
