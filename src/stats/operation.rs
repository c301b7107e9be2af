// src/stats/operation.rs
//! 操作统计 - 跟踪哈希表各类操作的次数与成功数

use crate::types::OperationType;
use std::{
    fmt::Write,
    sync::atomic::{AtomicU64, Ordering},
};

/// 操作统计接口
pub trait OperationRecorder: Send + Sync {
    /// 记录操作
    fn record(&self, op_type: OperationType, success: bool);

    /// 获取操作统计快照
    fn snapshot(&self) -> OperationStatsSnapshot;

    /// 重置统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 单类操作的计数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OperationCount {
    pub total: u64,
    pub succeeded: u64,
}

impl OperationCount {
    pub fn failed(&self) -> u64 {
        self.total.saturating_sub(self.succeeded)
    }
}

/// 操作统计快照
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationStatsSnapshot {
    counts: [OperationCount; OperationType::ALL.len()],
}

impl OperationStatsSnapshot {
    /// 获取指定操作的计数
    pub fn get(&self, op_type: OperationType) -> OperationCount {
        self.counts[op_type.index()]
    }
}

#[derive(Debug, Default)]
struct AtomicCounter {
    total: AtomicU64,
    succeeded: AtomicU64,
}

/// 原子操作统计
///
/// 计数使用 Relaxed 序，只保证单个计数器的单调性。
#[derive(Debug, Default)]
pub struct AtomicOperationStats {
    counters: [AtomicCounter; OperationType::ALL.len()],
}

impl AtomicOperationStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationRecorder for AtomicOperationStats {
    fn record(&self, op_type: OperationType, success: bool) {
        let counter = &self.counters[op_type.index()];
        counter.total.fetch_add(1, Ordering::Relaxed);
        if success {
            counter.succeeded.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn snapshot(&self) -> OperationStatsSnapshot {
        let mut snapshot = OperationStatsSnapshot::default();
        for (slot, counter) in snapshot.counts.iter_mut().zip(&self.counters) {
            *slot = OperationCount {
                total: counter.total.load(Ordering::Relaxed),
                succeeded: counter.succeeded.load(Ordering::Relaxed),
            };
        }
        snapshot
    }

    fn reset(&self) {
        for counter in &self.counters {
            counter.total.store(0, Ordering::Relaxed);
            counter.succeeded.store(0, Ordering::Relaxed);
        }
    }

    fn export_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        let mut output = String::new();

        for op in OperationType::ALL {
            let count = snapshot.get(op);
            let name = op.as_str();
            // 写入 String 不会失败
            let _ = writeln!(output, "# HELP cuckoo_operation_{}_count Total {} operations", name, name);
            let _ = writeln!(output, "# TYPE cuckoo_operation_{}_count counter", name);
            let _ = writeln!(output, "cuckoo_operation_{}_count {}", name, count.total);
            let _ = writeln!(
                output,
                "# HELP cuckoo_operation_{}_success_count Successful {} operations",
                name, name
            );
            let _ = writeln!(output, "# TYPE cuckoo_operation_{}_success_count counter", name);
            let _ = writeln!(output, "cuckoo_operation_{}_success_count {}", name, count.succeeded);
        }

        output
    }
}

/// 禁用操作统计实现
#[derive(Debug, Default)]
pub struct DisabledOperationRecorder;

impl OperationRecorder for DisabledOperationRecorder {
    fn record(&self, _op_type: OperationType, _success: bool) {}
    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot::default()
    }
    fn reset(&self) {}
    fn export_prometheus(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_snapshot() {
        let stats = AtomicOperationStats::new();
        stats.record(OperationType::Insert, true);
        stats.record(OperationType::Insert, false);
        stats.record(OperationType::Find, true);

        let snapshot = stats.snapshot();
        let insert = snapshot.get(OperationType::Insert);
        assert_eq!(insert.total, 2);
        assert_eq!(insert.succeeded, 1);
        assert_eq!(insert.failed(), 1);
        assert_eq!(snapshot.get(OperationType::Find).total, 1);
        assert_eq!(snapshot.get(OperationType::Grow), OperationCount::default());

        stats.reset();
        assert_eq!(stats.snapshot(), OperationStatsSnapshot::default());
    }

    #[test]
    fn test_export_prometheus() {
        let stats = AtomicOperationStats::new();
        stats.record(OperationType::Kick, true);
        let metrics = stats.export_prometheus();
        assert!(metrics.contains("cuckoo_operation_kick_count 1\n"));
        assert!(metrics.contains("# TYPE cuckoo_operation_insert_count counter"));
        assert!(metrics.contains("cuckoo_operation_rehash_success_count 0\n"));
    }

    #[test]
    fn test_disabled_recorder_ignores_everything() {
        let stats = DisabledOperationRecorder;
        stats.record(OperationType::Insert, true);
        assert_eq!(stats.snapshot(), OperationStatsSnapshot::default());
        assert!(stats.export_prometheus().is_empty());
    }
}
