//! 统一错误处理 - 哈希表可能返回的错误类型及恢复建议

use std::collections::TryReserveError;

/// Cuckoo哈希表可能发生的错误
///
/// 重复键与查找失败属于正常结果（`Ok(false)` / `None`），不在此列；
/// 踢出循环由扩容重试在内部消化，同样不会暴露给调用方。
#[derive(Debug, thiserror::Error)]
pub enum CuckooError {
    #[error("内存分配失败 (大小: {size}, 对齐: {align})")]
    AllocationFailed {
        size: usize,
        align: usize,
    },

    #[error("容量计算溢出 (当前容量: {capacity})")]
    CapacityOverflow {
        capacity: usize,
    },

    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },
}

impl CuckooError {
    /// 根据槽位数组的分配请求构造分配失败错误
    pub(crate) fn allocation<T>(slots: usize, _source: TryReserveError) -> Self {
        Self::AllocationFailed {
            size: slots.saturating_mul(std::mem::size_of::<T>()),
            align: std::mem::align_of::<T>(),
        }
    }

    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::AllocationFailed { .. } => Some("检查系统内存或减小表大小"),
            Self::CapacityOverflow { .. } => Some("降低扩容因子或拆分数据到多个表"),
            Self::InvalidConfig { .. } => Some("检查配置参数"),
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}
