//! 哈希模块 - 统一管理键到槽位的映射

pub mod seeded;
pub mod strategy;

pub use seeded::SeededHashStrategy;
pub use strategy::{FnHashStrategy, HashAlgorithm, HashStrategy};

/// 默认哈希策略
pub fn default_hash_strategy() -> SeededHashStrategy {
    SeededHashStrategy::new(HashAlgorithm::AHash)
}

/// 哈希工具函数
pub fn calculate_slot(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}
