//! Rust双表Cuckoo哈希表库
//!
//! 每个键只可能位于两个槽位之一：表A中 `hash(key, A) % capacity` 处，或表B中
//! `hash(key, B) % capacity` 处，因此查找与删除最多探测两次。
//!
//! ## 主要特性
//! - 最坏情况O(1)查找
//! - 有界踢出链，出现循环时自动扩容并重哈希
//! - 可注入的哈希策略，每个哈希表独立持有种子
//! - 操作统计与Prometheus导出
//!
//! ## 快速开始
//!
//! ```rust
//! use cuckoo_table::CuckooTable;
//!
//! let mut table = CuckooTable::new(5);
//!
//! // 插入键值对
//! assert!(table.insert("A".to_string(), 2017).unwrap());
//! assert!(!table.insert("A".to_string(), 1).unwrap());
//!
//! // 查找
//! assert_eq!(table.find("A"), Some(2017));
//! assert_eq!(table.find("B"), None);
//!
//! // 删除
//! assert_eq!(table.delete("A"), Some(("A".to_string(), 2017)));
//! assert_eq!(table.count(), 0);
//! ```

#![warn(clippy::all)]

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

// 核心模块导出
pub mod error;
pub mod hash;
pub mod map;
pub mod stats;
pub mod types;

// 公共接口导出
pub use crate::{
    error::CuckooError,
    hash::{
        calculate_slot, default_hash_strategy, FnHashStrategy, HashAlgorithm, HashStrategy,
        SeededHashStrategy,
    },
    map::{
        CuckooTable, CuckooTableConfig, CuckooTableStats, DEFAULT_CONFIG, DEFAULT_GROWTH_FACTOR,
        DEFAULT_MAX_KICK_DEPTH, DEFAULT_MAX_LOAD_FACTOR,
    },
    stats::{AtomicOperationStats, OperationCount, OperationRecorder, OperationStatsSnapshot},
    types::{Entry, Key, OperationType, TableSelector},
};

use std::{borrow::Borrow, hash::Hash};

// 简化默认类型别名
pub type DefaultTable = CuckooTable<String, String>;

/// 批量插入
///
/// 返回新插入的条目数，重复键不计入；扩容失败时立即返回错误，
/// 此前插入的条目保留在表中。
pub fn batch_insert<K: Key, V, S: HashStrategy>(
    table: &mut CuckooTable<K, V, S>,
    items: impl IntoIterator<Item = (K, V)>,
) -> Result<usize, CuckooError> {
    let mut count = 0;
    for (key, value) in items {
        if table.insert(key, value)? {
            count += 1;
        }
    }
    Ok(count)
}

/// 批量查询
pub fn batch_get<'a, K, V, S, Q>(
    table: &CuckooTable<K, V, S>,
    keys: impl IntoIterator<Item = &'a Q>,
) -> Vec<Option<V>>
where
    K: Key + Borrow<Q>,
    V: Clone,
    S: HashStrategy,
    Q: Hash + Eq + ?Sized + 'a,
{
    keys.into_iter().map(|key| table.find(key)).collect()
}
