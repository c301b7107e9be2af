//! 哈希表核心模块 - 实现Cuckoo哈希表及其组件

pub mod cuckoo_table;
pub mod slots;

pub use cuckoo_table::{
    CuckooTable, CuckooTableConfig, CuckooTableStats, IntoIter, Iter, DEFAULT_GROWTH_FACTOR,
    DEFAULT_MAX_KICK_DEPTH, DEFAULT_MAX_LOAD_FACTOR,
};
pub use slots::SlotArray;

use once_cell::sync::Lazy;

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<CuckooTableConfig> = Lazy::new(CuckooTableConfig::default);
