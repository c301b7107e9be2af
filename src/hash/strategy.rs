//! 哈希策略模块 - 定义键到槽位的映射能力

use crate::types::TableSelector;
use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
};

/// 哈希算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    AHash,
    XxHash,
    /// 标准库 SipHash，种子作为前缀写入
    Default,
}

/// 哈希策略特征
///
/// 同一内部种子下对同一键、同一表必须返回相同结果；
/// `reset` 之后映射必须改变，哈希表依赖这一点在扩容时打破踢出循环。
/// 扩容在策略的副本上重置与试算，整轮成功后才替换原策略。
pub trait HashStrategy: Clone {
    /// 计算键在指定表中的哈希值
    fn hash_key<Q: Hash + ?Sized>(&self, key: &Q, table: TableSelector) -> u64;

    /// 重置内部种子
    fn reset(&mut self);

    /// 使用指定容量计算槽位
    fn slot_for<Q: Hash + ?Sized>(&self, key: &Q, table: TableSelector, capacity: usize) -> usize {
        super::calculate_slot(self.hash_key(key, table), capacity)
    }
}

/// 闭包驱动的哈希策略
///
/// 键先经固定种子的 SipHash 压成 `u64`，再连同表选择器和重置代数交给闭包，
/// 适合注入自定义或刻意退化的哈希函数。
pub struct FnHashStrategy<F> {
    func: F,
    generation: u64,
}

impl<F> FnHashStrategy<F>
where
    F: Fn(u64, TableSelector, u64) -> u64,
{
    /// 创建新策略，代数从0开始
    pub fn new(func: F) -> Self {
        Self { func, generation: 0 }
    }

    /// 已执行的重置次数
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<F: Clone> Clone for FnHashStrategy<F> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            generation: self.generation,
        }
    }
}

impl<F> HashStrategy for FnHashStrategy<F>
where
    F: Fn(u64, TableSelector, u64) -> u64 + Clone,
{
    fn hash_key<Q: Hash + ?Sized>(&self, key: &Q, table: TableSelector) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (self.func)(hasher.finish(), table, self.generation)
    }

    fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<F> fmt::Debug for FnHashStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHashStrategy")
            .field("generation", &self.generation)
            .finish()
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_strategy_sees_generation() {
        let mut strategy = FnHashStrategy::new(|hash, table, generation| {
            hash ^ (table.index() as u64) ^ (generation << 32)
        });
        let before_a = strategy.hash_key("key", TableSelector::A);
        let before_b = strategy.hash_key("key", TableSelector::B);
        assert_ne!(before_a, before_b, "两张表应得到不同哈希");

        let snapshot = strategy.clone();
        strategy.reset();
        assert_eq!(strategy.generation(), 1);
        assert_eq!(snapshot.hash_key("key", TableSelector::A), before_a, "副本不受重置影响");
        assert_ne!(strategy.hash_key("key", TableSelector::A), before_a, "重置后映射应改变");
    }

    #[test]
    fn test_slot_for_stays_in_range() {
        let strategy = FnHashStrategy::new(|hash, _, _| hash);
        for i in 0..100u32 {
            assert!(strategy.slot_for(&i, TableSelector::B, 7) < 7);
        }
    }

    #[test]
    fn test_borrowed_forms_hash_alike() {
        let strategy = FnHashStrategy::new(|hash, _, _| hash);
        let owned = String::from("borrow");
        assert_eq!(
            strategy.hash_key(&owned, TableSelector::A),
            strategy.hash_key("borrow", TableSelector::A)
        );
    }
}
