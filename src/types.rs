//! 核心类型定义 - 表选择器、条目与操作类型

use std::{
    fmt::{self, Display},
    hash::Hash,
};

/// 键特征 - 只要求可哈希、可判等
pub trait Key: Hash + Eq {}

impl<T: Hash + Eq> Key for T {}

/// 两张槽位表之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSelector {
    /// 表A，插入链的起点
    A,
    /// 表B
    B,
}

impl TableSelector {
    /// 按扫描顺序排列的全部选择器
    pub const ALL: [TableSelector; 2] = [TableSelector::A, TableSelector::B];

    /// 在表数组中的下标
    pub const fn index(self) -> usize {
        match self {
            TableSelector::A => 0,
            TableSelector::B => 1,
        }
    }

    /// 另一张表
    pub const fn other(self) -> Self {
        match self {
            TableSelector::A => TableSelector::B,
            TableSelector::B => TableSelector::A,
        }
    }

    /// 转换为字符串表示
    pub const fn as_str(self) -> &'static str {
        match self {
            TableSelector::A => "a",
            TableSelector::B => "b",
        }
    }
}

impl Display for TableSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 键值对条目，任一时刻只存在于一个槽位中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// 拆成 `(key, value)` 元组
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 插入操作（失败即重复键）
    Insert,
    /// 查找操作（成功即命中）
    Find,
    /// 删除操作（成功即命中）
    Delete,
    /// 踢出操作
    Kick,
    /// 扩容操作
    Grow,
    /// 单轮重哈希（失败即新表内出现踢出循环）
    Rehash,
}

impl OperationType {
    /// 全部操作类型，顺序与统计数组一致
    pub const ALL: [OperationType; 6] = [
        OperationType::Insert,
        OperationType::Find,
        OperationType::Delete,
        OperationType::Kick,
        OperationType::Grow,
        OperationType::Rehash,
    ];

    /// 在统计数组中的下标
    pub const fn index(self) -> usize {
        match self {
            OperationType::Insert => 0,
            OperationType::Find => 1,
            OperationType::Delete => 2,
            OperationType::Kick => 3,
            OperationType::Grow => 4,
            OperationType::Rehash => 5,
        }
    }

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Insert => "insert",
            OperationType::Find => "find",
            OperationType::Delete => "delete",
            OperationType::Kick => "kick",
            OperationType::Grow => "grow",
            OperationType::Rehash => "rehash",
        }
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_flip() {
        assert_eq!(TableSelector::A.other(), TableSelector::B);
        assert_eq!(TableSelector::B.other(), TableSelector::A);
        assert_eq!(TableSelector::A.other().other(), TableSelector::A);
        assert_eq!(TableSelector::ALL.map(TableSelector::index), [0, 1]);
        assert_eq!(TableSelector::B.to_string(), "b");
    }

    #[test]
    fn test_entry_conversion() {
        let entry: Entry<&str, i32> = ("A", 2017).into();
        assert_eq!(entry.key, "A");
        assert_eq!(entry.into_pair(), ("A", 2017));
    }

    #[test]
    fn test_operation_indices_match_order() {
        for (i, op) in OperationType::ALL.iter().enumerate() {
            assert_eq!(op.index(), i, "{} 下标错位", op.as_str());
        }
    }
}
