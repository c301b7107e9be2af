// src/map/slots.rs
//! 槽位数组 - 单张表的定长存储，每个槽位为空或持有一个条目

use crate::{error::CuckooError, types::Entry};
use std::{fmt, iter::FusedIterator, mem, slice, vec};

pub struct SlotArray<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    occupied: usize,
}

impl<K, V> fmt::Debug for SlotArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotArray(slots: {}, occupied: {})", self.slots.len(), self.occupied)
    }
}

impl<K, V> SlotArray<K, V> {
    /// 创建指定长度的空数组，分配失败时中止
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| None).collect(),
            occupied: 0,
        }
    }

    /// 创建指定长度的空数组，分配失败时返回错误
    pub fn try_new(len: usize) -> Result<Self, CuckooError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|e| CuckooError::allocation::<Option<Entry<K, V>>>(len, e))?;
        slots.resize_with(len, || None);
        Ok(Self { slots, occupied: 0 })
    }

    /// 槽位总数
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 已占用槽位数
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn get(&self, pos: usize) -> Option<&Entry<K, V>> {
        self.slots.get(pos).and_then(Option::as_ref)
    }

    /// 取出并清空槽位
    pub fn take(&mut self, pos: usize) -> Option<Entry<K, V>> {
        let taken = self.slots.get_mut(pos).and_then(Option::take);
        if taken.is_some() {
            self.occupied -= 1;
        }
        taken
    }

    /// 槽位内容与 `hand` 互换，任一侧可以为空
    pub fn exchange(&mut self, pos: usize, hand: &mut Option<Entry<K, V>>) {
        let slot = &mut self.slots[pos];
        match (slot.is_some(), hand.is_some()) {
            (false, true) => self.occupied += 1,
            (true, false) => self.occupied -= 1,
            _ => {}
        }
        mem::swap(slot, hand);
    }

    /// 清空全部槽位，保留长度
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.occupied = 0;
    }

    /// 按槽位顺序遍历已占用条目
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.slots.iter(),
            remaining: self.occupied,
        }
    }

    /// 按槽位顺序取出全部条目
    pub fn into_entries(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.slots.into_iter(),
            remaining: self.occupied,
        }
    }
}

/// 已占用条目的借用迭代器
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Option<Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.by_ref().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

/// 已占用条目的所有权迭代器
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<Option<Entry<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.by_ref().find_map(|slot| slot)?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
