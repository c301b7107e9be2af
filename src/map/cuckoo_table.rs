//! Cuckoo哈希表核心实现

use crate::{
    error::CuckooError,
    hash::{HashAlgorithm, HashStrategy, SeededHashStrategy},
    map::{
        slots::{self, SlotArray},
        DEFAULT_CONFIG,
    },
    stats::{self, OperationRecorder, OperationStatsSnapshot},
    types::{Entry, Key, OperationType, TableSelector},
};
use std::{
    borrow::Borrow,
    fmt,
    hash::Hash,
    iter::{self, Chain, FusedIterator},
    mem,
};

/// 单次插入允许的最大踢出轮数
pub const DEFAULT_MAX_KICK_DEPTH: usize = 16;
/// 默认扩容因子
pub const DEFAULT_GROWTH_FACTOR: f32 = 1.5;
/// 默认负载上限（相对两张表的总槽位数）
pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 0.5;

/// 哈希表配置
#[derive(Clone, Debug)]
pub struct CuckooTableConfig {
    /// 每张表的初始槽位数
    pub initial_capacity: usize,
    pub max_kick_depth: usize,
    pub growth_factor: f32,
    pub max_load_factor: f32,
    pub hash_algorithm: HashAlgorithm,
    /// 固定哈希种子，`None` 时从系统熵取种
    pub seed: Option<u64>,
    pub enable_stats: bool,
}

impl Default for CuckooTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_kick_depth: DEFAULT_MAX_KICK_DEPTH,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hash_algorithm: HashAlgorithm::AHash,
            seed: None,
            enable_stats: true,
        }
    }
}

impl CuckooTableConfig {
    /// 以默认参数和指定初始容量创建配置
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..DEFAULT_CONFIG.clone()
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), CuckooError> {
        let invalid = |reason: &str| Err(CuckooError::InvalidConfig { reason: reason.to_string() });

        if self.initial_capacity == 0 {
            return invalid("initial_capacity 必须大于0");
        }
        if self.max_kick_depth == 0 {
            return invalid("max_kick_depth 必须大于0");
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return invalid("growth_factor 必须是大于1的有限数");
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 || self.max_load_factor > 1.0 {
            return invalid("max_load_factor 必须位于 (0, 1] 区间");
        }
        Ok(())
    }

    /// 按配置构造带种子的哈希策略
    pub fn build_hasher(&self) -> SeededHashStrategy {
        match self.seed {
            Some(seed) => SeededHashStrategy::with_seed(self.hash_algorithm, seed),
            None => SeededHashStrategy::new(self.hash_algorithm),
        }
    }

    /// 计算扩容后的容量：`floor(capacity * growth_factor)`，且至少增长1
    pub fn grown_capacity(&self, capacity: usize) -> Result<usize, CuckooError> {
        let overflow = CuckooError::CapacityOverflow { capacity };
        let scaled = capacity as f64 * f64::from(self.growth_factor);
        if !scaled.is_finite() || scaled >= usize::MAX as f64 {
            return Err(overflow);
        }
        let at_least = capacity.checked_add(1).ok_or(overflow)?;
        Ok((scaled as usize).max(at_least))
    }
}

/// 哈希表统计信息
#[derive(Debug, Default, Clone)]
pub struct CuckooTableStats {
    pub size: usize,
    pub capacity: usize,
    pub load_factor: f32,
    pub insert_count: u64,
    pub duplicate_count: u64,
    pub find_count: u64,
    pub hit_count: u64,
    pub delete_count: u64,
    pub kick_count: u64,
    pub grow_count: u64,
    pub rehash_count: u64,
    pub failed_rehash_count: u64,
}

/// Cuckoo哈希表
///
/// 两张等长槽位表 A、B；键只可能位于 `hash(key, A) % capacity`（表A）
/// 或 `hash(key, B) % capacity`（表B），查找最多探测两个槽位。
pub struct CuckooTable<K, V, S = SeededHashStrategy> {
    tables: [SlotArray<K, V>; 2],
    // 每张表的槽位数
    capacity: usize,
    size: usize,
    hasher: S,
    config: CuckooTableConfig,
    stats: Box<dyn OperationRecorder>,
}

impl<K: Key, V> CuckooTable<K, V> {
    /// 创建指定容量的哈希表
    ///
    /// # Panics
    ///
    /// 容量为0时panic。
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "容量必须大于0");
        let config = CuckooTableConfig::with_capacity(capacity);
        let hasher = config.build_hasher();
        Self::build(config, hasher)
    }

    /// 使用固定哈希种子创建，结果可复现
    ///
    /// # Panics
    ///
    /// 容量为0时panic。
    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        assert!(capacity > 0, "容量必须大于0");
        let config = CuckooTableConfig {
            seed: Some(seed),
            ..CuckooTableConfig::with_capacity(capacity)
        };
        let hasher = config.build_hasher();
        Self::build(config, hasher)
    }

    /// 按配置创建，哈希策略由配置中的算法与种子决定
    pub fn from_config(config: CuckooTableConfig) -> Result<Self, CuckooError> {
        let hasher = config.build_hasher();
        Self::with_config(config, hasher)
    }
}

impl<K: Key, V, S: HashStrategy> CuckooTable<K, V, S> {
    /// 使用注入的哈希策略创建
    ///
    /// # Panics
    ///
    /// 容量为0时panic。
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        assert!(capacity > 0, "容量必须大于0");
        Self::build(CuckooTableConfig::with_capacity(capacity), hasher)
    }

    /// 使用配置和注入的哈希策略创建，配置无效或分配失败时返回错误
    pub fn with_config(config: CuckooTableConfig, hasher: S) -> Result<Self, CuckooError> {
        config.validate()?;
        let capacity = config.initial_capacity;
        let tables = [SlotArray::try_new(capacity)?, SlotArray::try_new(capacity)?];
        Ok(Self::assemble(tables, config, hasher))
    }

    fn build(config: CuckooTableConfig, hasher: S) -> Self {
        let capacity = config.initial_capacity;
        let tables = [SlotArray::new(capacity), SlotArray::new(capacity)];
        Self::assemble(tables, config, hasher)
    }

    fn assemble(tables: [SlotArray<K, V>; 2], config: CuckooTableConfig, hasher: S) -> Self {
        Self {
            capacity: config.initial_capacity,
            tables,
            size: 0,
            hasher,
            stats: stats::recorder(config.enable_stats),
            config,
        }
    }

    /// 键在指定表中的槽位
    fn slot_position<Q>(&self, key: &Q, table: TableSelector) -> usize
    where
        Q: Hash + ?Sized,
    {
        self.hasher.slot_for(key, table, self.capacity)
    }

    /// 依次探测表A、表B，返回键所在位置
    fn locate<Q>(&self, key: &Q) -> Option<(TableSelector, usize)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        TableSelector::ALL.into_iter().find_map(|table| {
            let pos = self.slot_position(key, table);
            match self.tables[table.index()].get(pos) {
                Some(entry) if entry.key.borrow() == key => Some((table, pos)),
                _ => None,
            }
        })
    }

    /// 获取值的引用
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let found = self
            .locate(key)
            .and_then(|(table, pos)| self.tables[table.index()].get(pos))
            .map(|entry| &entry.value);
        self.stats.record(OperationType::Find, found.is_some());
        found
    }

    /// 查找键对应的值，返回副本
    pub fn find<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.get(key).cloned()
    }

    /// 判断键是否存在
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.locate(key).is_some()
    }

    /// 插入键值对
    ///
    /// 键已存在时返回 `Ok(false)` 且不做任何修改；踢出循环在内部通过扩容重试消化，
    /// 只有扩容所需内存无法分配（或容量溢出）时才返回错误，此时哈希表恢复到
    /// 调用前的状态。
    pub fn insert(&mut self, key: K, value: V) -> Result<bool, CuckooError> {
        if self.contains_key(&key) {
            self.stats.record(OperationType::Insert, false);
            return Ok(false);
        }

        if self.needs_growth() {
            if let Err(err) = self.grow_and_rehash(&mut None) {
                self.stats.record(OperationType::Insert, false);
                return Err(err);
            }
        }

        let placement = Placement {
            hasher: &self.hasher,
            capacity: self.capacity,
            max_kick_depth: self.config.max_kick_depth,
            stats: &*self.stats,
        };
        let mut unused = None;
        let mut no_staged: [SlotArray<K, V>; 0] = [];
        let mut arena = SwapArena::new(
            Some(Entry::new(key, value)),
            &mut unused,
            &mut self.tables,
            &mut no_staged,
        );

        if !placement.kick(&mut arena, Site::Live) {
            log_debug!(
                "eviction chain exceeded {} rounds at capacity {}, growing",
                self.config.max_kick_depth,
                self.capacity
            );
            // 被挤出的条目随重哈希一起放入新表
            let SwapArena { hand: mut displaced, journal, .. } = arena;
            if let Err(err) = self.grow_and_rehash(&mut displaced) {
                let mut unused = None;
                let mut no_staged: [SlotArray<K, V>; 0] = [];
                SwapArena::resume(displaced, journal, &mut unused, &mut self.tables, &mut no_staged)
                    .rewind();
                log_error!("扩容失败，本次插入已撤销: {}", err);
                self.stats.record(OperationType::Insert, false);
                return Err(err);
            }
        }

        self.size += 1;
        self.stats.record(OperationType::Insert, true);
        Ok(true)
    }

    /// 删除键，返回被删除的键值对
    pub fn delete<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self
            .locate(key)
            .and_then(|(table, pos)| self.tables[table.index()].take(pos));
        if removed.is_some() {
            self.size -= 1;
        }
        self.stats.record(OperationType::Delete, removed.is_some());
        removed.map(Entry::into_pair)
    }

    /// 删除键，只返回值
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.delete(key).map(|(_, value)| value)
    }

    fn needs_growth(&self) -> bool {
        let total_slots = self.capacity as f64 * 2.0;
        self.size as f64 >= f64::from(self.config.max_load_factor) * total_slots
    }

    /// 扩容并重哈希，`pending` 中的条目一并放入新表
    ///
    /// 每一轮：按扩容因子计算新容量、分配新表、在哈希策略副本上重置种子，再把
    /// `pending` 与全部条目逐个移入新表。新表中出现踢出循环时撤销本轮的全部换位，
    /// 以更大的容量重来。只有某一轮完整成功才替换表、容量和哈希策略；返回错误时
    /// 哈希表与 `pending` 均保持原样。
    #[cfg_attr(not(feature = "logging"), allow(unused_variables, unused_assignments))]
    fn grow_and_rehash(&mut self, pending: &mut Option<Entry<K, V>>) -> Result<(), CuckooError> {
        let mut trial = self.hasher.clone();
        let mut capacity = self.capacity;
        let mut round = 0usize;

        log_info!("growing cuckoo table: capacity={}, size={}", self.capacity, self.size);

        loop {
            round += 1;
            let (next, mut staged) = match self.allocate_grown(capacity) {
                Ok(allocated) => allocated,
                Err(err) => {
                    self.stats.record(OperationType::Grow, false);
                    log_error!("扩容失败，哈希表保持原样: {}", err);
                    return Err(err);
                }
            };

            trial.reset();
            let placement = Placement {
                hasher: &trial,
                capacity: next,
                max_kick_depth: self.config.max_kick_depth,
                stats: &*self.stats,
            };
            let mut arena = SwapArena::new(None, &mut *pending, &mut self.tables, &mut staged);
            let placed = placement.restage(&mut arena);
            if !placed {
                arena.rewind();
            }
            drop(arena);

            if placed {
                self.tables = staged;
                self.hasher = trial;
                self.capacity = next;
                self.stats.record(OperationType::Rehash, true);
                self.stats.record(OperationType::Grow, true);
                log_info!(
                    "cuckoo table grown: capacity={}, size={}, rounds={}",
                    self.capacity,
                    self.size,
                    round
                );
                return Ok(());
            }

            self.stats.record(OperationType::Rehash, false);
            log_warn!(
                "eviction cycle while rehashing into capacity {} (round {}), growing again",
                next,
                round
            );
            capacity = next;
        }
    }

    fn allocate_grown(&self, capacity: usize) -> Result<(usize, [SlotArray<K, V>; 2]), CuckooError> {
        let next = self.config.grown_capacity(capacity)?;
        Ok((next, [SlotArray::try_new(next)?, SlotArray::try_new(next)?]))
    }

    /// 获取统计信息
    pub fn stats(&self) -> CuckooTableStats {
        let ops = self.stats.snapshot();
        CuckooTableStats {
            size: self.size,
            capacity: self.capacity,
            load_factor: self.load_factor(),
            insert_count: ops.get(OperationType::Insert).succeeded,
            duplicate_count: ops.get(OperationType::Insert).failed(),
            find_count: ops.get(OperationType::Find).total,
            hit_count: ops.get(OperationType::Find).succeeded,
            delete_count: ops.get(OperationType::Delete).succeeded,
            kick_count: ops.get(OperationType::Kick).total,
            grow_count: ops.get(OperationType::Grow).succeeded,
            rehash_count: ops.get(OperationType::Rehash).total,
            failed_rehash_count: ops.get(OperationType::Rehash).failed(),
        }
    }
}

impl<K, V, S> CuckooTable<K, V, S> {
    /// 已存储的键值对数量
    pub fn len(&self) -> usize {
        self.size
    }

    /// 同 [`len`](Self::len)
    pub fn count(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// 每张表的槽位数
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 负载因子：条目数 / 两张表的总槽位数
    pub fn load_factor(&self) -> f32 {
        self.size as f32 / (self.capacity as f32 * 2.0)
    }

    pub fn config(&self) -> &CuckooTableConfig {
        &self.config
    }

    /// 当前哈希策略
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// 清空全部条目，保留容量和哈希种子
    pub fn clear(&mut self) {
        self.tables.iter_mut().for_each(SlotArray::clear);
        self.size = 0;
    }

    /// 按扫描顺序（表A槽位0..capacity，再表B）遍历
    pub fn iter(&self) -> Iter<'_, K, V> {
        let [a, b] = &self.tables;
        Iter {
            inner: a.iter().chain(b.iter()),
            remaining: self.size,
        }
    }

    /// 全部键的副本
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// 全部值的副本
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// 操作统计快照
    pub fn operation_stats(&self) -> OperationStatsSnapshot {
        self.stats.snapshot()
    }

    /// 重置操作统计
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        let mut output = format!(
            "# HELP cuckoo_table_size Stored entries\n\
             # TYPE cuckoo_table_size gauge\n\
             cuckoo_table_size {}\n\
             # HELP cuckoo_table_capacity Slots per table\n\
             # TYPE cuckoo_table_capacity gauge\n\
             cuckoo_table_capacity {}\n\
             # HELP cuckoo_table_load_factor Entries over total slots\n\
             # TYPE cuckoo_table_load_factor gauge\n\
             cuckoo_table_load_factor {:.4}\n",
            self.size,
            self.capacity,
            self.load_factor()
        );
        output.push_str(&self.stats.export_prometheus());
        output
    }
}

impl<K: Key, V> Default for CuckooTable<K, V> {
    fn default() -> Self {
        let config = DEFAULT_CONFIG.clone();
        let hasher = config.build_hasher();
        Self::build(config, hasher)
    }
}

impl<K, V, S> fmt::Debug for CuckooTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CuckooTable")
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("load_factor", &self.load_factor())
            .finish()
    }
}

/// 以 `[(k, v), ...]` 形式输出全部条目
impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Display for CuckooTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({:?}, {:?})", key, value)?;
        }
        f.write_str("]")
    }
}

/// 逐个插入，跳过重复键
///
/// # Panics
///
/// 扩容所需内存无法分配时panic；需要处理该错误时请使用 [`CuckooTable::insert`]。
impl<K: Key, V, S: HashStrategy> Extend<(K, V)> for CuckooTable<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(err) = self.insert(key, value) {
                panic!("批量插入失败: {}", err);
            }
        }
    }
}

impl<K: Key, V> FromIterator<(K, V)> for CuckooTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<'a, K, V, S> IntoIterator for &'a CuckooTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for CuckooTable<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let [a, b] = self.tables;
        IntoIter {
            inner: a.into_entries().chain(b.into_entries()),
        }
    }
}

/// 一次换位涉及的位置：手中条目与该位置的内容互换
#[derive(Debug, Clone, Copy)]
enum Site {
    /// 扩容时随重哈希一起放入的条目
    Pending,
    /// 当前生效的表
    Live(TableSelector, usize),
    /// 扩容中正在填充的新表
    Staged(TableSelector, usize),
}

/// 换位工作区
///
/// 所有移动都是“手中条目”与某个位置的互换并记入日志。互换是自逆的，
/// 按相反顺序重放日志即可恢复到开始前的状态。
struct SwapArena<'a, K, V> {
    hand: Option<Entry<K, V>>,
    pending: &'a mut Option<Entry<K, V>>,
    live: &'a mut [SlotArray<K, V>],
    staged: &'a mut [SlotArray<K, V>],
    journal: Vec<Site>,
}

impl<'a, K, V> SwapArena<'a, K, V> {
    fn new(
        hand: Option<Entry<K, V>>,
        pending: &'a mut Option<Entry<K, V>>,
        live: &'a mut [SlotArray<K, V>],
        staged: &'a mut [SlotArray<K, V>],
    ) -> Self {
        Self::resume(hand, Vec::new(), pending, live, staged)
    }

    fn resume(
        hand: Option<Entry<K, V>>,
        journal: Vec<Site>,
        pending: &'a mut Option<Entry<K, V>>,
        live: &'a mut [SlotArray<K, V>],
        staged: &'a mut [SlotArray<K, V>],
    ) -> Self {
        Self { hand, pending, live, staged, journal }
    }

    fn exchange(&mut self, site: Site) {
        match site {
            Site::Pending => mem::swap(self.pending, &mut self.hand),
            Site::Live(table, pos) => self.live[table.index()].exchange(pos, &mut self.hand),
            Site::Staged(table, pos) => self.staged[table.index()].exchange(pos, &mut self.hand),
        }
    }

    fn swap(&mut self, site: Site) {
        self.exchange(site);
        self.journal.push(site);
    }

    /// 撤销日志中的全部换位
    fn rewind(&mut self) {
        while let Some(site) = self.journal.pop() {
            self.exchange(site);
        }
    }
}

/// 踢出链参数：哈希策略、目标容量与轮数上限
struct Placement<'a, S> {
    hasher: &'a S,
    capacity: usize,
    max_kick_depth: usize,
    stats: &'a dyn OperationRecorder,
}

impl<S: HashStrategy> Placement<'_, S> {
    /// 沿踢出链放置手中的条目
    ///
    /// 从表A开始；目标槽位为空则落位，否则与占用者交换并转向另一张表。
    /// 超过 `max_kick_depth` 轮仍未落位时返回 `false`，被挤出的条目留在手中。
    fn kick<K: Key, V>(
        &self,
        arena: &mut SwapArena<'_, K, V>,
        site: fn(TableSelector, usize) -> Site,
    ) -> bool {
        let mut target = TableSelector::A;
        for _ in 0..self.max_kick_depth {
            let pos = match &arena.hand {
                Some(entry) => self.hasher.slot_for(&entry.key, target, self.capacity),
                None => return true,
            };
            arena.swap(site(target, pos));
            if arena.hand.is_none() {
                return true;
            }
            self.stats.record(OperationType::Kick, true);
            target = target.other();
        }
        arena.hand.is_none()
    }

    /// 把 `pending` 和生效表中的全部条目移入新表，顺序为表A、表B的槽位顺序
    fn restage<K: Key, V>(&self, arena: &mut SwapArena<'_, K, V>) -> bool {
        let live_capacity = arena.live.first().map_or(0, SlotArray::len);
        let sources = TableSelector::ALL
            .into_iter()
            .flat_map(|table| (0..live_capacity).map(move |pos| Site::Live(table, pos)));
        for source in iter::once(Site::Pending).chain(sources) {
            arena.exchange(source);
            if arena.hand.is_none() {
                continue;
            }
            arena.journal.push(source);
            if !self.kick(arena, Site::Staged) {
                return false;
            }
        }
        true
    }
}

/// 哈希表借用迭代器
pub struct Iter<'a, K, V> {
    inner: Chain<slots::Iter<'a, K, V>, slots::Iter<'a, K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// 哈希表所有权迭代器
pub struct IntoIter<K, V> {
    inner: Chain<slots::IntoIter<K, V>, slots::IntoIter<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
