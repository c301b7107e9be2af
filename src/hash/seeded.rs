//! 带种子的双表哈希策略 - 每张表一个独立种子，重置时重新取种

use crate::{
    hash::strategy::{HashAlgorithm, HashStrategy},
    types::TableSelector,
};
use ahash::RandomState;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{BuildHasher, Hash, Hasher},
};

// 派生 ahash 另外两个种子字时使用的常量
const AHASH_MIX_A: u64 = 0x243F_6A88_85A3_08D3;
const AHASH_MIX_B: u64 = 0x1319_8A2E_0370_7344;

/// 带种子的哈希策略
///
/// 种子由内部 `StdRng` 产生：以固定种子构造时，初始种子与之后每次
/// `reset` 得到的种子序列都可复现。
#[derive(Clone)]
pub struct SeededHashStrategy {
    algorithm: HashAlgorithm,
    seeds: [u64; 2],
    states: [RandomState; 2],
    rng: StdRng,
    generation: u64,
}

impl SeededHashStrategy {
    /// 从系统熵取种创建
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self::from_rng(algorithm, StdRng::from_entropy())
    }

    /// 使用固定种子创建
    pub fn with_seed(algorithm: HashAlgorithm, seed: u64) -> Self {
        Self::from_rng(algorithm, StdRng::seed_from_u64(seed))
    }

    fn from_rng(algorithm: HashAlgorithm, mut rng: StdRng) -> Self {
        let seeds = Self::draw_seeds(&mut rng);
        Self {
            algorithm,
            seeds,
            states: Self::build_states(seeds),
            rng,
            generation: 0,
        }
    }

    /// 为两张表各取一个种子，保证两者不同
    fn draw_seeds(rng: &mut StdRng) -> [u64; 2] {
        let a: u64 = rng.gen();
        let mut b: u64 = rng.gen();
        if a == b {
            b = !a;
        }
        [a, b]
    }

    fn build_states(seeds: [u64; 2]) -> [RandomState; 2] {
        seeds.map(|seed| RandomState::with_seeds(seed, seed.rotate_left(32), AHASH_MIX_A, AHASH_MIX_B))
    }

    /// 当前使用的哈希算法
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// 当前两张表的种子
    pub fn seeds(&self) -> [u64; 2] {
        self.seeds
    }

    /// 已执行的重置次数
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for SeededHashStrategy {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

impl HashStrategy for SeededHashStrategy {
    fn hash_key<Q: Hash + ?Sized>(&self, key: &Q, table: TableSelector) -> u64 {
        match self.algorithm {
            HashAlgorithm::AHash => {
                let mut hasher = self.states[table.index()].build_hasher();
                key.hash(&mut hasher);
                hasher.finish()
            }
            HashAlgorithm::XxHash => {
                let mut hasher = twox_hash::XxHash64::with_seed(self.seeds[table.index()]);
                key.hash(&mut hasher);
                hasher.finish()
            }
            HashAlgorithm::Default => {
                let mut hasher = DefaultHasher::new();
                self.seeds[table.index()].hash(&mut hasher);
                key.hash(&mut hasher);
                hasher.finish()
            }
        }
    }

    fn reset(&mut self) {
        self.seeds = Self::draw_seeds(&mut self.rng);
        self.states = Self::build_states(self.seeds);
        self.generation += 1;
        log_debug!(
            "hash seeds reset: generation={}, algorithm={:?}",
            self.generation,
            self.algorithm
        );
    }
}

impl fmt::Debug for SeededHashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededHashStrategy")
            .field("algorithm", &self.algorithm)
            .field("generation", &self.generation)
            .finish()
    }
}
