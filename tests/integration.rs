//! Cuckoo哈希表集成测试

use cuckoo_table::{
    batch_get, batch_insert, CuckooError, CuckooTable, CuckooTableConfig, FnHashStrategy,
    HashAlgorithm, OperationType,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use test_log::test;

const SEED: u64 = 42;

/// 创建指定容量的哈希表，插入键 "0".."numKeys" 与对应整数值
fn make_table(size: usize, num_keys: usize) -> CuckooTable<String, usize> {
    let mut table = CuckooTable::new(size);
    for i in 0..num_keys {
        assert!(table.insert(i.to_string(), i).expect("插入失败"));
    }
    table
}

/// 检查 `[(k, v), ...]` 输出：每个元素都是某个 `("i", i)`，且恰好出现一次
fn assert_rendering(rendered: &str, num_keys: usize) {
    assert!(rendered.starts_with('[') && rendered.ends_with(']'), "格式错误: {}", rendered);
    let body = &rendered[1..rendered.len() - 1];
    let expected: HashSet<String> = (0..num_keys).map(|i| format!("(\"{}\", {})", i, i)).collect();
    let seen: HashSet<String> = if body.is_empty() {
        HashSet::new()
    } else {
        body.split(", (")
            .enumerate()
            .map(|(i, part)| if i == 0 { part.to_string() } else { format!("({}", part) })
            .collect()
    };
    assert_eq!(seen, expected);
}

fn find_true(size: usize) {
    let num_keys = size / 2;
    let table = make_table(size, num_keys);
    for i in 0..num_keys {
        assert_eq!(table.find(i.to_string().as_str()), Some(i));
    }
}

fn find_false(size: usize) {
    let num_keys = size / 2;
    let table = make_table(size, num_keys);
    for i in num_keys..num_keys * 2 {
        assert_eq!(table.find(i.to_string().as_str()), None);
    }
}

/// 插入后检查计数、命中与未命中；`num_keys` 为 `None` 时插入容量的三分之一
fn insert_check(size: usize, num_keys: Option<usize>) {
    let num_keys = num_keys.unwrap_or(size / 3);
    let table = make_table(size, num_keys);
    assert_eq!(table.len(), num_keys);
    for i in 0..num_keys {
        assert_eq!(table.find(i.to_string().as_str()), Some(i), "键 {} 丢失", i);
    }
    for i in num_keys..num_keys * 2 {
        assert!(table.find(i.to_string().as_str()).is_none());
    }
}

fn delete_all(size: usize) {
    let num_keys = size / 2;
    let mut table = make_table(size, num_keys);
    for i in 0..num_keys {
        assert_eq!(table.delete(i.to_string().as_str()), Some((i.to_string(), i)));
    }
    assert_eq!(table.len(), 0);
    for i in 0..num_keys {
        assert!(table.find(i.to_string().as_str()).is_none());
    }
}

fn delete_false(size: usize) {
    let num_keys = size / 2;
    let mut table = make_table(size, num_keys);
    for i in num_keys..num_keys * 2 {
        assert!(table.delete(i.to_string().as_str()).is_none());
    }
    assert_eq!(table.len(), num_keys);
    for i in 0..num_keys {
        assert_eq!(table.find(i.to_string().as_str()), Some(i));
    }
}

#[test]
fn test_rendering() {
    let table = make_table(10, 2);
    let rendered = table.to_string();
    assert!(rendered == r#"[("0", 0), ("1", 1)]"# || rendered == r#"[("1", 1), ("0", 0)]"#);

    for (size, num_keys) in [(50, 5), (60, 7), (70, 10), (5, 0)] {
        assert_rendering(&make_table(size, num_keys).to_string(), num_keys);
    }
}

#[test]
fn test_len() {
    let table = make_table(5, 2);
    assert_eq!(table.len(), 2);
    assert_eq!(table.count(), 2);
    assert!(!table.is_empty());
}

#[test]
fn test_find_true() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for range in [1..=5, 7..=10, 11..=15, 30..=50, 100..=200, 300..=500, 1000..=2000, 10_000..=20_000] {
        find_true(rng.gen_range(range));
    }
}

#[test]
fn test_find_false() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    for range in [1..=5, 7..=10, 11..=15, 30..=50, 100..=200, 300..=500, 1000..=2000, 10_000..=20_000] {
        find_false(rng.gen_range(range));
    }
}

#[test]
fn test_insert_without_growth() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    for range in [1..=5, 7..=10, 11..=15, 20..=30, 40..=50, 60..=70, 100..=200, 300..=400, 500..=600] {
        insert_check(rng.gen_range(range), None);
    }
}

#[test]
fn test_insert_force_grow() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);
    insert_check(3, Some(rng.gen_range(5..=10)));
    insert_check(5, Some(rng.gen_range(10..=20)));
    insert_check(10, Some(rng.gen_range(20..=30)));
    insert_check(30, Some(rng.gen_range(100..=200)));
    insert_check(100, Some(rng.gen_range(250..=300)));
    insert_check(300, Some(rng.gen_range(350..=500)));
    insert_check(rng.gen_range(10..=80), Some(rng.gen_range(1000..=2000)));
    insert_check(rng.gen_range(10..=80), Some(rng.gen_range(10_000..=20_000)));
}

#[test]
fn test_insert_force_grow_100k() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);
    let size = rng.gen_range(10..=100);
    let table = make_table(size, 100_000);
    assert_eq!(table.len(), 100_000);
    assert!(table.load_factor() <= 0.5);
    for i in (0..100_000).step_by(7) {
        assert_eq!(table.find(i.to_string().as_str()), Some(i));
    }
    assert!(table.find("100000").is_none());
}

#[test]
fn test_delete_one() {
    let mut table = make_table(5, 2);
    assert_eq!(table.delete("0"), Some(("0".to_string(), 0)));
    assert_eq!(table.find("0"), None);
    assert_eq!(table.len(), 1);
    assert_eq!(table.find("1"), Some(1));
}

#[test]
fn test_delete_all() {
    let mut rng = StdRng::seed_from_u64(SEED + 5);
    for range in [1..=3, 5..=10, 20..=30, 100..=200, 300..=500, 1000..=2000, 5000..=8000] {
        delete_all(rng.gen_range(range));
    }
}

#[test]
fn test_delete_false() {
    delete_false(1);
    let mut rng = StdRng::seed_from_u64(SEED + 6);
    for range in [2..=5, 10..=15, 15..=20, 30..=50, 100..=200, 300..=500, 1000..=2000] {
        delete_false(rng.gen_range(range));
    }
}

#[test]
fn test_mixed_operations_match_reference() {
    let mut rng = StdRng::seed_from_u64(SEED + 7);
    let mut table = CuckooTable::with_seed(4, SEED);
    let mut reference = std::collections::HashMap::new();

    for _ in 0..20_000 {
        let key: u16 = rng.gen_range(0..2048);
        match rng.gen_range(0..3) {
            0 | 1 => {
                let value: u32 = rng.gen();
                let inserted = table.insert(key, value).unwrap();
                assert_eq!(inserted, !reference.contains_key(&key));
                reference.entry(key).or_insert(value);
            }
            _ => {
                assert_eq!(table.remove(&key), reference.remove(&key));
            }
        }
        assert_eq!(table.len(), reference.len());
    }

    for (key, value) in &reference {
        assert_eq!(table.get(key), Some(value));
    }
    let mut keys = table.keys();
    keys.sort_unstable();
    let mut expected: Vec<_> = reference.keys().copied().collect();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn test_degenerate_hash_recovers_through_growth() {
    // 第0代全部映射到槽位0，三个键必然形成踢出循环
    let strategy = FnHashStrategy::new(|hash, table, generation| {
        if generation == 0 {
            0
        } else {
            hash ^ ((table.index() as u64 + 1) * generation).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        }
    });
    let mut table = CuckooTable::with_hasher(8, strategy);
    for key in ["a", "b", "c"] {
        assert!(table.insert(key.to_string(), key.to_uppercase()).unwrap());
    }

    assert!(table.capacity() > 8);
    assert_eq!(table.len(), 3);
    for key in ["a", "b", "c"] {
        assert_eq!(table.find(key), Some(key.to_uppercase()));
    }
    assert!(table.stats().grow_count >= 1);
}

#[test]
fn test_algorithms_and_seeds() {
    for algorithm in [HashAlgorithm::AHash, HashAlgorithm::XxHash, HashAlgorithm::Default] {
        let config = CuckooTableConfig {
            initial_capacity: 7,
            hash_algorithm: algorithm,
            seed: Some(SEED),
            ..Default::default()
        };
        let mut first = CuckooTable::from_config(config.clone()).unwrap();
        let mut second = CuckooTable::from_config(config).unwrap();
        for i in 0..500u64 {
            first.insert(i, i * 2).unwrap();
            second.insert(i, i * 2).unwrap();
        }
        assert_eq!(first.keys(), second.keys(), "相同种子应得到相同布局: {:?}", algorithm);
        assert_eq!(first.capacity(), second.capacity());
        for i in 0..500u64 {
            assert_eq!(first.find(&i), Some(i * 2));
        }
    }
}

#[test]
fn test_invalid_config_is_reported() {
    let config = CuckooTableConfig { max_load_factor: 2.0, ..Default::default() };
    let err = CuckooTable::<String, u32>::from_config(config).unwrap_err();
    assert!(matches!(err, CuckooError::InvalidConfig { .. }));
    assert!(err.is_recoverable());
    assert!(err.recovery_suggestion().is_some());
}

#[test]
fn test_batch_operations_and_stats() {
    let mut table = CuckooTable::with_seed(2, SEED);
    let items: Vec<(String, u32)> = (0..1000).map(|i| (format!("key-{}", i), i)).collect();
    assert_eq!(batch_insert(&mut table, items.clone()).unwrap(), 1000);
    assert_eq!(batch_insert(&mut table, items).unwrap(), 0);

    let results = batch_get(&table, ["key-0", "key-999", "missing"]);
    assert_eq!(results, vec![Some(0), Some(999), None]);

    let stats = table.stats();
    assert_eq!(stats.size, 1000);
    assert_eq!(stats.insert_count, 1000);
    assert_eq!(stats.duplicate_count, 1000);
    assert_eq!(stats.find_count, 3);
    assert_eq!(stats.hit_count, 2);
    assert!(stats.grow_count > 0);
    assert!(stats.load_factor <= 0.5);

    let ops = table.operation_stats();
    assert_eq!(ops.get(OperationType::Grow).succeeded, stats.grow_count);
    assert!(table.export_prometheus().contains("cuckoo_table_size 1000\n"));
}

#[test]
fn test_extend_and_iterate() {
    let mut table: CuckooTable<u32, u32> = (0..100).map(|i| (i, i * i)).collect();
    table.extend((50..150).map(|i| (i, 0)));
    assert_eq!(table.len(), 150);
    assert_eq!(table.get(&60), Some(&3600));

    let sum: u64 = (&table).into_iter().map(|(_, v)| u64::from(*v)).sum();
    assert_eq!(sum, (0..100u64).map(|i| i * i).sum::<u64>());
    assert_eq!(table.iter().len(), 150);
}

/// 扩容因子取最大值时，任何扩容都会容量溢出
fn overflowing_config(initial_capacity: usize, max_load_factor: f32) -> CuckooTableConfig {
    CuckooTableConfig {
        initial_capacity,
        growth_factor: f32::MAX,
        max_load_factor,
        seed: Some(SEED),
        ..Default::default()
    }
}

#[test]
fn test_capacity_overflow_at_load_threshold() {
    // 64槽位×2、负载上限 1/64：存满2个条目后下一次插入需要扩容
    let mut table = CuckooTable::from_config(overflowing_config(64, 1.0 / 64.0)).unwrap();
    assert!(table.insert("first".to_string(), 1).unwrap());
    assert!(table.insert("second".to_string(), 2).unwrap());

    let err = table.insert("third".to_string(), 3).unwrap_err();
    assert!(matches!(err, CuckooError::CapacityOverflow { capacity: 64 }));
    assert!(!err.is_recoverable());

    assert_eq!(table.len(), 2);
    assert_eq!(table.capacity(), 64);
    assert_eq!(table.find("first"), Some(1));
    assert_eq!(table.find("second"), Some(2));
    assert_eq!(table.find("third"), None);
    assert_eq!(table.stats().grow_count, 0);
}

#[test]
fn test_capacity_overflow_on_eviction_cycle() {
    let strategy = FnHashStrategy::new(|_, _, _| 0);
    let mut table = CuckooTable::with_config(overflowing_config(8, 0.5), strategy).unwrap();
    assert!(table.insert("a".to_string(), 1).unwrap());
    assert!(table.insert("b".to_string(), 2).unwrap());
    let layout_before = table.keys();

    // 三个键共享同一对槽位，踢出循环触发的扩容溢出
    let err = table.insert("c".to_string(), 3).unwrap_err();
    assert!(matches!(err, CuckooError::CapacityOverflow { capacity: 8 }));

    assert_eq!(table.len(), 2);
    assert_eq!(table.keys(), layout_before);
    assert_eq!(table.find("a"), Some(1));
    assert_eq!(table.find("b"), Some(2));
    assert_eq!(table.find("c"), None);
    assert_eq!(table.to_string().matches('(').count(), 2);

    // 重复失败不会累积损坏
    assert!(table.insert("c".to_string(), 3).is_err());
    assert!(table.insert("d".to_string(), 4).is_err());
    assert_eq!(table.len(), 2);
    assert_eq!(table.keys(), layout_before);
}
