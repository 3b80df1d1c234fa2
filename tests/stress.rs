use std::collections::BTreeMap;

use bst_store::TreeMap;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SEED: u64 = 0x5eed_b57;
const ROUNDS: usize = 20_000;
const KEY_SPACE: u32 = 2_048;

#[test]
fn random_inserts_and_removes() {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut map: TreeMap<u32, u64> = TreeMap::new();
    let mut reference = BTreeMap::new();

    for round in 0..ROUNDS {
        let key = rng.gen_range(0..KEY_SPACE);
        if rng.gen_bool(0.6) {
            let value = rng.gen();
            assert_eq!(map.insert(key, value), reference.insert(key, value));
        } else {
            assert_eq!(map.remove(&key), reference.remove(&key));
        }

        if round % 1_000 == 0 {
            map.validate();
        }
    }

    map.validate();
    assert_eq!(map.node_count(), 2 * reference.len() + 1);
    assert!(map.iter().eq(reference.iter()));
}

#[test]
fn drain_through_the_root() {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut map: TreeMap<u32, u32> = TreeMap::new();
    for _ in 0..1_000 {
        let key = rng.gen_range(0..KEY_SPACE);
        map.insert(key, key);
    }

    // Always removing the root exercises every removal case, most often the predecessor one.
    while let Some(entry) = map.tree().element(map.tree().root()).unwrap() {
        let key = *entry.key();
        assert_eq!(map.remove(&key), Some(key));
        map.validate();
    }

    assert!(map.is_empty());
    assert_eq!(map.node_count(), 1);
}

#[test]
fn values_survive_being_moved_up() {
    let mut rng = SmallRng::seed_from_u64(SEED ^ 1);
    let mut keys: Vec<u32> = (0..500).collect();
    for i in (1..keys.len()).rev() {
        keys.swap(i, rng.gen_range(0..=i));
    }

    let mut map: TreeMap<u32, String> = keys.iter().map(|k| (*k, k.to_string())).collect();
    for k in keys.iter().step_by(2) {
        assert_eq!(map.remove(k), Some(k.to_string()));
    }
    for (k, v) in map.iter() {
        assert_eq!(*v, k.to_string());
        assert_eq!(map.get_entry(k).map(|e| e.position()), map.position_of(k));
    }
    map.validate();
}
