#![cfg(test)]

use proptest::collection::vec;
use proptest::prelude::*;

use super::*;
use crate::collections::hash::HashCollection;
use crate::util::alloc::{DropCounter, Tracked};
use crate::util::hash::{ManualHash, manual_hash};
use crate::util::panic::assert_panics;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mod3(key: &u32) -> u32 {
    key % 3
}

#[test]
fn test_set_and_get() {
    let mut map: HashMap<u32, &str, _> = HashMap::new(mod3);
    map.set(1, "one").set(2, "two");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&1), Ok(&"one"));
    assert_eq!(map.get(&2), Ok(&"two"));
    assert!(map.has(&1) && map.has(&2));
    assert!(!map.has(&3), "No entry should exist for hash code 0.");
    assert_eq!(
        map.get(&4), Ok(&"one"),
        "A key with the same hash code should find the same entry."
    );
}

#[test]
fn test_get_missing_key() {
    let mut map: HashMap<u32, u32, _> = HashMap::new(mod3);
    assert_eq!(map.get(&1), Err(KeyNotFound), "Looking up an empty map should fail.");

    map.set(1, 10);
    assert_eq!(map.get(&2), Err(KeyNotFound), "Looking up an unused hash code should fail.");
    assert_eq!(map.get_mut(&3), Err(KeyNotFound));
    assert_eq!(map.get_entry(&3), None);

    assert_panics!({
        let _value: &u32 = &map[&2];
    }, "Indexing with an unused hash code should panic.");
    assert_eq!(map[&4], 10, "Indexing with a used hash code shouldn't panic.");
}

#[test]
fn test_key_not_found_message() {
    assert_eq!(
        KeyNotFound.to_string(),
        "No entry exists for the hash code of the provided key!"
    );
}

#[test]
fn test_collision_overwrite() {
    init_logger();

    let mut map: HashMap<ManualHash<&str>, u32, _> = HashMap::new(manual_hash::<&str>);
    map.set(ManualHash::new(0, "zero"), 0);
    map.set(ManualHash::new(1, "one"), 1);

    let replaced = map.insert(ManualHash::new(0, "also zero"), 10);
    assert_eq!(
        replaced.map(Entry::into_pair),
        Some((ManualHash::new(0, "zero"), 0)),
        "Inserting a colliding key should return the replaced entry."
    );

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&ManualHash::new(0, "zero")), Ok(&10));
    assert_eq!(map.get(&ManualHash::new(0, "also zero")), Ok(&10));
    assert_eq!(
        map.keys().map(ManualHash::value).copied().collect::<Vec<_>>(),
        ["also zero", "one"],
        "The replacing key should take over the position of the replaced one."
    );
    assert_eq!(
        map.get_entry(&ManualHash::new(0, "anything")).map(Entry::key),
        Some(&ManualHash::new(0, "also zero")),
        "Only the latest key should be observable."
    );
}

#[test]
fn test_entry_conversions() {
    let mut entry = Entry::from(("key", 1));
    *entry.value_mut() += 1;

    assert_eq!(entry, Entry::new("key", 2));
    assert_eq!((entry.key(), entry.value()), (&"key", &2));
    assert_eq!(<(&str, i32)>::from(entry), ("key", 2));
}

#[test]
fn test_delete() {
    let mut map: HashMap<u32, &str, _> = HashMap::new(mod3);
    map.set(0, "zero").set(1, "one").set(2, "two");

    assert!(map.delete(&4), "Deleting a colliding key should remove the entry.");
    assert!(!map.has(&1));
    assert!(!map.delete(&1), "Deleting an absent hash code should return false.");
    assert_eq!(map.len(), 2);
    assert_eq!(
        map.entries().collect::<Vec<_>>(),
        [(&0, &"zero"), (&2, &"two")],
        "Deletion should preserve the order of the remaining entries."
    );

    map.set(1, "one again");
    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        [0, 2, 1],
        "An entry inserted after deletion should be enumerated last."
    );

    assert_eq!(map.remove(&5).map(Entry::into_pair), Some((2, "two")));
    assert_eq!(map.remove(&5), None);
}

#[test]
fn test_delete_many_in_insertion_order() {
    let mut map: HashMap<u32, u32, _> = HashMap::new(|key: &u32| *key);
    map.extend((0..20_000).map(|key| (key, key * 2)));

    for key in (0..20_000).step_by(2) {
        assert!(map.delete(&key));
    }
    assert_eq!(map.len(), 10_000);
    assert!(
        map.keys().copied().eq((1..20_000_u32).step_by(2)),
        "Deleting many entries should keep the remaining ones in insertion order."
    );

    for key in (1..19_000).step_by(2) {
        assert_eq!(map.remove(&key).map(Entry::into_pair), Some((key, key * 2)));
    }
    map.set(0, 0).set(19_001, 1);
    assert_eq!(
        map.entries().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        (19_001..20_000_u32).step_by(2).map(|key| (key, if key == 19_001 { 1 } else { key * 2 }))
            .chain([(0, 0)])
            .collect::<Vec<_>>(),
        "Replacing should keep the position while re-adding after a delete goes last."
    );
    assert_eq!(map.get(&19_999), Ok(&39_998));
    assert_eq!(map.values().rev().next(), Some(&0));
}

#[test]
fn test_clear() {
    let mut map: HashMap<u32, u32, _> = HashMap::new(mod3);
    map.extend([(0, 0), (1, 1), (2, 2)]);

    assert!(map.clear().is_empty(), "Clearing should return the emptied map.");
    for key in 0..3 {
        assert!(!map.has(&key));
    }
    assert_eq!(map.entries().count(), 0);
    assert_eq!(map.keys().count(), 0);
    assert_eq!(map.values().count(), 0);
}

#[test]
fn test_replaced_and_cleared_values_are_dropped() {
    let counter = DropCounter::new();
    let mut map: HashMap<u32, Tracked, _> = HashMap::new(mod3);

    map.set(1, counter.track());
    map.set(4, counter.track());
    assert_eq!(counter.dropped(), 1, "The replaced value should be dropped.");

    map.set(2, counter.track());
    assert!(map.delete(&2));
    assert_eq!(counter.dropped(), 2, "The deleted value should be dropped.");

    map.set(0, counter.track());
    map.clear();
    assert_eq!(counter.dropped(), 4, "Clearing should drop all values.");
}

#[test]
fn test_for_each_matches_entries() {
    let mut map: HashMap<u32, u32, _> = HashMap::new(|key: &u32| key % 10);
    map.extend([(3, 30), (14, 140), (5, 50), (23, 230)]);

    let mut seen = Vec::new();
    let len = map.for_each(|key, value, this| {
        assert_eq!(this.get(key), Ok(value), "The callback should receive the map itself.");
        seen.push((*key, *value));
    }).len();

    assert_eq!(len, 3, "for_each should return the map for chaining.");
    assert_eq!(seen, [(23, 230), (14, 140), (5, 50)]);
    assert_eq!(
        seen,
        map.entries().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        "for_each should visit the same entries as entries(), in the same order."
    );
}

#[test]
fn test_default_iteration_yields_pairs() {
    let mut map: HashMap<u32, &str, _> = HashMap::new(mod3);
    map.set(1, "one").set(2, "two");

    let mut pairs = Vec::new();
    for (key, value) in &map {
        pairs.push((*key, *value));
    }
    assert_eq!(pairs, [(1, "one"), (2, "two")]);
    assert!((&map).into_iter().eq(map.entries()));

    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, "one"), (2, "two")]);
}

#[test]
fn test_iterators_are_independent() {
    let mut map: HashMap<u32, u32, _> = HashMap::new(mod3);
    map.extend([(0, 0), (1, 10), (2, 20)]);

    let mut first = map.keys();
    assert_eq!(first.next(), Some(&0));

    let second = map.keys();
    assert_eq!(
        second.copied().collect::<Vec<_>>(), [0, 1, 2],
        "A new iterator should start from the beginning."
    );
    assert_eq!(first.copied().collect::<Vec<_>>(), [1, 2]);
    assert_eq!(map.values().rev().copied().collect::<Vec<_>>(), [20, 10, 0]);
    assert_eq!(map.entries().len(), 3);
}

#[test]
fn test_mutation() {
    let mut map: HashMap<u32, u32, _> = HashMap::new(mod3);
    map.extend([(0, 0), (1, 1), (2, 2)]);

    *map.get_mut(&4).expect("Hash code 1 should be present.") += 100;
    for value in map.values_mut() {
        *value *= 2;
    }

    assert_eq!(map.values().copied().collect::<Vec<_>>(), [0, 202, 4]);
}

#[test]
fn test_into_keys_and_values() {
    let mut map: HashMap<String, usize, _> = HashMap::new(|key: &String| key.len());
    map.set("a".into(), 1).set("bb".into(), 2).set("cc".into(), 3);

    assert_eq!(map.clone().into_keys().collect::<Vec<_>>(), ["a", "cc"]);
    assert_eq!(map.into_values().collect::<Vec<_>>(), [1, 3]);
}

#[test]
fn test_hash_key_access() {
    let map: HashMap<u32, (), _> = HashMap::new(mod3);

    assert_eq!(map.hash_code(&7), 1);
    assert_eq!((map.hash_key())(&8), 2);
    assert_eq!(map.policy().hash_code(&9_u32), 0);
}

#[test]
fn test_fmt() {
    let mut map: HashMap<u32, &str, _> = HashMap::new(mod3);
    map.set(1, "one").set(2, "two");

    assert_eq!(format!("{map}"), "#{1: \"one\", 2: \"two\"}");
    assert!(format!("{map:?}").starts_with("HashMap { entries: [Entry { key: 1, value: \"one\" }"));
}

proptest! {
    #[test]
    fn prop_set_then_get(pairs in vec((any::<u16>(), any::<i32>()), 0..64)) {
        let mut map: HashMap<u16, i32, _> = HashMap::new(|key: &u16| *key);

        for (key, value) in &pairs {
            map.set(*key, *value);
            prop_assert_eq!(map.get(key), Ok(value));
            prop_assert!(map.has(key));
        }
    }

    #[test]
    fn prop_collision_keeps_last_write(
        k1 in any::<u32>(),
        k2 in any::<u32>(),
        v1 in any::<i32>(),
        v2 in any::<i32>(),
    ) {
        prop_assume!(k1 != k2);

        // Every key collides.
        let mut map: HashMap<u32, i32, _> = HashMap::new(|_: &u32| ());
        map.set(k1, v1).set(k2, v2);

        prop_assert!(map.has(&k1) && map.has(&k2));
        prop_assert_eq!(map.get(&k1), Ok(&v2));
        prop_assert_eq!(map.get(&k2), Ok(&v2));
        prop_assert_eq!(map.entries().collect::<Vec<_>>(), [(&k2, &v2)]);
    }

    #[test]
    fn prop_delete_removes_one(keys in vec(0_u32..32, 0..32), target in 0_u32..32) {
        let mut map: HashMap<u32, (), _> = HashMap::new(|key: &u32| key % 16);
        for key in &keys {
            map.set(*key, ());
        }

        let present = map.has(&target);
        let len = map.len();

        prop_assert_eq!(map.delete(&target), present);
        prop_assert!(!map.has(&target));
        prop_assert_eq!(map.len(), if present { len - 1 } else { len });
        prop_assert!(!map.delete(&target));
    }

    #[test]
    fn prop_clear_empties(keys in vec(any::<u8>(), 0..32)) {
        let mut map: HashMap<u8, u8, _> = HashMap::new(|key: &u8| *key);
        for key in &keys {
            map.set(*key, *key);
        }
        map.clear();

        for key in &keys {
            prop_assert!(!map.has(key));
        }
        prop_assert_eq!(map.entries().count(), 0);
        prop_assert_eq!(map.keys().count(), 0);
        prop_assert_eq!(map.values().count(), 0);
    }

    #[test]
    fn prop_enumeration_order(pairs in vec((0_u32..64, any::<u8>()), 0..64)) {
        let mut map: HashMap<u32, u8, _> = HashMap::new(|key: &u32| key % 8);
        // (code, key, value) in first-insertion order of each code.
        let mut model: Vec<(u32, u32, u8)> = Vec::new();

        for (key, value) in pairs {
            map.set(key, value);
            match model.iter_mut().find(|(code, _, _)| *code == key % 8) {
                Some(existing) => *existing = (key % 8, key, value),
                None => model.push((key % 8, key, value)),
            }
        }

        let mut visited = Vec::new();
        map.for_each(|key, value, _| visited.push((*key, *value)));

        let expected: Vec<_> = model.into_iter().map(|(_, k, v)| (k, v)).collect();
        prop_assert_eq!(&visited, &expected);
        prop_assert_eq!(map.entries().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), expected);
    }
}
