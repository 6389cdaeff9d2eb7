use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use stickycoll::{
    ContainerError, Dynamic, ReadonlyMap, ReadonlySlice, SyncDynamic, SyncFixed, Synchronized,
    Unique,
};

#[test]
fn test_concurrent_appends() {
    let shared = Arc::new(SyncDynamic::default());
    let handles: Vec<_> = (0..8u64)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..100 {
                    shared.push(worker * 100 + i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.len(), 800);
    let mut values = shared.native();
    values.sort_unstable();
    assert_eq!(values, (0..800).collect::<Vec<_>>());
}

#[test]
fn test_concurrent_fixed_never_overflows() {
    let shared = Arc::new(SyncFixed::with_capacity(50));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..20u8 {
                    shared.push(i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.len(), 50);
    assert_eq!(shared.capacity(), 50);
    assert_eq!(
        shared.error(),
        Some(ContainerError::CapacityExceeded {
            capacity: 50,
            requested: 51
        })
    );
}

#[test]
fn test_synchronized_mirrors_storage() {
    let shared = Synchronized::from(Unique::from_vec(vec![3, 1, 3]));
    assert_eq!(shared.native(), [3, 1]);
    assert_eq!(shared.insert(1, 2), 2);
    assert_eq!(shared.front(), 3);
    assert_eq!(shared.back(), 1);
    assert_eq!(shared.format(), "[3, 2, 1]");

    let storage = shared.into_inner();
    assert_eq!(storage.native(), [3, 2, 1]);
}

#[test]
fn test_with_runs_under_one_lock() {
    let shared = SyncDynamic::from(Dynamic::from_vec(vec![1, 2]));
    let moved = shared.with(|storage| {
        let last = storage.pop();
        storage.insert(0, last)
    });
    assert_eq!(moved, 2);
    assert_eq!(shared.native(), [2, 1]);
}

#[test]
fn test_readonly_slice_shared() {
    let slice = Arc::new(ReadonlySlice::new(vec![10, 20, 30]));
    let handles: Vec<_> = (0..3isize)
        .map(|i| {
            let slice = Arc::clone(&slice);
            thread::spawn(move || slice.at(i))
        })
        .collect();
    let mut seen: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    seen.sort_unstable();
    assert_eq!(seen, [10, 20, 30]);
    assert!(slice.error().is_none());
    assert_eq!(slice.to_string(), "[10, 20, 30]");
}

#[test]
fn test_readonly_map_lookup() {
    let mut entries = BTreeMap::new();
    entries.insert("k", 1);
    let map = ReadonlyMap::from(entries);

    assert_eq!(map.len(), 1);
    assert_eq!(map.values(), [1]);
    assert_eq!(map.format(), "{\n  k: 1\n}");

    map.get(&"missing");
    assert_eq!(map.error(), Some(ContainerError::KeyNotFound));
    assert_eq!(map.len(), 0);
    assert_eq!(map.format(), "");
}
