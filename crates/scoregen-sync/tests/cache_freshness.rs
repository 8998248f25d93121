use std::fs;

use scoregen_sync::SyncCache;

#[test]
fn missing_cache_counts_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = SyncCache::load(&dir.path().join("caching.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn corrupt_cache_counts_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("caching.json");
    fs::write(&path, b"{not json").unwrap();
    let loaded = SyncCache::load(&path).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn store_then_load_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("caching.json");
    let cache = SyncCache {
        version: "1.19".into(),
        refreshed_at: 1_650_000_000,
    };
    cache.store(&path).unwrap();
    let loaded = SyncCache::load(&path).unwrap().expect("cache present");
    assert_eq!(loaded, cache);
}

#[test]
fn freshness_window_boundaries() {
    let cache = SyncCache {
        version: "1.19".into(),
        refreshed_at: 10_000,
    };
    assert!(cache.is_fresh(10_000, 3600));
    assert!(cache.is_fresh(13_599, 3600));
    assert!(!cache.is_fresh(13_600, 3600));
    assert!(!cache.is_fresh(20_000, 3600));
}
