//! Integration test: fixed placement scenarios with the default hasher.
//!
//! These fixtures depend on CRC-32's exact output. A different hasher
//! places the same targets differently.

use tideline_ring::{Ring, RingConfig, RingError};

/// Three caches, then a membership change, then another removal.
#[test]
fn test_cache_membership_sequence() {
    let mut ring = Ring::new();
    ring.add_targets(["cache-1", "cache-2", "cache-3"]).unwrap();

    assert_eq!(ring.lookup("object-a").unwrap(), "cache-1");
    assert_eq!(ring.lookup("object-b").unwrap(), "cache-2");

    ring.add_target("cache-4").unwrap();
    ring.remove_target("cache-1").unwrap();
    assert_eq!(
        ring.lookup_list("object", 2).unwrap(),
        vec!["cache-2", "cache-4"]
    );

    ring.remove_target("cache-2").unwrap();
    assert_eq!(ring.lookup("object").unwrap(), "cache-4");
}

/// A ring built from a config file places keys like the default ring.
#[test]
fn test_ring_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ring.toml");
    std::fs::write(&path, "[ring]\nreplicas = 64\nhash = \"crc32\"\n").unwrap();

    let config = RingConfig::load(&path).unwrap();
    let mut ring = Ring::from_config(&config).unwrap();
    ring.add_targets(["cache-1", "cache-2", "cache-3"]).unwrap();

    assert_eq!(ring.lookup("object-a").unwrap(), "cache-1");
    assert_eq!(ring.lookup("object-b").unwrap(), "cache-2");
}

/// Errors leave membership as it was.
#[test]
fn test_error_paths() {
    let mut ring = Ring::new();
    assert_eq!(ring.lookup("object").unwrap_err(), RingError::EmptyRing);
    assert!(ring.lookup_list("object", 1).unwrap().is_empty());

    ring.add_target("cache-1").unwrap();
    assert!(matches!(
        ring.add_target("cache-1"),
        Err(RingError::DuplicateTarget { .. })
    ));
    assert!(matches!(
        ring.remove_target("cache-9"),
        Err(RingError::UnknownTarget { .. })
    ));
    assert!(matches!(
        ring.lookup_list("object", 0),
        Err(RingError::InvalidCount { count: 0 })
    ));

    assert_eq!(ring.target_count(), 1);
    assert_eq!(ring.lookup("object").unwrap(), "cache-1");
}

/// Removing the last target empties the ring again.
#[test]
fn test_drain_to_empty() {
    let mut ring = Ring::new();
    ring.add_targets(["cache-1", "cache-2"]).unwrap();
    ring.remove_target("cache-1").unwrap();
    ring.remove_target("cache-2").unwrap();

    assert!(ring.is_empty());
    assert_eq!(ring.position_count(), 0);
    assert_eq!(ring.lookup("object").unwrap_err(), RingError::EmptyRing);
}
