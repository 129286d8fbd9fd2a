//! Integration test: membership changes move about `1/k` of the keys.

use tideline_integration_tests::{moved_fraction, node, primaries, resource_keys, ring_with};
use tideline_ring::Ring;

const KEYS: usize = 5_000;

#[test]
fn test_adding_target_moves_small_fraction() {
    let keys = resource_keys(KEYS);
    for k in [4, 8, 16] {
        let mut old = ring_with(k);
        let mut new = old.clone();
        new.add_target(&node(k)).unwrap();

        let remaps = Ring::diff(&mut old, &mut new, &keys);
        let fraction = remaps.len() as f64 / KEYS as f64;
        let ideal = 1.0 / (k + 1) as f64;
        assert!(
            fraction > 0.0 && fraction <= 2.0 * ideal,
            "k={k}: moved {fraction:.3}, ideal {ideal:.3}"
        );
        // Only the new target gains keys.
        assert!(remaps.iter().all(|r| r.to == node(k)), "k={k}");
    }
}

#[test]
fn test_removing_target_moves_only_its_keys() {
    let keys = resource_keys(KEYS);
    for k in [4, 8, 16] {
        let mut ring = ring_with(k);
        let before = primaries(&mut ring, &keys);

        ring.remove_target(&node(0)).unwrap();
        let after = primaries(&mut ring, &keys);

        let fraction = moved_fraction(&before, &after);
        let ideal = 1.0 / k as f64;
        assert!(
            fraction > 0.0 && fraction <= 2.0 * ideal,
            "k={k}: moved {fraction:.3}, ideal {ideal:.3}"
        );
        for (b, a) in before.iter().zip(&after) {
            if *b != node(0) {
                assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn test_distribution_covers_every_target() {
    let mut ring = ring_with(8);
    let dist = ring.distribution(resource_keys(KEYS));

    assert_eq!(dist.len(), 8);
    assert_eq!(dist.values().sum::<usize>(), KEYS);
    for (target, count) in &dist {
        let share = *count as f64 / KEYS as f64;
        assert!(
            (0.04..=0.25).contains(&share),
            "{target} got {share:.3} of keys: {dist:?}"
        );
    }
}
