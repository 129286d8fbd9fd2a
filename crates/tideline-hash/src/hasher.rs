//! The [`RingHasher`] trait and its built-in implementations.

use std::fmt;
use std::hash::Hash;

/// Maps a string onto a position of the ring.
///
/// Implementations must be pure and deterministic. Outputs should be spread
/// roughly uniformly over the position space; a skewed hasher degrades ring
/// balance but never correctness.
pub trait RingHasher {
    /// A point on the ring. Ordering defines the clockwise direction.
    type Position: Ord + Eq + Hash + Clone + fmt::Debug;

    /// Compute the position of `data`.
    fn hash(&self, data: &str) -> Self::Position;
}

/// IEEE CRC-32 over the UTF-8 encoding of the input.
///
/// This is the default hasher. Its output is bit-compatible with zlib's
/// `crc32`, so positions can be reproduced by other implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crc32Hasher;

impl RingHasher for Crc32Hasher {
    type Position = u32;

    #[inline]
    fn hash(&self, data: &str) -> u32 {
        crc32fast::hash(data.as_bytes())
    }
}

/// First 8 bytes (little-endian) of the BLAKE3 digest of the UTF-8 input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

impl RingHasher for Blake3Hasher {
    type Position = u64;

    #[inline]
    fn hash(&self, data: &str) -> u64 {
        let digest = blake3::hash(data.as_bytes());
        let bytes = digest.as_bytes();
        u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }
}
