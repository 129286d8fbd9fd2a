//! Config-selectable built-in hasher.

use serde::Deserialize;

use crate::hasher::{Blake3Hasher, Crc32Hasher, RingHasher};

/// Which built-in hasher a ring uses.
///
/// Deserializes from `"crc32"` or `"blake3"`. Positions are widened to `u64`
/// so both variants share a type; widening CRC-32 preserves its ordering, so
/// a `HashKind::Crc32` ring places keys exactly like a [`Crc32Hasher`] ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashKind {
    /// IEEE CRC-32 (the default).
    #[default]
    Crc32,
    /// BLAKE3 digest prefix.
    Blake3,
}

impl RingHasher for HashKind {
    type Position = u64;

    fn hash(&self, data: &str) -> u64 {
        match self {
            HashKind::Crc32 => u64::from(Crc32Hasher.hash(data)),
            HashKind::Blake3 => Blake3Hasher.hash(data),
        }
    }
}
