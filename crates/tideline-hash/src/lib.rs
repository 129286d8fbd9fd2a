//! Position hashing for the tideline consistent hash ring.
//!
//! This crate provides:
//! - [`RingHasher`] — the capability the ring is built on: a deterministic
//!   function from a string to a totally ordered position.
//! - [`Crc32Hasher`] — the default, an IEEE CRC-32 over the UTF-8 bytes.
//! - [`Blake3Hasher`] — a 64-bit position taken from a BLAKE3 digest.
//! - [`HashKind`] — a config-selectable choice between the built-in hashers.
//!
//! Every hasher must return identical positions for identical input across
//! calls and across processes, otherwise placement is not consistent.

mod hasher;
mod kind;

pub use hasher::{Blake3Hasher, Crc32Hasher, RingHasher};
pub use kind::HashKind;
