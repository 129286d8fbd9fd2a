//! Consistent hashing ring for placing resource keys on named targets.
//!
//! Targets (cache or storage nodes) are placed on the ring at several
//! replica positions each, `hash(target + replica_index)`, with the replica
//! count scaled by the target's weight. A resource is placed by hashing it
//! and walking clockwise to the next positions, wrapping past the largest,
//! collecting distinct targets. Adding or removing one target out of `k`
//! moves roughly `1/k` of the resources.
//!
//! The ring records membership and answers lookups; it does not decide when
//! targets join or leave, and it does no I/O. The position hash is injected
//! via [`RingHasher`]; [`Ring::new`] uses CRC-32 with 64 replicas.
//!
//! ```
//! use tideline_ring::Ring;
//!
//! let mut ring = Ring::new();
//! ring.add_targets(["cache-1", "cache-2", "cache-3"])?;
//! assert_eq!(ring.lookup("object-a")?, "cache-1");
//! assert_eq!(ring.lookup_list("object-a", 2)?.len(), 2);
//! # Ok::<(), tideline_ring::RingError>(())
//! ```

mod config;
mod error;
mod lookup;
mod registry;
mod ring;
mod table;

pub use config::{RingConfig, RingSection};
pub use error::{ConfigError, RingError};
pub use ring::{DEFAULT_REPLICAS, Remap, Ring};
pub use tideline_hash::{Blake3Hasher, Crc32Hasher, HashKind, RingHasher};
