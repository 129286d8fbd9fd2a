//! Consistent hashing ring implementation.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tideline_hash::{Crc32Hasher, HashKind, RingHasher};
use tracing::{debug, warn};

use crate::config::RingConfig;
use crate::error::{ConfigError, RingError};
use crate::lookup::ranked;
use crate::registry::{Entry, Registry};
use crate::table::{PositionTable, SortState};

/// Replica positions per unit of weight when none is configured.
pub const DEFAULT_REPLICAS: u32 = 64;

/// A resource whose primary target differs between two ring states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remap {
    /// The resource key.
    pub resource: String,
    /// Its primary target before the change.
    pub from: String,
    /// Its primary target after the change.
    pub to: String,
}

/// Consistent hashing ring mapping resource keys to named targets.
///
/// Each target occupies `round(replicas * weight)` positions, at
/// `hash(target + replica_index)`. A resource is placed by hashing it and
/// walking clockwise to the next positions, collecting distinct targets.
///
/// Lookups take `&mut self` because they sort the position table when a
/// mutation has left it dirty. Share a ring across threads behind a lock.
#[derive(Debug, Clone)]
pub struct Ring<H: RingHasher = Crc32Hasher> {
    hasher: H,
    replicas: u32,
    table: PositionTable<H::Position>,
    registry: Registry<H::Position>,
}

impl Ring<Crc32Hasher> {
    /// Create an empty ring with the CRC-32 hasher and 64 replicas.
    pub fn new() -> Self {
        Self::with_hasher(Crc32Hasher, DEFAULT_REPLICAS)
    }
}

impl Default for Ring<Crc32Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl Ring<HashKind> {
    /// Create an empty ring from validated configuration.
    pub fn from_config(config: &RingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_hasher(config.hash_kind(), config.replicas()))
    }
}

impl<H: RingHasher> Ring<H> {
    /// Create an empty ring with an injected hasher.
    ///
    /// `replicas` is the base position count for a target of weight 1.
    /// Zero is raised to 1.
    pub fn with_hasher(hasher: H, replicas: u32) -> Self {
        Self {
            hasher,
            replicas: replicas.max(1),
            table: PositionTable::new(),
            registry: Registry::new(),
        }
    }

    /// Add a target with weight 1.
    pub fn add_target(&mut self, target: &str) -> Result<&mut Self, RingError> {
        self.add_target_with_weight(target, 1.0)
    }

    /// Add a target whose position count is scaled by `weight`.
    ///
    /// Fails if the target is already present; re-weighting requires a
    /// remove followed by an add. A replica landing on a position another
    /// target already holds takes that position over.
    pub fn add_target_with_weight(
        &mut self,
        target: &str,
        weight: f64,
    ) -> Result<&mut Self, RingError> {
        if self.registry.contains(target) {
            return Err(RingError::DuplicateTarget {
                target: target.to_string(),
            });
        }

        let replica_count = (f64::from(self.replicas) * weight).round();
        if !weight.is_finite() || weight <= 0.0 || replica_count < 1.0 {
            return Err(RingError::InvalidWeight {
                target: target.to_string(),
                weight,
            });
        }
        let replica_count = replica_count as usize;

        let id: Arc<str> = Arc::from(target);
        let mut positions = Vec::with_capacity(replica_count);
        for i in 0..replica_count {
            let position = self.hasher.hash(&format!("{target}{i}"));
            if let Some(displaced) = self.table.insert(position.clone(), Arc::clone(&id)) {
                warn!(
                    target_id = %id,
                    %displaced,
                    ?position,
                    "replica position collision, earlier owner overwritten"
                );
            }
            positions.push(position);
        }

        self.registry.insert(Arc::clone(&id), Entry { weight, positions });
        debug!(target_id = %id, weight, replica_count, "added target to ring");
        Ok(self)
    }

    /// Add each target with weight 1, in order.
    ///
    /// Not atomic: on failure, targets added before the failing one stay.
    pub fn add_targets<I, S>(&mut self, targets: I) -> Result<&mut Self, RingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_targets_with_weight(targets, 1.0)
    }

    /// Add each target with the same `weight`, in order. Not atomic.
    pub fn add_targets_with_weight<I, S>(
        &mut self,
        targets: I,
        weight: f64,
    ) -> Result<&mut Self, RingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for target in targets {
            self.add_target_with_weight(target.as_ref(), weight)?;
        }
        Ok(self)
    }

    /// Remove a target and every position it was given.
    ///
    /// Positions it lost to a later colliding target are removed as well.
    pub fn remove_target(&mut self, target: &str) -> Result<&mut Self, RingError> {
        let entry = self
            .registry
            .remove(target)
            .ok_or_else(|| RingError::UnknownTarget {
                target: target.to_string(),
            })?;
        let removed = self.table.remove_all(&entry.positions);
        debug!(target_id = target, removed, "removed target from ring");
        Ok(self)
    }

    /// Every registered target, in no particular order.
    pub fn all_targets(&self) -> HashSet<&str> {
        self.registry.targets().collect()
    }

    /// The primary target for `resource`.
    pub fn lookup(&mut self, resource: &str) -> Result<String, RingError> {
        self.lookup_list(resource, 1)?
            .into_iter()
            .next()
            .ok_or(RingError::EmptyRing)
    }

    /// Up to `count` distinct targets for `resource`, in clockwise order.
    ///
    /// Returns `min(count, target_count)` targets, or none if the ring
    /// holds no positions.
    pub fn lookup_list(&mut self, resource: &str, count: usize) -> Result<Vec<String>, RingError> {
        if count < 1 {
            return Err(RingError::InvalidCount { count });
        }
        if self.table.is_empty() {
            return Ok(Vec::new());
        }
        // Only one possible answer; skip hashing and sorting.
        if let Some(sole) = self.registry.sole_target() {
            return Ok(vec![sole.to_string()]);
        }

        self.table.ensure_sorted();
        let position = self.hasher.hash(resource);
        let limit = count.min(self.registry.len());
        Ok(ranked(&self.table, &position, limit)
            .iter()
            .map(|t| t.to_string())
            .collect())
    }

    /// Resources whose primary target differs between `old` and `new`.
    ///
    /// Resources that have no target in either ring are skipped.
    pub fn diff<S: AsRef<str>>(old: &mut Ring<H>, new: &mut Ring<H>, resources: &[S]) -> Vec<Remap> {
        let mut remaps = Vec::new();
        for resource in resources {
            let resource = resource.as_ref();
            let (Ok(from), Ok(to)) = (old.lookup(resource), new.lookup(resource)) else {
                continue;
            };
            if from != to {
                remaps.push(Remap {
                    resource: resource.to_string(),
                    from,
                    to,
                });
            }
        }
        remaps
    }

    /// Count how many of `resources` each target is primary for.
    ///
    /// Targets that receive none are absent from the map.
    pub fn distribution<I, S>(&mut self, resources: I) -> HashMap<String, usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = HashMap::new();
        for resource in resources {
            if let Ok(target) = self.lookup(resource.as_ref()) {
                *counts.entry(target).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Number of registered targets.
    pub fn target_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of occupied positions on the ring.
    pub fn position_count(&self) -> usize {
        self.table.len()
    }

    /// Whether the ring has no targets.
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    pub fn contains_target(&self, target: &str) -> bool {
        self.registry.contains(target)
    }

    /// Base replica count per unit of weight.
    pub fn replicas(&self) -> u32 {
        self.replicas
    }

    /// The weight a target was added with.
    pub fn weight_of(&self, target: &str) -> Option<f64> {
        self.registry.get(target).map(|e| e.weight)
    }

    /// The positions a target was given, in replica-index order.
    ///
    /// Includes positions since overwritten by a colliding target.
    pub fn positions_of(&self, target: &str) -> Option<&[H::Position]> {
        self.registry.get(target).map(|e| e.positions.as_slice())
    }

    /// Whether the position table is sorted, i.e. no mutation since the last lookup.
    pub fn is_sorted(&self) -> bool {
        self.table.state() == SortState::Sorted
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}
