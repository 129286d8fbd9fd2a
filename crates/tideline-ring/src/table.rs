//! Position table: which target owns each ring position.
//!
//! The table keeps its positions in insertion order and sorts them lazily.
//! Mutations only flip the state to [`SortState::Dirty`]; the next lookup
//! pays for a single sort, so a burst of adds and removes costs one sort
//! rather than one per call.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use tracing::trace;

/// Whether the table's position list is currently in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortState {
    /// Mutated since the last sort.
    Dirty,
    /// Ascending; safe to search.
    Sorted,
}

#[derive(Debug, Clone)]
pub(crate) struct PositionTable<P> {
    /// Position -> owning target. A later insert at the same position wins.
    owners: HashMap<P, Arc<str>>,
    /// Every key of `owners` exactly once, ascending when `Sorted`.
    order: Vec<P>,
    state: SortState,
}

impl<P: Ord + Hash + Clone> PositionTable<P> {
    pub(crate) fn new() -> Self {
        Self {
            owners: HashMap::new(),
            order: Vec::new(),
            state: SortState::Sorted,
        }
    }

    /// Assign `position` to `target`.
    ///
    /// Returns the previous owner if the position was already taken. The
    /// previous owner is overwritten, not restored later.
    pub(crate) fn insert(&mut self, position: P, target: Arc<str>) -> Option<Arc<str>> {
        self.state = SortState::Dirty;
        let previous = self.owners.insert(position.clone(), target);
        if previous.is_none() {
            self.order.push(position);
        }
        previous
    }

    /// Delete each of `positions`; positions not present are skipped.
    ///
    /// Returns how many entries were actually removed.
    pub(crate) fn remove_all(&mut self, positions: &[P]) -> usize {
        self.state = SortState::Dirty;
        let removed = positions
            .iter()
            .filter(|p| self.owners.remove(*p).is_some())
            .count();
        if removed > 0 {
            // `retain` keeps relative order, so a sorted list stays sorted.
            let owners = &self.owners;
            self.order.retain(|p| owners.contains_key(p));
        }
        removed
    }

    /// Sort the position list if it is dirty. Returns whether a sort ran.
    pub(crate) fn ensure_sorted(&mut self) -> bool {
        match self.state {
            SortState::Sorted => false,
            SortState::Dirty => {
                self.order.sort_unstable();
                self.state = SortState::Sorted;
                trace!(positions = self.order.len(), "sorted position table");
                true
            }
        }
    }

    /// Positions in their current order (ascending only once sorted).
    pub(crate) fn positions(&self) -> &[P] {
        &self.order
    }

    pub(crate) fn owner(&self, position: &P) -> Option<&Arc<str>> {
        self.owners.get(position)
    }

    pub(crate) fn state(&self) -> SortState {
        self.state
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
