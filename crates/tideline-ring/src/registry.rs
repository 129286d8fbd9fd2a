//! Target registry: the positions each target was given when it was added.

use std::collections::HashMap;
use std::sync::Arc;

/// What the ring remembers about one target.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry<P> {
    pub(crate) weight: f64,
    /// Replica positions in replica-index order.
    pub(crate) positions: Vec<P>,
}

#[derive(Debug, Clone)]
pub(crate) struct Registry<P> {
    entries: HashMap<Arc<str>, Entry<P>>,
}

impl<P> Registry<P> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub(crate) fn contains(&self, target: &str) -> bool {
        self.entries.contains_key(target)
    }

    pub(crate) fn insert(&mut self, target: Arc<str>, entry: Entry<P>) {
        self.entries.insert(target, entry);
    }

    pub(crate) fn remove(&mut self, target: &str) -> Option<Entry<P>> {
        self.entries.remove(target)
    }

    pub(crate) fn get(&self, target: &str) -> Option<&Entry<P>> {
        self.entries.get(target)
    }

    /// The one registered target, if there is exactly one.
    pub(crate) fn sole_target(&self) -> Option<&Arc<str>> {
        if self.entries.len() == 1 {
            self.entries.keys().next()
        } else {
            None
        }
    }

    pub(crate) fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|t| &**t)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
