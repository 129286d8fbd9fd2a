//! Ranked circular lookup over a sorted position table.

use std::hash::Hash;
use std::sync::Arc;

use crate::table::PositionTable;

/// Walk clockwise from just past `at`, collecting up to `limit` distinct targets.
///
/// The walk starts at the first position strictly greater than `at`, runs to
/// the end of the table, then wraps to the smallest position. A target that
/// owns several positions is reported once, at its first occurrence.
///
/// `table` must be sorted.
pub(crate) fn ranked<P: Ord + Hash + Clone>(
    table: &PositionTable<P>,
    at: &P,
    limit: usize,
) -> Vec<Arc<str>> {
    let positions = table.positions();
    let start = positions.partition_point(|p| p <= at);
    let (before, after) = positions.split_at(start);

    let mut found: Vec<Arc<str>> = Vec::with_capacity(limit);
    for position in after.iter().chain(before) {
        let Some(owner) = table.owner(position) else {
            continue;
        };
        if !found.contains(owner) {
            found.push(Arc::clone(owner));
            if found.len() == limit {
                break;
            }
        }
    }
    found
}
