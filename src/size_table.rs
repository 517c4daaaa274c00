//! Fixed bucket-count sequence and size-index stepping.
//!
//! Bucket counts must be prime so the polynomial hash distributes well;
//! consecutive sizes are roughly 2x apart to keep amortized rehash cost low.

/// Possible bucket counts for the table, indexed by size index.
pub(crate) const HASH_SIZES: [usize; 13] = [
    53, 101, 211, 503, 1553, 3407, 6803, 12503, 25013, 50261, 104729, 250007, 500009,
];

/// One step up the size table, clamped at the largest size. A table that
/// outgrows the last prime stops growing and degrades to longer chains.
pub(crate) fn next_size_index(size_index: usize) -> usize {
    if size_index + 1 < HASH_SIZES.len() {
        size_index + 1
    } else {
        size_index
    }
}

/// One step down the size table, clamped at index 0.
pub(crate) fn previous_size_index(size_index: usize) -> usize {
    size_index.saturating_sub(1)
}
