//! Result ordering.
//!
//! The order is total: exact full-key match first, then shorter keys,
//! then alphabetical, with original insertion order as the final
//! tie-break. Repeated queries over the same index therefore always
//! return the same sequence, regardless of bucket traversal order.

use std::cmp::Ordering;

use super::index::IndexEntry;

pub(crate) fn compare(needle: &str, a: &IndexEntry, b: &IndexEntry) -> Ordering {
    let a_key = a.normalized_key();
    let b_key = b.normalized_key();

    let a_exact = a_key == needle;
    let b_exact = b_key == needle;

    b_exact
        .cmp(&a_exact)
        // Character count, not byte length: multi-byte keys must not rank
        // as if they were longer names
        .then_with(|| a_key.chars().count().cmp(&b_key.chars().count()))
        .then_with(|| a_key.cmp(b_key))
        .then_with(|| a.seq().cmp(&b.seq()))
}
