//! Turns raw symbol records into an immutable [`SearchIndex`].

use ahash::AHashMap;
use std::collections::HashMap;

use crate::record::{RawRecord, RejectReason, RejectedRecord};

use super::index::{Anchor, IndexEntry, SearchIndex, Symbol};
use super::{bucket_key, normalize};

/// Accumulates records and produces a deterministic index.
///
/// Records with the same `(normalized name, scope)` merge into one overload
/// group in first-seen order; malformed records are collected rather than
/// aborting the build. The builder holds no state after [`Self::finish`].
pub struct IndexBuilder {
    buckets: HashMap<String, Vec<IndexEntry>>,
    /// `(normalized key, scope)` → position of the existing entry in its
    /// bucket. Positions stay valid because buckets only grow.
    merged: AHashMap<(String, Option<String>), usize>,
    rejected: Vec<RejectedRecord>,
    seq: u32,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            merged: AHashMap::new(),
            rejected: Vec::new(),
            seq: 0,
        }
    }

    /// Adds one record, merging it into an existing overload group when the
    /// normalized name and scope already exist.
    pub fn push(&mut self, record: RawRecord) {
        if record.name.trim().is_empty() {
            self.reject(record, RejectReason::EmptyName);
            return;
        }
        if record.anchor.trim().is_empty() {
            self.reject(record, RejectReason::EmptyAnchor);
            return;
        }

        let key = normalize(&record.name);
        let anchor = Anchor {
            url: record.anchor,
            signature: record.signature,
        };

        let slot = (key.clone(), record.scope.clone());
        if let Some(&pos) = self.merged.get(&slot)
            && let Some(entries) = self.buckets.get_mut(&bucket_key(&key))
            && let Some(entry) = entries.get_mut(pos)
        {
            entry.merge_anchor(anchor);
            return;
        }

        let entry = IndexEntry::Single(Symbol {
            display_name: record.name,
            normalized_key: key.clone(),
            scope: record.scope,
            kind: record.kind,
            anchor,
            seq: self.seq,
        });
        self.seq += 1;

        let bucket = self.buckets.entry(bucket_key(&key)).or_default();
        self.merged.insert(slot, bucket.len());
        bucket.push(entry);
    }

    fn reject(&mut self, record: RawRecord, reason: RejectReason) {
        tracing::warn!(name = %record.name, %reason, "rejecting symbol record");
        self.rejected.push(RejectedRecord { record, reason });
    }

    /// Finalizes the build, returning the index together with the records
    /// it refused.
    pub fn finish(self) -> (SearchIndex, Vec<RejectedRecord>) {
        let entry_count = self.seq as usize;
        let index = SearchIndex::new(self.buckets, entry_count);

        tracing::info!(
            entries = index.len(),
            buckets = index.bucket_count(),
            rejected = self.rejected.len(),
            "built search index"
        );

        (index, self.rejected)
    }
}

/// Builds an index from a record stream in one call.
pub fn build_index(
    records: impl IntoIterator<Item = RawRecord>,
) -> (SearchIndex, Vec<RejectedRecord>) {
    let mut builder = IndexBuilder::new();
    for record in records {
        builder.push(record);
    }
    builder.finish()
}
