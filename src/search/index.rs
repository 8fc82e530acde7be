//! The immutable bucket-table index and its query surface.

use crate::error::QueryError;
use crate::record::SymbolKind;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path, slice};

use super::{BUCKET_KEY_LEN, bucket_key, normalize, rank, word_boundaries};

/// One documentation target: an anchor URL plus the signature hint the
/// generator attaches to overloaded names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub url: String,
    pub signature: Option<String>,
}

/// A symbol with a single documentation anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub display_name: String,
    pub(crate) normalized_key: String,
    pub scope: Option<String>,
    pub kind: SymbolKind,
    pub anchor: Anchor,
    pub(crate) seq: u32,
}

/// Several records sharing one `(normalized name, scope)` pair, collapsed
/// into a single logical search result with multiple anchors.
///
/// Invariants: at least two anchors, and anchor URLs are unique within the
/// group. The builder enforces both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadGroup {
    pub display_name: String,
    pub(crate) normalized_key: String,
    pub scope: Option<String>,
    pub kind: SymbolKind,
    pub anchors: Vec<Anchor>,
    pub(crate) seq: u32,
}

/// One indexed symbol: either a plain entry or an overload set.
///
/// The tagged split gives ranking and display logic one unambiguous shape
/// to handle instead of relying on incidental list grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexEntry {
    Single(Symbol),
    Overloads(OverloadGroup),
}

impl IndexEntry {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Single(s) => &s.display_name,
            Self::Overloads(g) => &g.display_name,
        }
    }

    /// The canonical search key this entry is matched and ordered by.
    pub fn normalized_key(&self) -> &str {
        match self {
            Self::Single(s) => &s.normalized_key,
            Self::Overloads(g) => &g.normalized_key,
        }
    }

    pub fn scope(&self) -> Option<&str> {
        match self {
            Self::Single(s) => s.scope.as_deref(),
            Self::Overloads(g) => g.scope.as_deref(),
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            Self::Single(s) => s.kind,
            Self::Overloads(g) => g.kind,
        }
    }

    /// All anchors under this display row, in first-seen order.
    pub fn anchors(&self) -> &[Anchor] {
        match self {
            Self::Single(s) => slice::from_ref(&s.anchor),
            Self::Overloads(g) => &g.anchors,
        }
    }

    pub(crate) const fn seq(&self) -> u32 {
        match self {
            Self::Single(s) => s.seq,
            Self::Overloads(g) => g.seq,
        }
    }

    /// Folds another anchor into this entry, upgrading a `Single` to an
    /// `Overloads` group. Duplicate anchor URLs are dropped.
    pub(crate) fn merge_anchor(&mut self, anchor: Anchor) {
        if self.anchors().iter().any(|a| a.url == anchor.url) {
            return;
        }
        match self {
            Self::Single(sym) => {
                *self = Self::Overloads(OverloadGroup {
                    display_name: std::mem::take(&mut sym.display_name),
                    normalized_key: std::mem::take(&mut sym.normalized_key),
                    scope: sym.scope.take(),
                    kind: sym.kind,
                    anchors: vec![std::mem::take(&mut sym.anchor), anchor],
                    seq: sym.seq,
                });
            }
            Self::Overloads(group) => group.anchors.push(anchor),
        }
    }
}

/// The full symbol index: bucket key → entries in authoring order.
///
/// Built once by [`super::IndexBuilder`], then read-only. Queries are pure
/// lookups, so a `SearchIndex` can be shared across any number of
/// concurrent searches without locking; swapping in a freshly built index
/// is the embedder's concern (an `Arc` swap suffices).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    buckets: HashMap<String, Vec<IndexEntry>>,
    entry_count: usize,
}

impl SearchIndex {
    pub(crate) fn new(buckets: HashMap<String, Vec<IndexEntry>>, entry_count: usize) -> Self {
        Self {
            buckets,
            entry_count,
        }
    }

    /// Number of logical entries (an overload group counts once).
    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates every entry in the index, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.buckets.values().flatten()
    }

    /// Searches for entries whose normalized name starts with `prefix`.
    ///
    /// When no name-prefix match exists, a second pass surfaces entries
    /// where a word boundary inside the name starts with the prefix, so
    /// `loops` still finds `unroll_loops`. Results are totally ordered:
    /// exact match, then shorter names, then alphabetical, then original
    /// insertion order. At most `limit` rows are returned; an overload
    /// group is one row regardless of its anchor count.
    ///
    /// An empty (or all-whitespace) prefix yields an empty result; there is
    /// no browse-all behavior.
    pub fn search(&self, prefix: &str, limit: usize) -> Result<Vec<&IndexEntry>, QueryError> {
        self.search_filtered(prefix, limit, None)
    }

    /// Like [`Self::search`], optionally restricted to one symbol kind.
    pub fn search_filtered(
        &self,
        prefix: &str,
        limit: usize,
        kind: Option<SymbolKind>,
    ) -> Result<Vec<&IndexEntry>, QueryError> {
        if limit == 0 {
            return Err(QueryError::InvalidLimit(limit));
        }

        let needle = normalize(prefix);
        if needle.is_empty() {
            return Ok(vec![]);
        }

        let kind_matches =
            |entry: &IndexEntry| kind.is_none_or(|wanted| entry.kind() == wanted);

        let mut hits: Vec<&IndexEntry> = self
            .prefix_candidates(&needle)
            .filter(|e| kind_matches(e))
            .filter(|e| e.normalized_key().starts_with(&needle))
            .collect();

        if hits.is_empty() {
            // Word-prefix fallback: any bucket can hold a mid-name match
            hits = self
                .entries()
                .filter(|e| kind_matches(e))
                .filter(|e| {
                    let key = e.normalized_key();
                    word_boundaries(key)
                        .into_iter()
                        .any(|at| key[at..].starts_with(&needle))
                })
                .collect();
        }

        hits.sort_by(|a, b| rank::compare(&needle, a, b));
        hits.truncate(limit);
        Ok(hits)
    }

    /// Entries that could prefix-match `needle`, using the bucket table to
    /// bound the scan. A needle of at least [`BUCKET_KEY_LEN`] characters
    /// pins a single bucket; shorter needles scan every bucket whose key
    /// starts with them.
    fn prefix_candidates<'a>(&'a self, needle: &str) -> Box<dyn Iterator<Item = &'a IndexEntry> + 'a> {
        if needle.chars().count() >= BUCKET_KEY_LEN {
            match self.buckets.get(&bucket_key(needle)) {
                Some(entries) => Box::new(entries.iter()),
                None => Box::new(std::iter::empty()),
            }
        } else {
            let needle = needle.to_string();
            Box::new(
                self.buckets
                    .iter()
                    .filter(move |(key, _)| key.starts_with(&needle))
                    .flat_map(|(_, entries)| entries.iter()),
            )
        }
    }

    /// Serializes the index for static loading by a documentation browser.
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        postcard::to_stdvec(self).context("serializing search index")
    }

    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        postcard::from_bytes(bytes).context("deserializing search index")
    }

    pub fn save(&self, path: &Path) -> crate::Result<()> {
        std::fs::write(path, self.to_bytes()?)
            .with_context(|| format!("writing search index to {}", path.display()))
    }

    pub fn load(path: &Path) -> crate::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading search index from {}", path.display()))?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawRecord;
    use crate::search::build_index;
    use assert2::check;
    use rstest::rstest;

    fn record(name: &str, scope: &str, anchor: &str) -> RawRecord {
        RawRecord {
            name: name.to_string(),
            scope: (!scope.is_empty()).then(|| scope.to_string()),
            anchor: anchor.to_string(),
            signature: None,
            kind: SymbolKind::Function,
        }
    }

    fn sample_index() -> SearchIndex {
        let (index, rejected) = build_index(vec![
            record("unroll", "Halide::ScheduleHandle", "a1"),
            record("unroll", "Halide::Func", "a2"),
            record("unroll_loops", "Halide::Internal", "a3"),
            record("update", "Halide::Func", "a4"),
            record("unique_name", "Halide::Internal", "a5"),
            record("use_avx", "Halide::Internal::CodeGen_X86", "a6"),
        ]);
        check!(rejected.is_empty());
        index
    }

    #[test]
    fn exact_matches_rank_before_longer_names() {
        let index = sample_index();
        let hits = index.search("unroll", 10).unwrap();

        let names: Vec<_> = hits.iter().map(|e| e.display_name()).collect();
        check!(names == vec!["unroll", "unroll", "unroll_loops"]);

        // Equal keys fall back to insertion order, so scopes stay stable
        check!(hits[0].scope() == Some("Halide::ScheduleHandle"));
        check!(hits[1].scope() == Some("Halide::Func"));
    }

    #[test]
    fn shorter_names_rank_before_longer() {
        let (index, _) = build_index(vec![
            record("use_android", "CodeGen_ARM", "a1"),
            record("use_avx", "CodeGen_X86", "a2"),
        ]);
        let hits = index.search("use", 10).unwrap();
        let names: Vec<_> = hits.iter().map(|e| e.display_name()).collect();
        check!(names == vec!["use_avx", "use_android"]);
    }

    #[test]
    fn equal_length_names_rank_alphabetically() {
        let (index, _) = build_index(vec![
            record("uncork", "B", "a1"),
            record("unbend", "A", "a2"),
        ]);
        let hits = index.search("un", 10).unwrap();
        let names: Vec<_> = hits.iter().map(|e| e.display_name()).collect();
        check!(names == vec!["unbend", "uncork"]);
    }

    #[test]
    fn empty_prefix_yields_no_results() {
        let index = sample_index();
        check!(index.search("", 10).unwrap().is_empty());
        check!(index.search("   ", 10).unwrap().is_empty());
    }

    #[test]
    fn zero_limit_is_an_error() {
        let index = sample_index();
        let err = index.search("unroll", 0).unwrap_err();
        check!(err == QueryError::InvalidLimit(0));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn results_are_bounded_by_limit(#[case] limit: usize) {
        let index = sample_index();
        let hits = index.search("u", limit).unwrap();
        check!(hits.len() <= limit);
    }

    #[test]
    fn single_character_prefix_scans_multiple_buckets() {
        let index = sample_index();
        // "unroll" lives in bucket "un", "use_avx" in "us"; both match "u"
        let hits = index.search("u", 10).unwrap();
        let names: Vec<_> = hits.iter().map(|e| e.display_name()).collect();
        check!(names.contains(&"unroll"));
        check!(names.contains(&"use_avx"));
    }

    #[test]
    fn word_prefix_fallback_finds_interior_words() {
        let index = sample_index();
        let hits = index.search("loops", 10).unwrap();
        let names: Vec<_> = hits.iter().map(|e| e.display_name()).collect();
        check!(names == vec!["unroll_loops"]);

        // Underscore-led queries match at the separator itself
        let hits = index.search("_loops", 10).unwrap();
        check!(hits.len() == 1);
        check!(hits[0].display_name() == "unroll_loops");
    }

    #[test]
    fn fallback_only_runs_when_prefix_pass_is_empty() {
        let (index, _) = build_index(vec![
            record("name", "A", "a1"),
            record("unique_name", "B", "a2"),
        ]);
        // "name" prefix-matches, so "unique_name" must not ride in via the
        // word-boundary pass
        let hits = index.search("name", 10).unwrap();
        let names: Vec<_> = hits.iter().map(|e| e.display_name()).collect();
        check!(names == vec!["name"]);
    }

    #[test]
    fn unknown_prefix_yields_empty_not_error() {
        let index = sample_index();
        check!(index.search("zzz", 10).unwrap().is_empty());
    }

    #[test]
    fn kind_filter_restricts_results() {
        let (index, _) = build_index(vec![
            RawRecord {
                name: "Func".to_string(),
                scope: Some("Halide".to_string()),
                anchor: "a1".to_string(),
                signature: None,
                kind: SymbolKind::Class,
            },
            RawRecord {
                name: "Func.h".to_string(),
                scope: None,
                anchor: "a2".to_string(),
                signature: None,
                kind: SymbolKind::File,
            },
        ]);

        let classes = index
            .search_filtered("func", 10, Some(SymbolKind::Class))
            .unwrap();
        check!(classes.len() == 1);
        check!(classes[0].display_name() == "Func");

        let files = index
            .search_filtered("func", 10, Some(SymbolKind::File))
            .unwrap();
        check!(files.len() == 1);
        check!(files[0].display_name() == "Func.h");
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let index = sample_index();
        let first = index.search("un", 10).unwrap();
        let second = index.search("un", 10).unwrap();
        check!(first == second);
    }

    #[test]
    fn normalized_prefix_matches_spaced_template_names() {
        let (index, _) = build_index(vec![RawRecord {
            name: "IntrusivePtr< const IRNode >".to_string(),
            scope: Some("Halide::Internal".to_string()),
            anchor: "a1".to_string(),
            signature: None,
            kind: SymbolKind::Struct,
        }]);

        let hits = index.search("IntrusivePtr<const", 10).unwrap();
        check!(hits.len() == 1);
        check!(hits[0].display_name() == "IntrusivePtr< const IRNode >");
    }
}
