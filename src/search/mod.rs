//! Prefix-search infrastructure for generated API documentation.
//!
//! This module provides the two halves of the search core: an index builder
//! that turns raw symbol records into immutable bucket tables, and a query
//! side that answers ranked prefix searches over them.

// Module declarations
pub(crate) mod builder;
pub(crate) mod index;
pub(crate) mod normalize;
pub(crate) mod rank;

// Public re-exports (used via lib.rs)
pub use builder::{IndexBuilder, build_index};
pub use index::{Anchor, IndexEntry, OverloadGroup, SearchIndex, Symbol};

// Internal re-exports
pub(crate) use normalize::{BUCKET_KEY_LEN, bucket_key, normalize, word_boundaries};
