pub mod cli;
pub mod error;
pub mod record;
pub mod search;
pub mod tracing;

pub use error::{QueryError, Result};
pub use record::{RawRecord, RejectedRecord, SymbolKind};
pub use search::{Anchor, IndexBuilder, IndexEntry, OverloadGroup, SearchIndex, Symbol, build_index};
