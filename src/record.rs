//! Raw symbol records as emitted by the documentation pipeline.

use serde::{Deserialize, Serialize};

/// The kind of documented symbol a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    File,
    Namespace,
    Class,
    Struct,
    Function,
    Variable,
    Enum,
    Typedef,
}

impl SymbolKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Namespace => "namespace",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Enum => "enum",
            Self::Typedef => "typedef",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SymbolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "namespace" => Ok(Self::Namespace),
            "class" => Ok(Self::Class),
            "struct" => Ok(Self::Struct),
            "function" | "fn" => Ok(Self::Function),
            "variable" | "var" => Ok(Self::Variable),
            "enum" => Ok(Self::Enum),
            "typedef" | "type" => Ok(Self::Typedef),
            other => Err(format!("unknown symbol kind '{}'", other)),
        }
    }
}

/// One symbol occurrence as supplied by the documentation generator.
///
/// `scope` is the enclosing namespace or class (e.g. `Halide::Internal`);
/// `signature` is the disambiguation hint attached to overloaded names
/// (e.g. `unroll(Var var, int factor)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub anchor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub kind: SymbolKind,
}

/// Why the builder refused a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("record has an empty name")]
    EmptyName,
    #[error("record has an empty anchor")]
    EmptyAnchor,
}

/// A record the builder could not index, returned to the caller for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub record: RawRecord,
    pub reason: RejectReason,
}
