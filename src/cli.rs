use crate::record::SymbolKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doxidex")]
#[command(about = "Build and query a symbol search index for generated API docs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index from a JSON array of symbol records
    Build {
        records: PathBuf,
        #[arg(short, long, default_value = "doxidex.idx")]
        output: PathBuf,
    },
    /// Query a built index with a name prefix
    Search {
        index: PathBuf,
        prefix: String,
        #[arg(short, long)]
        kind: Option<SymbolKind>,
        #[arg(short = 'n', long, default_value = "25")]
        limit: usize,
    },
    /// Print summary counts for a built index
    Stats {
        index: PathBuf,
    },
}
