use anyhow::Context as _;
use clap::Parser;
use doxidex::cli::{Cli, Commands};
use doxidex::record::RawRecord;
use doxidex::search::{IndexEntry, SearchIndex, build_index};
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    doxidex::tracing::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build { records, output } => {
            let index = run_build(&records, &output)?;
            println!(
                "Indexed {} symbols into {} buckets ({})",
                index.len(),
                index.bucket_count(),
                output.display()
            );
        }
        Commands::Search {
            index,
            prefix,
            kind,
            limit,
        } => {
            let index = SearchIndex::load(&index)?;
            let hits = index.search_filtered(&prefix, limit, kind)?;
            if hits.is_empty() {
                println!("No symbols match '{}'", prefix);
            } else {
                print!("{}", format_results(&hits));
            }
        }
        Commands::Stats { index } => {
            let index = SearchIndex::load(&index)?;
            let overloaded = index
                .entries()
                .filter(|e| matches!(e, IndexEntry::Overloads(_)))
                .count();
            println!("entries:    {}", index.len());
            println!("buckets:    {}", index.bucket_count());
            println!("overloaded: {}", overloaded);
        }
    }

    Ok(())
}

fn run_build(records_path: &Path, output: &Path) -> anyhow::Result<SearchIndex> {
    let file = File::open(records_path)
        .with_context(|| format!("opening records file {}", records_path.display()))?;
    let records: Vec<RawRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing records from {}", records_path.display()))?;

    // The builder warns on every record it refuses; no need to repeat here
    let (index, _rejected) = build_index(records);

    index.save(output)?;
    Ok(index)
}

/// Format ranked hits into the rows a documentation browser would render.
fn format_results(hits: &[&IndexEntry]) -> String {
    let mut out = String::new();
    for (idx, entry) in hits.iter().enumerate() {
        let scope = entry
            .scope()
            .map(|s| format!(" — {}", s))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{}. {} ({}){}",
            idx + 1,
            entry.display_name(),
            entry.kind(),
            scope
        );

        for anchor in entry.anchors() {
            match &anchor.signature {
                Some(sig) => {
                    let _ = writeln!(out, "   {}  [{}]", sig, anchor.url);
                }
                None => {
                    let _ = writeln!(out, "   [{}]", anchor.url);
                }
            }
        }
    }
    out
}
