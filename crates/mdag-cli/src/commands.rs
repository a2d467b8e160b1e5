use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use mdag_crypto::Blake3Accumulator;
use mdag_dag::{AddStats, DagBuilder, Node};
use mdag_store::{FsKvStore, InMemoryKvStore, KvStore};
use mdag_types::Digest;
use serde::Serialize;

use crate::cli::*;
use crate::config::MdagConfig;
use crate::loader;

#[derive(Debug, Serialize)]
struct AddSummary {
    root: String,
    name: String,
    size: u64,
    persisted: bool,
    stats: AddStats,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = MdagConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.store.clone(), cli.chunk_size);

    match cli.command {
        Command::Add(args) => cmd_add(&config, &args.path, &cli.format),
        Command::Hash(args) => cmd_hash(&config, &args.path, &cli.format),
        Command::Config => cmd_config(&config),
    }
}

fn cmd_add(config: &MdagConfig, path: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let store = FsKvStore::open(&config.store.path)
        .with_context(|| format!("opening store at {}", config.store.path.display()))?
        .with_fsync(config.store.fsync);
    let summary = ingest(config, path, &store, true)?;
    print_summary(&summary, format)
}

fn cmd_hash(config: &MdagConfig, path: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let store = InMemoryKvStore::new();
    let summary = ingest(config, path, &store, false)?;
    print_summary(&summary, format)
}

fn cmd_config(config: &MdagConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

fn ingest<S: KvStore>(
    config: &MdagConfig,
    path: &Path,
    store: S,
    persisted: bool,
) -> anyhow::Result<AddSummary> {
    let tree = loader::load(path)?;
    let mut builder =
        DagBuilder::with_config(store, Blake3Accumulator::new(), config.builder.clone())?;
    let root: Digest = builder
        .add(&tree)
        .with_context(|| format!("adding {}", path.display()))?;
    Ok(AddSummary {
        root: root.to_hex(),
        name: tree.name().to_string(),
        size: tree.size(),
        persisted,
        stats: builder.stats(),
    })
}

fn print_summary(summary: &AddSummary, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        OutputFormat::Text => {
            let verb = if summary.persisted { "added" } else { "hashed" };
            println!("{} {} {}", verb.green().bold(), summary.root.yellow(), summary.name);
            println!(
                "  {} written, {} already present, {} bytes",
                summary.stats.objects_written.to_string().bold(),
                summary.stats.objects_deduplicated,
                summary.stats.bytes_written,
            );
        }
    }
    Ok(())
}
