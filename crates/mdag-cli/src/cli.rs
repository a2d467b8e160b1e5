use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mdag",
    about = "MerkleDAG: content-addressed file tree ingestion",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file (defaults to ./mdag.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Object store directory
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Maximum chunk size in bytes
    #[arg(long, global = true)]
    pub chunk_size: Option<usize>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode a file or directory into the object store
    Add(PathArgs),
    /// Compute the root digest without persisting anything
    Hash(PathArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct PathArgs {
    pub path: PathBuf,
}
