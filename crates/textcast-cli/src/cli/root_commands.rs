use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Categorize every file in a directory, synthesize speech, upload the audio.
    Process(ProcessArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct ProcessArgs {
    /// Directory whose entries are read as text files.
    pub directory: PathBuf,

    /// Destination bucket (defaults to `storage.bucket`).
    #[arg(short, long)]
    pub bucket: Option<String>,

    /// Destination key prefix (defaults to `storage.prefix`, usually empty).
    #[arg(long)]
    pub prefix: Option<String>,
}
