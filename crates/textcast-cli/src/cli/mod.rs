use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, ProcessArgs};

/// Top-level CLI parser for the `tcast` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tcast",
    version,
    about = "Categorize text files, synthesize speech, and upload the audio"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw, text
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file merged above textcast.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn process_takes_directory_bucket_and_prefix() {
        let cli = Cli::try_parse_from([
            "tcast",
            "process",
            "./docs",
            "--bucket",
            "audio-bucket",
            "--prefix",
            "spoken",
        ])
        .expect("cli should parse");

        let Commands::Process(args) = cli.command else {
            panic!("expected process command");
        };
        assert_eq!(args.directory, PathBuf::from("./docs"));
        assert_eq!(args.bucket.as_deref(), Some("audio-bucket"));
        assert_eq!(args.prefix.as_deref(), Some("spoken"));
    }

    #[test]
    fn prefix_and_bucket_are_optional() {
        let cli = Cli::try_parse_from(["tcast", "process", "./docs"]).expect("cli should parse");
        let Commands::Process(args) = cli.command else {
            panic!("expected process command");
        };
        assert_eq!(args.bucket, None);
        assert_eq!(args.prefix, None);
    }

    #[test]
    fn process_requires_directory() {
        assert!(Cli::try_parse_from(["tcast", "process"]).is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tcast", "config", "--format", "text", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tcast", "--format", "xml", "config"]);
        assert!(parsed.is_err());
    }
}
