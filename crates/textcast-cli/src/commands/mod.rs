use textcast_config::TextcastConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod config;
pub mod process;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &TextcastConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Process(args) => process::handle(&args, config, flags).await,
        Commands::Config => config::handle(config, flags),
    }
}
