use textcast_config::TextcastConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `tcast config`.
pub fn handle(config: &TextcastConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(config, flags.format)
}
