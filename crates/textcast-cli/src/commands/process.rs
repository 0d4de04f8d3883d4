use anyhow::Context;
use textcast_aws::{ComprehendAnalyzer, PollySynthesizer, load_sdk_config};
use textcast_batch::{BatchProcessor, TracingReporter};
use textcast_config::TextcastConfig;
use textcast_store::AudioStore;

use crate::cli::{GlobalFlags, ProcessArgs};
use crate::output::output;

/// Handle `tcast process`.
///
/// Startup problems (unconfigured services, no bucket, store construction,
/// unlistable directory) end the run. Per-file failures only show up in the
/// report and the error log; the exit code stays 0.
pub async fn handle(
    args: &ProcessArgs,
    config: &TextcastConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    config.ensure_ready()?;

    let bucket = resolve_bucket(args, config)?;
    let prefix = args
        .prefix
        .clone()
        .unwrap_or_else(|| config.storage.prefix.clone());

    let sdk = load_sdk_config(&config.aws, &config.general).await;
    let analyzer = ComprehendAnalyzer::new(&sdk, &config.analysis);
    let synthesizer = PollySynthesizer::new(&sdk, &config.synthesis);
    let store = AudioStore::from_config(config, &bucket).with_context(|| {
        format!(
            "failed to open {:?} store for bucket '{bucket}'",
            config.storage.backend
        )
    })?;

    let processor = BatchProcessor::new(analyzer, synthesizer, store, TracingReporter);
    let report = processor.process(&args.directory, &prefix).await?;

    tracing::debug!(
        processed = report.processed,
        failed = report.failed,
        "batch finished"
    );
    output(&report, flags.format)
}

fn resolve_bucket(args: &ProcessArgs, config: &TextcastConfig) -> anyhow::Result<String> {
    args.bucket
        .as_deref()
        .map(str::trim)
        .filter(|bucket| !bucket.is_empty())
        .or_else(|| config.storage.bucket())
        .map(ToOwned::to_owned)
        .context("no destination bucket: pass --bucket or set storage.bucket")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn args(bucket: Option<&str>) -> ProcessArgs {
        ProcessArgs {
            directory: PathBuf::from("."),
            bucket: bucket.map(ToOwned::to_owned),
            prefix: None,
        }
    }

    #[test]
    fn flag_bucket_beats_config() {
        let mut config = TextcastConfig::default();
        config.storage.bucket = "from-config".into();
        assert_eq!(resolve_bucket(&args(Some("from-flag")), &config).unwrap(), "from-flag");
    }

    #[test]
    fn config_bucket_used_without_flag() {
        let mut config = TextcastConfig::default();
        config.storage.bucket = "from-config".into();
        assert_eq!(resolve_bucket(&args(None), &config).unwrap(), "from-config");
    }

    #[test]
    fn missing_bucket_is_an_error() {
        let err = resolve_bucket(&args(Some("  ")), &TextcastConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--bucket"));
    }
}
