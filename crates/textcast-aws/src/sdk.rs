//! Shared AWS SDK configuration.

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use textcast_config::{AwsConfig, GeneralConfig};

/// Resolve the SDK configuration used by both service clients.
///
/// Credentials come from the default provider chain. SDK retries are
/// disabled: a failed call is reported once and the batch moves on.
pub async fn load_sdk_config(aws: &AwsConfig, general: &GeneralConfig) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

    if let Some(region) = aws.region() {
        loader = loader.region(Region::new(region.to_owned()));
    }
    if let Some(endpoint) = aws.endpoint() {
        loader = loader.endpoint_url(endpoint);
    }
    if let Some(timeout) = general.request_timeout() {
        loader = loader.timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build());
    }

    let sdk = loader.load().await;
    tracing::debug!(
        region = ?sdk.region().map(ToString::to_string),
        endpoint = aws.endpoint().unwrap_or("default"),
        "aws sdk config loaded"
    );
    sdk
}
