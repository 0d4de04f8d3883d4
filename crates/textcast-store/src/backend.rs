//! Object store construction from configuration.
//!
//! | backend  | implementation                    | content type metadata |
//! |----------|-----------------------------------|-----------------------|
//! | `s3`     | `AmazonS3` (env credentials)      | yes                   |
//! | `local`  | `LocalFileSystem` at root/bucket  | no                    |
//! | `memory` | `InMemory`                        | yes                   |

use std::path::PathBuf;
use std::sync::Arc;

use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::{ClientOptions, ObjectStore, RetryConfig};
use textcast_config::{StorageBackend, TextcastConfig};

use crate::StorageError;

/// A constructed store plus whether it accepts object attributes.
pub struct Backend {
    pub store: Arc<dyn ObjectStore>,
    pub supports_attributes: bool,
}

/// Build the object store for `bucket` as selected by `config.storage.backend`.
///
/// S3 credentials come from the standard `AWS_*` environment variables;
/// `aws.region` and `storage.endpoint` override them when set. Client
/// retries are disabled.
///
/// # Errors
///
/// Returns [`StorageError::Backend`] if the builder rejects the settings, or
/// [`StorageError::Io`] if the local root cannot be created.
pub fn build_backend(config: &TextcastConfig, bucket: &str) -> Result<Backend, StorageError> {
    match config.storage.backend {
        StorageBackend::S3 => {
            let mut options = ClientOptions::new().with_allow_http(config.storage.allow_http);
            if let Some(timeout) = config.general.request_timeout() {
                options = options.with_timeout(timeout);
            }

            let mut builder = AmazonS3Builder::from_env()
                .with_bucket_name(bucket)
                .with_client_options(options)
                .with_retry(RetryConfig {
                    max_retries: 0,
                    ..RetryConfig::default()
                });
            if let Some(region) = config.aws.region() {
                builder = builder.with_region(region);
            }
            if let Some(endpoint) = config.storage.endpoint() {
                builder = builder.with_endpoint(endpoint);
            }

            Ok(Backend {
                store: Arc::new(builder.build()?),
                supports_attributes: true,
            })
        }
        StorageBackend::Local => {
            let root = PathBuf::from(&config.storage.local_root).join(bucket);
            std::fs::create_dir_all(&root)?;
            tracing::debug!(root = %root.display(), "using local filesystem store");
            Ok(Backend {
                store: Arc::new(LocalFileSystem::new_with_prefix(&root)?),
                supports_attributes: false,
            })
        }
        StorageBackend::Memory => Ok(Backend {
            store: Arc::new(InMemory::new()),
            supports_attributes: true,
        }),
    }
}
