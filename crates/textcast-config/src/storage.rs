//! Audio object storage configuration.

use serde::{Deserialize, Serialize};

use crate::aws::non_empty;

/// Default root directory for the `local` backend.
fn default_local_root() -> String {
    String::from("./textcast-out")
}

/// Object store implementation backing the audio uploads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Amazon S3 or an S3-compatible service.
    #[default]
    S3,
    /// Directory tree on the local filesystem (`{local_root}/{bucket}/{key}`).
    Local,
    /// Process memory; nothing survives the run.
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Bucket used when `--bucket` is not given.
    #[serde(default)]
    pub bucket: String,

    /// Key prefix used when `--prefix` is not given.
    #[serde(default)]
    pub prefix: String,

    /// Custom S3 endpoint URL (MinIO, R2, LocalStack, ...).
    #[serde(default)]
    pub endpoint: String,

    /// Allow plain HTTP to the custom endpoint.
    #[serde(default)]
    pub allow_http: bool,

    #[serde(default = "default_local_root")]
    pub local_root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            bucket: String::new(),
            prefix: String::new(),
            endpoint: String::new(),
            allow_http: false,
            local_root: default_local_root(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        non_empty(&self.bucket)
    }

    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        non_empty(&self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::S3);
        assert_eq!(config.bucket(), None);
        assert!(config.prefix.is_empty());
        assert!(!config.allow_http);
        assert_eq!(config.local_root, "./textcast-out");
    }

    #[test]
    fn custom_endpoint_used_when_set() {
        let config = StorageConfig {
            endpoint: "http://localhost:9000".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), Some("http://localhost:9000"));
    }
}
