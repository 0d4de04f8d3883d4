//! # textcast-store
//!
//! Writes synthesized audio to an object store bucket.
//!
//! [`AudioStore`] wraps any `object_store::ObjectStore` bound to one bucket.
//! Keys are derived with [`textcast_core::object_key`], so rerunning a batch
//! overwrites the same objects. There is no dedup and no versioning.

pub mod backend;
pub mod error;

pub use backend::{Backend, build_backend};
pub use error::StorageError;

use std::sync::Arc;

use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use textcast_config::TextcastConfig;
use textcast_core::{AudioArtifact, StorageObject, object_key};

/// Audio object store bound to one bucket.
pub struct AudioStore {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    content_type: bool,
}

impl AudioStore {
    /// Wrap an existing store. Content type metadata is off; enable it with
    /// [`Self::with_content_type`] for backends that accept attributes.
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            content_type: false,
        }
    }

    /// In-memory store (for testing and dry runs).
    #[must_use]
    pub fn in_memory(bucket: impl Into<String>) -> Self {
        Self::new(Arc::new(InMemory::new()), bucket).with_content_type(true)
    }

    /// Build the store selected by configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be constructed.
    pub fn from_config(config: &TextcastConfig, bucket: &str) -> Result<Self, StorageError> {
        let backend = build_backend(config, bucket)?;
        Ok(Self::new(backend.store, bucket).with_content_type(backend.supports_attributes))
    }

    #[must_use]
    pub const fn with_content_type(mut self, enabled: bool) -> Self {
        self.content_type = enabled;
        self
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The underlying object store.
    #[must_use]
    pub fn inner(&self) -> Arc<dyn ObjectStore> {
        Arc::clone(&self.store)
    }

    /// Write `artifact` under `{prefix}/{file_name}.mp3`.
    ///
    /// The artifact is consumed; its bytes are handed to the store without a copy.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the key is not a valid object path
    /// (empty or `.`/`..` segments, control characters) or the store rejects
    /// the write.
    pub async fn put_audio(
        &self,
        prefix: &str,
        file_name: &str,
        artifact: AudioArtifact,
    ) -> Result<StorageObject, StorageError> {
        let key = object_key(prefix, file_name, artifact.format);
        // `Path::from` would percent-encode `#`, `%`, `~`, `?` and friends.
        let location = Path::parse(&key).map_err(|source| StorageError::Write {
            key: key.clone(),
            source: source.into(),
        })?;
        let size = artifact.len();

        let mut options = PutOptions::default();
        if self.content_type {
            let mut attributes = Attributes::new();
            attributes.insert(Attribute::ContentType, artifact.format.content_type().into());
            options.attributes = attributes;
        }

        self.store
            .put_opts(&location, PutPayload::from(artifact.data), options)
            .await
            .map_err(|source| StorageError::Write {
                key: key.clone(),
                source,
            })?;

        tracing::debug!(bucket = %self.bucket, %location, size, "audio object written");
        Ok(StorageObject {
            bucket: self.bucket.clone(),
            key: location.to_string(),
            size,
        })
    }
}
