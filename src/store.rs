use async_trait::async_trait;
use thiserror::Error;

use crate::models::{FileRecord, NewFileRecord};

/// Failure reported by a collaborator. The display text is surfaced to the
/// caller verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Upsert-by-key binary writes under a hierarchical path namespace.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> StoreResult<()>;
}

/// Insert and list of file metadata records. Listing returns rows ordered by
/// `created_at` descending; insert is an upsert keyed on
/// `(uploader_id, file_name)`.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn insert_record(&self, record: NewFileRecord<'_>) -> StoreResult<()>;

    async fn list_records(&self) -> StoreResult<Vec<FileRecord>>;
}
