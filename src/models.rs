use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata row describing one uploaded file. `created_at` is assigned by the
/// persistence layer and only drives the descending sort on listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub uploader_id: String,
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewFileRecord<'a> {
    pub uploader_id: &'a str,
    pub file_name: &'a str,
    pub file_type: &'a str,
    pub file_url: &'a str,
}

/// Public URL of a stored object. Both the upload and list paths compute the
/// URL from here; the value held in the metadata store is never trusted for
/// output since the base URL is environment-specific.
pub fn object_url(storage_base: &str, uploader_id: &str, file_name: &str) -> String {
    format!("{}/{}/{}", storage_base, uploader_id, file_name)
}
