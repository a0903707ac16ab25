use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::config::Config;
use crate::models::{FileRecord, NewFileRecord};
use crate::store::{MetadataStore, ObjectStore, StoreError, StoreResult};

const BUCKET: &str = "all-storage";
const TABLE: &str = "storage";

/// REST client for the backing service, implementing both collaborator
/// traits. Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct SupabaseStore {
    http: reqwest::Client,
    service_url: String,
    service_key: String,
}

impl SupabaseStore {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            service_url: config.service_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.service_key)
    }

    /// Percent-encodes each segment of an object key so names with spaces or
    /// reserved characters survive as a URL path, keeping the `/` separators.
    fn encode_key(key: &str) -> String {
        key.split('/')
            .map(urlencoding::encode)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Passes 2xx responses through; anything else becomes a backend error
    /// carrying the response body text.
    async fn check(response: reqwest::Response) -> StoreResult<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_else(|err| err.to_string());
            Err(StoreError::Backend(message))
        }
    }
}

#[async_trait]
impl ObjectStore for SupabaseStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> StoreResult<()> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.service_url,
            BUCKET,
            Self::encode_key(key)
        );
        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.bearer())
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl MetadataStore for SupabaseStore {
    async fn insert_record(&self, record: NewFileRecord<'_>) -> StoreResult<()> {
        let url = format!("{}/rest/v1/{}", self.service_url, TABLE);
        // merge-duplicates keeps (uploader_id, file_name) unique: re-upload
        // updates the existing row instead of inserting a second one.
        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.bearer())
            .header("apikey", &self.service_key)
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[record])
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn list_records(&self) -> StoreResult<Vec<FileRecord>> {
        let url = format!("{}/rest/v1/{}", self.service_url, TABLE);
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.bearer())
            .header("apikey", &self.service_key)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        let records = Self::check(response).await?.json().await?;
        Ok(records)
    }
}
