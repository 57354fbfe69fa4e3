//! Object-store client for meeting photos.
//!
//! Talks to an S3-style bucket API over HTTP: objects are keyed by an
//! opaque file name and served back through a public URL. Paths follow the
//! `/object/{bucket}/{name}` convention of the hosted store this deployment
//! uses.

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured bucket does not exist (or storage is unconfigured).
    #[error("photo bucket not configured")]
    BucketMissing,
    #[error("object store request failed")]
    Request(#[from] reqwest::Error),
    #[error("object store responded {0}")]
    Status(StatusCode),
}

#[derive(Clone)]
pub struct PhotoStore {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl PhotoStore {
    pub fn from_settings(settings: &Settings) -> Self {
        PhotoStore {
            http: reqwest::Client::new(),
            base_url: settings.storage_url.trim_end_matches('/').to_string(),
            bucket: settings.storage_bucket.clone(),
            api_key: settings.storage_key.clone(),
        }
    }

    /// Public retrieval URL for a stored object.
    pub fn public_url(&self, name: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, name)
    }

    /// Write an object and return its public URL. Overwrites by name.
    pub async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, name);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("content-type", content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;

        match resp.status() {
            s if s.is_success() => Ok(self.public_url(name)),
            StatusCode::NOT_FOUND => Err(StoreError::BucketMissing),
            s => Err(StoreError::Status(s)),
        }
    }

    /// Delete an object by name. Missing objects are not an error.
    pub async fn remove(&self, name: &str) -> Result<(), StoreError> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, name);
        let resp = self
            .http
            .delete(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        match resp.status() {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Ok(()),
            s => Err(StoreError::Status(s)),
        }
    }
}

/// Stored object name embedded in a public URL (its last path segment).
pub fn object_name_from_url(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}
