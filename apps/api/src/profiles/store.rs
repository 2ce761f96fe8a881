//! Profile store boundary — a Supabase PostgREST client.
//!
//! The store is a remote relational resource reached over HTTP and used as a
//! get/put key-value resource: fetch-by-id returns zero-or-one record, insert
//! returns the stored representation. Non-success statuses are surfaced as
//! typed errors; recovery policy (404 vs. degrade) belongs to the callers.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::profile::Profile;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned status {status}: {message}")]
    Api { status: u16, message: String },
}

/// REST client for the `profiles` table.
#[derive(Clone)]
pub struct ProfileStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ProfileStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn profiles_url(&self) -> String {
        format!("{}/rest/v1/profiles", self.base_url)
    }

    /// Fetches zero-or-one profile by id.
    pub async fn fetch(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        let response = self
            .client
            .get(self.profiles_url())
            .query(&[("id", format!("eq.{id}"))])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let rows: Vec<Profile> = response.json().await?;
        debug!("profile fetch for {id}: {} row(s)", rows.len());
        Ok(rows.into_iter().next())
    }

    /// Inserts a profile and returns the stored representation (with the
    /// generated id).
    pub async fn insert(&self, profile: &Profile) -> Result<Option<Profile>, StoreError> {
        let response = self
            .client
            .post(self.profiles_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            // Required for the generated id to come back.
            .header("Prefer", "return=representation")
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let rows: Vec<Profile> = response.json().await?;
        Ok(rows.into_iter().next())
    }
}
