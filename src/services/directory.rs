use crate::models::Candidate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the roommate directory API
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the external roommate-listing directory
///
/// The directory owns all listing CRUD; this service only reads from it.
/// Listings that fail to deserialize are skipped rather than failing the
/// whole fetch, since a single malformed listing should not take down search.
pub struct DirectoryClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl DirectoryClient {
    /// Create a new directory client
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch candidate roommate listings
    ///
    /// `exclude_ids` is passed through to the directory and also applied
    /// locally, since the directory's exclusion support is best-effort.
    pub async fn fetch_candidates(
        &self,
        exclude_ids: &[String],
        limit: usize,
    ) -> Result<Vec<Candidate>, DirectoryError> {
        let mut url = format!(
            "{}/roommates?limit={}",
            self.base_url.trim_end_matches('/'),
            limit
        );

        if !exclude_ids.is_empty() {
            let exclude = exclude_ids.join(",");
            url.push_str(&format!("&exclude={}", urlencoding::encode(&exclude)));
        }

        tracing::debug!("Fetching candidates from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Failed to fetch candidates: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let listings = json
            .get("listings")
            .and_then(|l| l.as_array())
            .ok_or_else(|| DirectoryError::InvalidResponse("Missing listings array".into()))?;

        let candidates: Vec<Candidate> = listings
            .iter()
            .filter_map(|listing| serde_json::from_value(listing.clone()).ok())
            .filter(|c: &Candidate| !exclude_ids.contains(&c.listing_id))
            .collect();

        tracing::debug!("Fetched {} candidates (total: {})", candidates.len(), total);

        Ok(candidates)
    }

    /// Get a single listing by ID
    pub async fn get_listing(&self, listing_id: &str) -> Result<Candidate, DirectoryError> {
        let url = format!(
            "{}/roommates/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(listing_id)
        );

        tracing::debug!("Fetching listing: {}", listing_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound(format!(
                "Listing not found: {}",
                listing_id
            )));
        }

        if !response.status().is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Failed to fetch listing: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse listing: {}", e)))
    }
}
