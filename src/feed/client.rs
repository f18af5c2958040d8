use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use super::types::RawFeed;
use crate::error::Result;

/// HTTP client for the pricing feed.
///
/// Issues a single POST per report; no retry, no caching. Transport and
/// decoding failures are hard errors for the invoking pipeline.
pub struct FeedClient {
    client: Client,
    base_url: String,
}

impl FeedClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the current snapshot of all instrument categories.
    pub async fn fetch(&self) -> Result<RawFeed> {
        let url = format!("{}/api/home", self.base_url);

        info!(url = %url, "Fetching current prices");

        let feed: RawFeed = self
            .client
            .post(&url)
            .json(&json!({"lang": "en"}))
            .header("TE", "trailers")
            .send()
            .await?
            .json()
            .await?;

        debug!(
            fiat = feed.arz.len(),
            crypto = feed.crypto.len(),
            gold = feed.gold.len(),
            "Fetched feed snapshot"
        );

        Ok(feed)
    }
}
