//! Price report pipeline: select instruments, format the message.

mod format;
mod select;

pub use format::{build_report, format_price};
pub use select::{select_crypto, select_fiat, select_gold, Quote, CRYPTO_NAMES, FIAT_SLUGS};

use crate::error::Result;
use crate::feed::FeedClient;

/// Stateless report generator: one fetch, one formatted message.
///
/// Constructed once at startup and shared by the bot adapter; every
/// invocation builds the report from a fresh feed snapshot.
pub struct PriceReporter {
    client: FeedClient,
}

impl PriceReporter {
    #[must_use]
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    /// Fetch current prices and build the report text.
    ///
    /// Transport and decoding failures propagate; no partial report is
    /// produced on a failed fetch.
    pub async fn latest_report(&self) -> Result<String> {
        let feed = self.client.fetch().await?;
        Ok(build_report(&feed))
    }
}
