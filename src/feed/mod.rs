//! Pricing feed access.
//!
//! One HTTP client and the serde data model for the raw feed response.
//! The feed is heterogeneous: prices arrive as numbers or decimal
//! strings depending on the instrument category, so the model is
//! deliberately tolerant.

mod client;
mod types;

pub use client::FeedClient;
pub use types::{FeedEntry, PriceRecord, PriceValue, RawFeed};
