//! Narkhbot - Live Iranian market prices over Telegram.
//!
//! The bot answers the `/latest` command with a Persian-language report of
//! current fiat, crypto, and gold prices pulled from an external pricing
//! API. The report pipeline is stateless: every command triggers one fetch,
//! one selection pass over the feed, and one formatting pass.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML with env overrides
//! - [`error`] - Error types for the crate
//! - [`feed`] - HTTP client and data model for the pricing feed
//! - [`locale`] - Persian digit and Jalali calendar localization
//! - [`report`] - Instrument selection and report formatting
//! - [`bot`] - Telegram adapter (command parsing, long-polling loop)
//!
//! # Example
//!
//! ```no_run
//! use narkhbot::feed::FeedClient;
//! use narkhbot::report::PriceReporter;
//!
//! # async fn run() -> narkhbot::error::Result<()> {
//! let client = FeedClient::new("https://admin.alanchand.com".into());
//! let reporter = PriceReporter::new(client);
//! let text = reporter.latest_report().await?;
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod feed;
pub mod locale;
pub mod report;
