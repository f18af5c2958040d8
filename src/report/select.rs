//! Instrument selection from the raw feed.
//!
//! Each category is filtered against a fixed allow-list and flattened
//! into uniform [`Quote`]s. The extraction rule is fixed: the `usdt`
//! stablecoin takes its Toman-denominated price, everything else takes
//! the generic price field. The rule is reapplied on every request.

use crate::feed::{FeedEntry, PriceValue, RawFeed};

/// Fiat slugs included in the report.
pub const FIAT_SLUGS: [&str; 3] = ["usd", "eur", "cad"];

/// Crypto names included in the report.
pub const CRYPTO_NAMES: [&str; 4] = ["bitcoin", "ethereum", "binance coin", "tether"];

/// Slug of the Toman-denominated stablecoin entry.
pub const USDT_SLUG: &str = "usdt";

/// A selected instrument ready for rendering.
///
/// `price` is `None` when the feed entry carried no usable price record;
/// the formatter decides how to degrade.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub slug: String,
    pub name: String,
    pub price: Option<PriceValue>,
}

impl Quote {
    fn from_entry(entry: &FeedEntry) -> Self {
        let slug = entry.slug.clone().unwrap_or_default();
        // Farsi display name preferred, English name as fallback.
        let name = entry
            .fname
            .clone()
            .or_else(|| entry.name.clone())
            .unwrap_or_else(|| slug.clone());

        let price = entry.price.first().and_then(|record| {
            if slug == USDT_SLUG {
                record.toman.clone()
            } else {
                record.price.clone()
            }
        });

        Self { slug, name, price }
    }
}

/// Allow-listed fiat currencies from `arz`, in feed order.
#[must_use]
pub fn select_fiat(feed: &RawFeed) -> Vec<Quote> {
    feed.arz
        .iter()
        .filter(|e| {
            e.slug
                .as_deref()
                .is_some_and(|slug| FIAT_SLUGS.contains(&slug))
        })
        .map(Quote::from_entry)
        .collect()
}

/// Allow-listed cryptocurrencies from `crypto`, in feed order.
#[must_use]
pub fn select_crypto(feed: &RawFeed) -> Vec<Quote> {
    feed.crypto
        .iter()
        .filter(|e| {
            e.name
                .as_deref()
                .is_some_and(|name| CRYPTO_NAMES.contains(&name))
        })
        .map(Quote::from_entry)
        .collect()
}

/// Every gold/coin entry, unfiltered, in feed order.
#[must_use]
pub fn select_gold(feed: &RawFeed) -> Vec<Quote> {
    feed.gold.iter().map(Quote::from_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed(value: serde_json::Value) -> RawFeed {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn fiat_filters_to_allow_list() {
        let feed = feed(json!({
            "arz": [
                {"slug": "usd", "fname": "دلار", "price": [{"price": 105500}]},
                {"slug": "gbp", "fname": "پوند", "price": [{"price": 133000}]},
                {"slug": "eur", "fname": "یورو", "price": [{"price": 114000}]}
            ]
        }));

        let quotes = select_fiat(&feed);
        let slugs: Vec<&str> = quotes.iter().map(|q| q.slug.as_str()).collect();
        assert_eq!(slugs, ["usd", "eur"]);
        assert_eq!(quotes[0].name, "دلار");
        assert_eq!(quotes[0].price, Some(PriceValue::Number(105500.0)));
    }

    #[test]
    fn crypto_filters_by_english_name() {
        let feed = feed(json!({
            "crypto": [
                {"slug": "btc", "name": "bitcoin", "price": [{"price": 67000}]},
                {"slug": "doge", "name": "dogecoin", "price": [{"price": 0.1}]},
                {"slug": "eth", "name": "ethereum", "price": [{"price": 3400}]}
            ]
        }));

        let slugs: Vec<String> = select_crypto(&feed).into_iter().map(|q| q.slug).collect();
        assert_eq!(slugs, ["btc", "eth"]);
    }

    #[test]
    fn usdt_takes_toman_field_others_take_price() {
        let feed = feed(json!({
            "crypto": [
                {"slug": "usdt", "name": "tether", "price": [{"toman": 105200, "price": 1.0}]},
                {"slug": "btc", "name": "bitcoin", "price": [{"toman": 7000000000i64, "price": 67000}]}
            ]
        }));

        let quotes = select_crypto(&feed);
        assert_eq!(quotes[0].price, Some(PriceValue::Number(105200.0)));
        assert_eq!(quotes[1].price, Some(PriceValue::Number(67000.0)));
    }

    #[test]
    fn gold_is_unfiltered() {
        let feed = feed(json!({
            "gold": [
                {"slug": "sekkeh", "fname": "سکه امامی", "price": [{"price": 95000000}]},
                {"slug": "18ayar", "fname": "طلای ۱۸ عیار", "price": [{"price": 8350000}]}
            ]
        }));

        assert_eq!(select_gold(&feed).len(), 2);
    }

    #[test]
    fn empty_price_records_yield_none() {
        let feed = feed(json!({
            "arz": [{"slug": "usd", "name": "US Dollar", "price": []}]
        }));

        let quotes = select_fiat(&feed);
        assert_eq!(quotes[0].price, None);
    }

    #[test]
    fn name_falls_back_to_english_then_slug() {
        let feed = feed(json!({
            "gold": [
                {"slug": "gold", "name": "gram", "price": [{"price": 1}]},
                {"slug": "mesghal", "price": [{"price": 2}]}
            ]
        }));

        let quotes = select_gold(&feed);
        assert_eq!(quotes[0].name, "gram");
        assert_eq!(quotes[1].name, "mesghal");
    }
}
