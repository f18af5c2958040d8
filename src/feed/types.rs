use serde::Deserialize;

/// Raw response from the pricing feed's `/api/home` endpoint.
///
/// Categories missing from the response deserialize to empty vecs so a
/// partially-shaped payload still yields a (partial) report.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeed {
    /// Free-text update timestamp, e.g. `"last update : 18:55 24 March 2025"`.
    #[serde(rename = "updatedSync", default)]
    pub updated_sync: Option<String>,
    /// Foreign fiat currencies.
    #[serde(default)]
    pub arz: Vec<FeedEntry>,
    /// Cryptocurrencies.
    #[serde(default)]
    pub crypto: Vec<FeedEntry>,
    /// Gold and coins.
    #[serde(default)]
    pub gold: Vec<FeedEntry>,
}

/// A single priced instrument in any feed category.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    #[serde(default)]
    pub slug: Option<String>,
    /// English name.
    #[serde(default)]
    pub name: Option<String>,
    /// Farsi display name.
    #[serde(default)]
    pub fname: Option<String>,
    #[serde(default)]
    pub price: Vec<PriceRecord>,
}

/// One price record; which field applies depends on the instrument.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRecord {
    /// USD-denominated price (generic field).
    #[serde(default)]
    pub price: Option<PriceValue>,
    /// Toman-denominated price (stablecoin entries).
    #[serde(default)]
    pub toman: Option<PriceValue>,
}

/// A price that may arrive as a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    /// Numeric value, coercing decimal strings. `None` when the text is
    /// not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for PriceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
