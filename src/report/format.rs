//! Report rendering: price formatting and message assembly.

use tracing::warn;

use crate::feed::{PriceValue, RawFeed};
use crate::locale::{localize_update_time, to_persian_digits};

use super::select::{select_crypto, select_fiat, select_gold, Quote, USDT_SLUG};

/// Emoji icons for known instruments, `•` as the default.
const ASSET_ICONS: [(&str, &str); 8] = [
    ("usd", "💵"),
    ("eur", "💶"),
    ("cad", "💵"),
    ("bitcoin", "₿"),
    ("ethereum", "Ξ"),
    ("tether", "₮"),
    ("shiba inu", "🐕"),
    ("gold", "🏆"),
];

/// Local-currency suffix (Toman).
const TOMAN: &str = "تومان";

/// USD suffix for dollar-denominated crypto lines.
const DOLLAR: &str = "دلار";

fn icon_for(key: &str) -> &'static str {
    ASSET_ICONS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or("•", |(_, icon)| icon)
}

/// Render a price for display: thousands separators, zero decimals,
/// Persian digits. Non-numeric values come back unchanged (fail-soft).
#[must_use]
pub fn format_price(value: &PriceValue) -> String {
    match value.as_f64() {
        Some(n) => to_persian_digits(&group_thousands(n)),
        None => value.to_string(),
    }
}

/// Round to a whole number and insert `,` every three digits.
fn group_thousands(n: f64) -> String {
    let rounded = n.round() as i128;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Build the full report message from a feed snapshot.
///
/// Section order is fixed: fiat, crypto (usdt first), gold, then the
/// localized update-time footer. Output is deterministic for a given
/// feed. Uses Telegram HTML bold markup.
#[must_use]
pub fn build_report(feed: &RawFeed) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("\n<b>💵 ارزهای خارجی:</b>".into());
    for quote in select_fiat(feed) {
        push_quote_line(&mut lines, &quote, icon_for(&quote.slug.to_lowercase()), TOMAN);
    }

    lines.push("\n<b>🪙 ارزهای دیجیتال:</b>".into());
    let mut crypto = select_crypto(feed);
    // Stable sort: the Toman-denominated stablecoin leads, the rest keep
    // their feed order.
    crypto.sort_by_key(|q| q.slug != USDT_SLUG);
    for quote in crypto {
        let suffix = if quote.slug == USDT_SLUG { TOMAN } else { DOLLAR };
        push_quote_line(&mut lines, &quote, icon_for(&quote.name.to_lowercase()), suffix);
    }

    lines.push("\n<b>🏆 طلا و سکه:</b>".into());
    for quote in select_gold(feed) {
        push_quote_line(&mut lines, &quote, icon_for(&quote.slug.to_lowercase()), TOMAN);
    }

    lines.push("\n".into());
    let updated = feed.updated_sync.as_deref().unwrap_or_default();
    lines.push(format!("🔄 آخرین بروزرسانی: {}", localize_update_time(updated)));

    lines.join("\n")
}

/// Render one quote line, skipping quotes that carried no price at all.
fn push_quote_line(lines: &mut Vec<String>, quote: &Quote, icon: &str, suffix: &str) {
    let Some(price) = &quote.price else {
        warn!(slug = %quote.slug, "Skipping quote without a usable price");
        return;
    };

    lines.push(format!(
        "{icon} <b>{}</b>: {} {suffix}",
        quote.name,
        format_price(price)
    ));
}
