//! Persian localization: digits, month names, Jalali calendar dates.

mod date;
mod jalali;

pub use date::{localize_update_time, try_localize_update_time, DateError};
pub use jalali::gregorian_to_jalali;

/// Jalali month names, Farvardin through Esfand.
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Replace Western Arabic digits with Persian digit glyphs.
///
/// Non-digit characters pass through unchanged, so the mapping is
/// idempotent on its own output.
#[must_use]
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                // Persian digits start at U+06F0.
                char::from_u32(0x06F0 + (c as u32 - '0' as u32)).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_persian_glyphs() {
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
    }

    #[test]
    fn non_digits_pass_through() {
        assert_eq!(to_persian_digits("12:34 abc تومان"), "۱۲:۳۴ abc تومان");
        assert_eq!(to_persian_digits(""), "");
    }

    #[test]
    fn localization_is_idempotent() {
        let once = to_persian_digits("1,234,567");
        let twice = to_persian_digits(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn month_table_is_complete() {
        assert_eq!(PERSIAN_MONTHS.len(), 12);
        assert_eq!(PERSIAN_MONTHS[0], "فروردین");
        assert_eq!(PERSIAN_MONTHS[11], "اسفند");
    }
}
