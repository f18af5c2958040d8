//! Arithmetic Gregorian to Jalali (solar Hijri) conversion.

/// Cumulative day counts at the start of each Gregorian month.
const GREGORIAN_MONTH_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert a Gregorian calendar date to Jalali `(year, month, day)`.
///
/// Uses the 33-year-cycle civil algorithm, which matches the official
/// Iranian calendar for the years a price feed will ever report.
#[must_use]
pub fn gregorian_to_jalali(gy: i32, gm: u32, gd: u32) -> (i32, u32, u32) {
    let gy = i64::from(gy);
    let gy2 = if gm > 2 { gy + 1 } else { gy };

    let mut days = 355_666
        + 365 * gy
        + (gy2 + 3) / 4
        - (gy2 + 99) / 100
        + (gy2 + 399) / 400
        + i64::from(gd)
        + GREGORIAN_MONTH_DAYS[(gm - 1) as usize];

    let mut jy = -1595 + 33 * (days / 12_053);
    days %= 12_053;

    jy += 4 * (days / 1461);
    days %= 1461;

    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy as i32, jm as u32, jd as u32)
}
