//! Formatting utilities for dates, balances, and truncated identifiers.
//!
//! Date and time labels are computed in pure Rust (UTC) so the grouping
//! logic stays testable off-browser.

use crate::config::display;

/// Sentinel label for transactions without a usable timestamp.
pub const UNKNOWN_DATE: &str = "Unknown Date";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a millisecond timestamp as a calendar date ("January 1, 1970").
///
/// A missing timestamp maps to the fixed [`UNKNOWN_DATE`] sentinel.
pub fn format_date_label(timestamp_ms: Option<u64>) -> String {
    match timestamp_ms {
        None => UNKNOWN_DATE.to_string(),
        Some(ms) => {
            let (year, month, day, _, _) = civil_from_ms(ms);
            format!("{} {}, {}", MONTHS[month - 1], day, year)
        }
    }
}

/// Format a millisecond timestamp as a time of day ("HH:MM", 24-hour UTC).
///
/// A missing timestamp maps to the empty string.
pub fn format_time_label(timestamp_ms: Option<u64>) -> String {
    match timestamp_ms {
        None => String::new(),
        Some(ms) => {
            let (_, _, _, hour, minute) = civil_from_ms(ms);
            format!("{:02}:{:02}", hour, minute)
        }
    }
}

/// Break a millisecond timestamp into (year, month, day, hour, minute), UTC.
///
/// Properly calculates year/month/day accounting for leap years.
fn civil_from_ms(ms: u64) -> (i64, usize, i64, u64, u64) {
    let secs = ms / 1000;
    let days = secs / 86400;

    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    let hour = (secs % 86400) / 3600;
    let minute = (secs % 3600) / 60;
    (year, month, day, hour, minute)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Format an integer balance with thousands separators ("1,234,567").
pub fn format_balance(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Truncate an account address for display (0x1234...5678).
pub fn truncate_address(address: &str) -> String {
    truncate_middle(
        address,
        display::ADDRESS_PREFIX_LEN,
        display::ADDRESS_SUFFIX_LEN,
    )
}

/// Truncate a transaction digest for display (first 8, last 6).
pub fn truncate_digest(digest: &str) -> String {
    truncate_middle(
        digest,
        display::DIGEST_PREFIX_LEN,
        display::DIGEST_SUFFIX_LEN,
    )
}

/// Keep the first `prefix` and last `suffix` characters, eliding the middle.
///
/// Inputs are ASCII identifiers (hex addresses, base58 digests); short
/// strings pass through unchanged.
fn truncate_middle(s: &str, prefix: usize, suffix: usize) -> String {
    if s.len() > prefix + suffix {
        format!("{}...{}", &s[..prefix], &s[s.len() - suffix..])
    } else {
        s.to_string()
    }
}
