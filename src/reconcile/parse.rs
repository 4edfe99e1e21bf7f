//! Time parsing and canonicalization.
//!
//! The time-clock feed mixes several date/time string encodings: plain
//! `YYYY-MM-DD`, slash-delimited `DD/MM/YYYY`, and ISO datetimes with
//! optional zone designators, offsets, and fractional seconds. This module
//! normalizes all of them into one canonical `(YYYY-MM-DD, HH:MM:SS)` shape.
//!
//! A parse failure is absence of data, never a fault: callers must treat a
//! `None` as "no punch", not as midnight.

use chrono::{NaiveDate, NaiveTime};

/// Canonicalizes a raw date string into `YYYY-MM-DD`.
///
/// Rules:
/// - any time component after `T` or a space is stripped;
/// - slash-delimited input is interpreted as `DD/MM/YYYY` and re-emitted;
/// - anything else is truncated to its first 10 characters.
///
/// Returns `None` when no plausible date remains. Canonicalization is
/// idempotent: feeding the output back in yields the same output.
///
/// # Example
///
/// ```
/// use attendance_engine::reconcile::canonical_date;
///
/// assert_eq!(
///     canonical_date("2026-01-12T07:15:00Z"),
///     Some("2026-01-12".to_string())
/// );
/// assert_eq!(
///     canonical_date("12/01/2026"),
///     Some("2026-01-12".to_string())
/// );
/// assert_eq!(canonical_date("garbage"), None);
/// ```
pub fn canonical_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let head = trimmed.split(['T', ' ']).next()?;

    if head.contains('/') {
        let mut parts = head.split('/');
        let day = parts.next()?;
        let month = parts.next()?;
        let year = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        if year.len() != 4 || !is_digits(year) || !is_digits(day) || !is_digits(month) {
            return None;
        }
        return Some(format!("{year}-{month:0>2}-{day:0>2}"));
    }

    let truncated: String = head.chars().take(10).collect();
    if truncated.chars().count() == 10 {
        Some(truncated)
    } else {
        None
    }
}

/// Canonicalizes a raw time string into `HH:MM:SS`.
///
/// A leading date prefix (before `T` or a space) is stripped, then trailing
/// `Z`, `+offset`, `-offset` (only when the dash sits after position 2, so a
/// bare `HH-MM` is not eaten), and fractional-seconds suffixes are removed.
/// The first `H{1,2}:MM[:SS]` pattern in what remains is extracted; missing
/// seconds default to `00` and all components are zero-padded to two digits.
///
/// # Example
///
/// ```
/// use attendance_engine::reconcile::canonical_time;
///
/// assert_eq!(
///     canonical_time("2026-01-12T7:15:00.250-05:00"),
///     Some("07:15:00".to_string())
/// );
/// assert_eq!(canonical_time("9:05"), Some("09:05:00".to_string()));
/// assert_eq!(canonical_time("no time here"), None);
/// ```
pub fn canonical_time(raw: &str) -> Option<String> {
    let mut s = raw.trim();

    // A date prefix carries dashes or slashes; a bare time does not.
    if let Some(idx) = s.find(['T', ' ']) {
        let prefix = &s[..idx];
        if prefix.contains('-') || prefix.contains('/') {
            s = &s[idx + 1..];
        }
    }

    s = s.trim().strip_suffix('Z').unwrap_or(s);
    if let Some(idx) = s.find('+') {
        s = &s[..idx];
    }
    if let Some(idx) = s.rfind('-') {
        if idx > 2 {
            s = &s[..idx];
        }
    }
    if let Some(idx) = s.find('.') {
        s = &s[..idx];
    }

    extract_hms(s.trim())
}

/// Parses a raw date string into a typed [`NaiveDate`].
///
/// Applies [`canonical_date`] first, then validates the calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let canonical = canonical_date(raw)?;
    NaiveDate::parse_from_str(&canonical, "%Y-%m-%d").ok()
}

/// Parses a raw time string into a typed [`NaiveTime`].
///
/// Applies [`canonical_time`] first, then validates the clock time.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let canonical = canonical_time(raw)?;
    NaiveTime::parse_from_str(&canonical, "%H:%M:%S").ok()
}

/// Extracts the first `H{1,2}:MM[:SS]` pattern and zero-pads it.
fn extract_hms(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut i = 0;
    while i < len {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        // Prefer a two-digit hour, fall back to one digit.
        let colon = if i + 2 < len && bytes[i + 1].is_ascii_digit() && bytes[i + 2] == b':' {
            i + 2
        } else if i + 1 < len && bytes[i + 1] == b':' {
            i + 1
        } else {
            i += 1;
            continue;
        };

        if colon + 2 >= len
            || !bytes[colon + 1].is_ascii_digit()
            || !bytes[colon + 2].is_ascii_digit()
        {
            i += 1;
            continue;
        }

        let hour = &s[i..colon];
        let minute = &s[colon + 1..colon + 3];

        let after_minute = colon + 3;
        let second = if after_minute + 2 < len
            && bytes[after_minute] == b':'
            && bytes[after_minute + 1].is_ascii_digit()
            && bytes[after_minute + 2].is_ascii_digit()
        {
            &s[after_minute + 1..after_minute + 3]
        } else {
            "00"
        };

        return Some(format!("{hour:0>2}:{minute}:{second}"));
    }

    None
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
