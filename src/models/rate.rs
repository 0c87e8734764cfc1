//! Win-rate string parsing.
//!
//! Win rates are stored as display strings (`"54.3%"`, `"N/A"`). The
//! numeric value is only ever used for ordering; the original string is
//! what gets shown.

use tracing::debug;

/// Placeholder used by the dataset for heroes without a rate.
pub const RATE_NOT_AVAILABLE: &str = "N/A";

/// Parse a percentage string into a number for ranking.
///
/// Missing, empty, `"N/A"` and malformed input all yield `0.0`.
pub fn parse_rate(rate: Option<&str>) -> f64 {
    let Some(raw) = rate else {
        return 0.0;
    };
    if raw.is_empty() || raw == RATE_NOT_AVAILABLE {
        return 0.0;
    }

    let cleaned: String = raw.chars().filter(|c| *c != '%').collect();
    match leading_number(cleaned.trim()) {
        // Adding zero folds -0.0 into 0.0 so they rank as equal.
        Some(value) => value + 0.0,
        None => {
            debug!("Unparseable win rate {:?}, ranking as 0", raw);
            0.0
        }
    }
}

/// Parse the longest decimal prefix of `s`, ignoring whatever follows it.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
