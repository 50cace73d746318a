//! Time formatting utilities

use crate::error::{MviewError, MviewResult};

/// Digits kept after the decimal point (microseconds)
const FRACTION_DIGITS: usize = 6;

/// Format a decimal-seconds string as `HH:MM:SS.ffffff`
///
/// Hours are not wrapped at 24. The fractional digits are copied from the
/// input as written, padded or cut to six places, never rounded.
pub fn format_time(seconds: &str) -> MviewResult<String> {
    let (whole, fraction) = match seconds.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (seconds, ""),
    };

    let whole: u64 = whole
        .parse()
        .map_err(|_| MviewError::invalid_number("duration", seconds))?;
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MviewError::invalid_number("duration", seconds));
    }

    let hours = whole / 3600;
    let minutes = (whole / 60) % 60;
    let secs = whole % 60;

    let fraction: String = fraction.chars().take(FRACTION_DIGITS).collect();

    Ok(format!(
        "{:02}:{:02}:{:02}.{:0<width$}",
        hours,
        minutes,
        secs,
        fraction,
        width = FRACTION_DIGITS
    ))
}

/// Trim a chapter start time for compact display
///
/// Trailing zeros go first, then a dangling decimal point: `"90.500000"`
/// becomes `"90.5"` and `"300.000000"` becomes `"300"`.
pub fn trim_start_time(start_time: &str) -> &str {
    start_time.trim_end_matches('0').trim_end_matches('.')
}
