//! Frame rate formatting

use crate::error::{MviewError, MviewResult};

/// Broadcast rates that read better as their conventional names
const NTSC_RATES: &[(u64, u64, &str)] = &[
    (24000, 1001, "23.976"),
    (30000, 1001, "29.97"),
    (60000, 1001, "59.94"),
];

/// Significant digits used for the general numeric form
const SIGNIFICANT_DIGITS: i32 = 6;

/// Format an average frame rate for display
///
/// Rational input (`"N/D"`) is reduced to a decimal string. `Ok(None)` means
/// the rate is not applicable (`0/0`, reported for still images and cover
/// art) and the caller should show the stream as static. Anything that is not
/// a fraction is passed through unchanged.
pub fn format_framerate(rate: &str) -> MviewResult<Option<String>> {
    let Some((numerator, denominator)) = rate.split_once('/') else {
        return Ok(Some(rate.to_string()));
    };

    let numerator: u64 = numerator
        .trim()
        .parse()
        .map_err(|_| MviewError::invalid_number("avg_frame_rate", rate))?;
    let denominator: u64 = denominator
        .trim()
        .parse()
        .map_err(|_| MviewError::invalid_number("avg_frame_rate", rate))?;

    if denominator == 0 {
        return Ok(None);
    }

    if let Some((_, _, name)) = NTSC_RATES
        .iter()
        .find(|(n, d, _)| *n == numerator && *d == denominator)
    {
        return Ok(Some((*name).to_string()));
    }

    Ok(Some(format_general(numerator as f64 / denominator as f64)))
}

/// Shortest general representation with six significant digits, like `%g`
fn format_general(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let precision = (SIGNIFICANT_DIGITS - 1) as usize;
    let scientific = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
