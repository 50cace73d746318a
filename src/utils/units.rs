//! Byte size and bit rate formatting

use crate::error::{MviewError, MviewResult};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// Size units, largest first
const SIZE_UNITS: &[(u64, &str)] = &[(GIB, "GiB"), (MIB, "MiB"), (KIB, "KiB")];

/// Bit rate units, largest first
const BITRATE_UNITS: &[(u64, &str)] = &[(MIB, "mbps"), (KIB, "kbps")];

/// Format a byte count such as `"2048"` as `"2.00 KiB"`
pub fn format_size(bytes: &str) -> MviewResult<String> {
    let value = parse_count("size", bytes)?;
    Ok(scale(value, SIZE_UNITS, "bytes"))
}

/// Format a bits-per-second count such as `"2048"` as `"2.00 kbps"`
pub fn format_bitrate(bits_per_second: &str) -> MviewResult<String> {
    let value = parse_count("bit_rate", bits_per_second)?;
    Ok(scale(value, BITRATE_UNITS, "bps"))
}

/// Express `value` in the largest unit it strictly exceeds
fn scale(value: u64, units: &[(u64, &str)], base_unit: &str) -> String {
    units
        .iter()
        .find(|(unit_size, _)| value > *unit_size)
        .map(|(unit_size, suffix)| format!("{:.2} {}", value as f64 / *unit_size as f64, suffix))
        .unwrap_or_else(|| format!("{} {}", value, base_unit))
}

fn parse_count(field: &str, raw: &str) -> MviewResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| MviewError::invalid_number(field, raw))
}
