//! Parsing, formatting and validation of "HH:MM:SS" duration text.
//!
//! Two levels of strictness exist on purpose. [`parse_hms`] accepts any
//! three numeric fields (so "00:99:00" starts a 99-minute countdown),
//! while [`validate_preset`] additionally range-checks each field before
//! a value may be persisted to a preset slot.

use crate::error::DurationError;

/// Canonical zero display, used for the main field and empty preset slots.
pub const ZERO_HMS: &str = "00:00:00";

/// Splits `text` on ':' into exactly three numeric fields.
fn split_fields(text: &str) -> Result<[i64; 3], DurationError> {
    let mut fields = [0i64; 3];
    let mut count = 0;
    for part in text.split(':') {
        if count == 3 {
            return Err(DurationError::InvalidFormat);
        }
        fields[count] = part
            .trim()
            .parse()
            .map_err(|_| DurationError::InvalidFormat)?;
        count += 1;
    }
    if count != 3 {
        return Err(DurationError::InvalidFormat);
    }
    Ok(fields)
}

/// Parses "HH:MM:SS" into a total second count.
///
/// Fields may be unpadded ("1:2:3") and may exceed their usual carry
/// ranges; no range check happens here. Returns
/// [`DurationError::InvalidFormat`] when the text does not have exactly
/// three ':'-separated numeric fields.
pub fn parse_hms(text: &str) -> Result<i64, DurationError> {
    let [hours, minutes, seconds] = split_fields(text)?;
    Ok(hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds))
}

/// Formats a second count as zero-padded "HH:MM:SS".
///
/// Negative input clamps to zero; hours wider than two digits are
/// printed in full.
pub fn format_hms(total_secs: i64) -> String {
    let total = total_secs.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Validates preset text and returns its normalized zero-padded form.
///
/// Presets are stricter than the main field: hours must be 0-23 and
/// minutes/seconds 0-59. "1:2:3" normalizes to "01:02:03".
pub fn validate_preset(text: &str) -> Result<String, DurationError> {
    let [hours, minutes, seconds] = split_fields(text)?;
    check_range("hours", hours, 23)?;
    check_range("minutes", minutes, 59)?;
    check_range("seconds", seconds, 59)?;
    Ok(format!("{hours:02}:{minutes:02}:{seconds:02}"))
}

fn check_range(field: &'static str, value: i64, max: u8) -> Result<(), DurationError> {
    if value < 0 || value > i64::from(max) {
        return Err(DurationError::OutOfRange { field, value, max });
    }
    Ok(())
}
