//! Epoch timestamp conversion for `time`-typed columns.
//!
//! Zeek writes `time` values as seconds since the Unix epoch with a
//! fractional part (`1300475167.096535`). Only the integral seconds are
//! rendered; the result goes through a strftime-compatible template in
//! either the system zone or UTC.

use jiff::tz::TimeZone;
use tracing::warn;

use crate::config::TimeConversion;
use crate::error::CutError;

/// Declared type name that marks a timestamp column.
pub const TIME_TYPE: &[u8] = b"time";

/// Type name written in place of [`TIME_TYPE`] once values are converted.
pub const CONVERTED_TYPE: &[u8] = b"string";

/// Longest rendered timestamp, in bytes.
pub const MAX_TIMESTAMP_LEN: usize = 99;

/// Flag the `time`-typed positions among the first `idx_range` declared types.
///
/// Fails when the `#types` header declares fewer types than the active
/// column selection needs.
pub fn detect_time_columns(types: &[&[u8]], idx_range: usize) -> Result<Vec<bool>, CutError> {
    if types.len() < idx_range {
        return Err(CutError::ShortTypesHeader {
            required: idx_range,
            found: types.len(),
        });
    }
    Ok(types[..idx_range].iter().map(|t| *t == TIME_TYPE).collect())
}

/// Renders epoch-second fields with a fixed zone and template.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    zone: TimeZone,
    format: String,
}

impl TimeFormatter {
    /// Build a formatter for `mode`, or `None` when conversion is off.
    pub fn new(mode: TimeConversion, format: &str) -> Option<Self> {
        let zone = match mode {
            TimeConversion::Off => return None,
            TimeConversion::Local => TimeZone::system(),
            TimeConversion::Utc => TimeZone::UTC,
        };
        Some(Self {
            zone,
            format: format.to_string(),
        })
    }

    /// Convert a raw field into formatted text.
    ///
    /// Returns `None` when the field carries no leading integer or the
    /// value is outside the representable range; the caller then emits the
    /// field unchanged.
    pub fn format_field(&self, field: &[u8]) -> Option<String> {
        let secs = parse_epoch_seconds(field)?;
        let ts = jiff::Timestamp::from_second(secs).ok()?;
        let zoned = ts.to_zoned(self.zone.clone());

        let mut rendered = match jiff::fmt::strtime::format(self.format.as_bytes(), &zoned) {
            Ok(s) => s,
            Err(e) => {
                warn!(format = %self.format, "cannot format timestamp: {e}");
                return None;
            }
        };

        if rendered.len() > MAX_TIMESTAMP_LEN {
            let mut end = MAX_TIMESTAMP_LEN;
            while !rendered.is_char_boundary(end) {
                end -= 1;
            }
            rendered.truncate(end);
            warn!("truncating timestamp (too long)");
        }

        Some(rendered)
    }
}

/// Parse the leading signed integer of `field`, ignoring any fraction.
fn parse_epoch_seconds(field: &[u8]) -> Option<i64> {
    let (negative, digits) = match field {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, field),
    };

    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for &b in &digits[..len] {
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }
    Some(if negative { -value } else { value })
}
