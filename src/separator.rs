//! Field separator declarations.
//!
//! A `#separator` header carries either a literal character or a `\xHH`
//! escape. Resolution is permissive: a malformed escape falls back to the
//! first raw byte instead of failing the run.

/// Default field separator before any `#separator` header is seen.
pub const DEFAULT_SEPARATOR: u8 = b'\t';

/// Resolve a separator specification into a single byte.
///
/// Returns `None` only for an empty specification.
pub fn parse_separator(spec: &[u8]) -> Option<u8> {
    if let Some(hex) = spec.strip_prefix(b"\\x")
        && let Some(byte) = parse_hex_byte(hex)
    {
        return Some(byte);
    }
    spec.first().copied()
}

/// Parse the two hex digits at the start of `digits`.
fn parse_hex_byte(digits: &[u8]) -> Option<u8> {
    let [hi, lo, ..] = digits else {
        return None;
    };
    let hi = (*hi as char).to_digit(16)?;
    let lo = (*lo as char).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}
