//! Classification of `#`-prefixed log header lines.

/// First byte of every header line.
pub const HEADER_MARKER: u8 = b'#';

const SEPARATOR_PREFIX: &[u8] = b"#separator ";
const FIELDS_TAG: &[u8] = b"#fields";
const TYPES_TAG: &[u8] = b"#types";

/// The kind of a header line, with its payload where one matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    /// `#separator <spec>`; carries the separator specification.
    Separator(&'a [u8]),
    /// `#fields`; carries the field names joined by the input separator.
    Fields(&'a [u8]),
    /// `#types`; carries the type names joined by the input separator.
    Types(&'a [u8]),
    /// Any other header line (`#path`, `#open`, `#close`, ...).
    Other,
}

/// Classify `line`, or return `None` when it is a data line.
///
/// The `#fields` and `#types` tags are the first field of their line, so
/// they are recognised by splitting on the current input separator.
pub fn classify(line: &[u8], sep: u8) -> Option<HeaderLine<'_>> {
    if line.first() != Some(&HEADER_MARKER) {
        return None;
    }

    if let Some(spec) = line.strip_prefix(SEPARATOR_PREFIX) {
        return Some(HeaderLine::Separator(spec));
    }

    let (tag, payload) = match line.iter().position(|&b| b == sep) {
        Some(pos) => (&line[..pos], &line[pos + 1..]),
        None => (line, &line[line.len()..]),
    };

    Some(match tag {
        FIELDS_TAG => HeaderLine::Fields(payload),
        TYPES_TAG => HeaderLine::Types(payload),
        _ => HeaderLine::Other,
    })
}
