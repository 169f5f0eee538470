//! Re-slicing of one line into the selected output columns.
//!
//! Fields are split on the input separator with no quoting or escaping.
//! Header lines (`#fields`, `#types`) carry their tag as an extra leading
//! field, which is always written first.

use crate::state::RunState;
use crate::timestamp::{CONVERTED_TYPE, TIME_TYPE, TimeFormatter};

/// The kind of line being projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// A data record.
    Data,
    /// The `#fields` header.
    Fields,
    /// The `#types` header.
    Types,
}

impl LineRole {
    const fn is_header(self) -> bool {
        !matches!(self, Self::Data)
    }
}

/// A line with fewer fields than the active selection requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortLine {
    pub required: usize,
    pub found: usize,
}

/// Project `line` onto the selected columns, appending the result to `out`.
///
/// `time` is the active formatter when time conversion is on: data fields
/// in `time` columns are rendered through it, and `time` entries of a
/// `#types` header are rewritten to `string`.
///
/// Nothing is written when the line is short.
pub fn project_line(
    line: &[u8],
    role: LineRole,
    state: &RunState,
    time: Option<&TimeFormatter>,
    out: &mut Vec<u8>,
) -> Result<(), ShortLine> {
    let offset = usize::from(role.is_header());
    let required = state.idx_range() + offset;

    let fields: Vec<&[u8]> = split_fields(line, state.input_sep).take(required).collect();
    if fields.len() < required {
        return Err(ShortLine {
            required,
            found: fields.len(),
        });
    }

    let mut need_sep = false;
    if role.is_header() {
        out.extend_from_slice(fields[0]);
        need_sep = true;
    }

    for out_index in &state.selection.out_indexes {
        if need_sep {
            out.push(state.output_sep);
        }
        need_sep = true;

        let Some(idx) = *out_index else {
            continue;
        };
        let field = fields[idx + offset];

        match (role, time) {
            (LineRole::Data, Some(formatter)) if state.is_time_col(idx) => {
                match formatter.format_field(field) {
                    Some(rendered) => out.extend_from_slice(rendered.as_bytes()),
                    None => out.extend_from_slice(field),
                }
            }
            (LineRole::Types, Some(_)) if field == TIME_TYPE => {
                out.extend_from_slice(CONVERTED_TYPE);
            }
            _ => out.extend_from_slice(field),
        }
    }

    Ok(())
}

/// Split `bytes` on every occurrence of `sep`.
pub fn split_fields(bytes: &[u8], sep: u8) -> impl Iterator<Item = &[u8]> {
    bytes.split(move |&b| b == sep)
}
