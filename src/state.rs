//! Mutable per-stream state threaded through the header state machine.
//!
//! A single input stream may concatenate several logs, each opening with
//! its own header block. The separator, column selection and time flags
//! are re-derived from every block; the header bookkeeping spans the whole
//! stream.

use crate::columns::ColumnSelection;
use crate::separator::DEFAULT_SEPARATOR;

/// Header blocks are counted up to this value and no further.
const MAX_HEADERS_SEEN: u8 = 2;

/// State of the current run.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Separator between fields of incoming lines.
    pub input_sep: u8,
    /// Separator written between output fields.
    pub output_sep: u8,
    /// Active column selection from the latest `#fields` header.
    pub selection: ColumnSelection,
    /// `time`-typed flags for positions `0..idx_range`, when converting.
    pub time_cols: Vec<bool>,
    /// Header blocks seen so far, saturating at two.
    pub headers_seen: u8,
    /// Whether the previous line was a header line.
    pub prev_line_was_header: bool,
    /// Whether the previous header line was a `#fields` line.
    pub prev_was_fields_line: bool,
    ofs_override: Option<u8>,
}

impl RunState {
    pub fn new(ofs_override: Option<u8>) -> Self {
        Self {
            input_sep: DEFAULT_SEPARATOR,
            output_sep: ofs_override.unwrap_or(DEFAULT_SEPARATOR),
            selection: ColumnSelection::default(),
            time_cols: Vec::new(),
            headers_seen: 0,
            prev_line_was_header: false,
            prev_was_fields_line: false,
            ofs_override,
        }
    }

    /// Switch to a newly declared input separator.
    ///
    /// The output separator follows it unless an override is configured.
    pub fn set_separator(&mut self, sep: u8) {
        self.input_sep = sep;
        self.output_sep = self.ofs_override.unwrap_or(sep);
    }

    /// Record a header line; a header after data opens a new block.
    pub fn enter_header(&mut self) {
        if !self.prev_line_was_header {
            self.prev_line_was_header = true;
            if self.headers_seen < MAX_HEADERS_SEEN {
                self.headers_seen += 1;
            }
        }
    }

    /// Record a data line.
    pub fn enter_body(&mut self) {
        self.prev_line_was_header = false;
    }

    /// Minimum number of fields a data line must carry.
    pub const fn idx_range(&self) -> usize {
        self.selection.idx_range
    }

    /// Whether output position `idx` holds a `time` column.
    pub fn is_time_col(&self, idx: usize) -> bool {
        self.time_cols.get(idx).copied().unwrap_or(false)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new(None)
    }
}
