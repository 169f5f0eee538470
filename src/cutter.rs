//! The sequential header/body state machine driving a run.
//!
//! Every line is classified as a header or data line. Header lines update
//! the [`RunState`] (separator, column selection, time columns) and are
//! echoed according to the header display mode; data lines are projected
//! onto the selected columns.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::columns::ColumnSelection;
use crate::config::Config;
use crate::error::CutError;
use crate::header::{self, HeaderLine};
use crate::projector::{LineRole, project_line, split_fields};
use crate::separator::parse_separator;
use crate::state::RunState;
use crate::timestamp::{TimeFormatter, detect_time_columns};

/// Line-at-a-time column extractor for one input stream.
#[derive(Debug)]
pub struct Cutter<'a> {
    config: &'a Config,
    state: RunState,
    time: Option<TimeFormatter>,
}

impl<'a> Cutter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            state: RunState::new(config.output_separator),
            time: TimeFormatter::new(config.time_conversion, &config.time_format),
        }
    }

    /// Current run state.
    pub const fn state(&self) -> &RunState {
        &self.state
    }

    /// Process one line (without its trailing newline).
    ///
    /// Returns `true` when `out` received a line to emit. Short lines are
    /// reported and skipped; only header ordering violations fail.
    pub fn process_line(&mut self, line: &[u8], out: &mut Vec<u8>) -> Result<bool, CutError> {
        let Some(kind) = header::classify(line, self.state.input_sep) else {
            if self.state.prev_was_fields_line {
                return Err(CutError::MissingTypesHeader);
            }
            self.state.enter_body();
            return Ok(self.project(line, LineRole::Data, out));
        };

        if self.state.prev_was_fields_line && !matches!(kind, HeaderLine::Types(_)) {
            return Err(CutError::MissingTypesHeader);
        }

        self.state.enter_header();

        let role = match kind {
            HeaderLine::Separator(spec) => {
                if let Some(sep) = parse_separator(spec) {
                    self.state.set_separator(sep);
                }
                None
            }
            HeaderLine::Fields(names) => {
                self.state.prev_was_fields_line = true;
                let declared: Vec<&[u8]> = split_fields(names, self.state.input_sep).collect();
                self.state.selection =
                    ColumnSelection::resolve(&declared, &self.config.columns, self.config.negate);
                debug!(
                    num_fields = self.state.selection.num_fields,
                    idx_range = self.state.selection.idx_range,
                    "resolved columns"
                );
                Some(LineRole::Fields)
            }
            HeaderLine::Types(types) => {
                if !self.state.prev_was_fields_line {
                    return Err(CutError::MissingFieldsHeader);
                }
                self.state.prev_was_fields_line = false;
                if self.time.is_some() {
                    let declared: Vec<&[u8]> = split_fields(types, self.state.input_sep).collect();
                    self.state.time_cols = detect_time_columns(&declared, self.state.idx_range())?;
                }
                Some(LineRole::Types)
            }
            HeaderLine::Other => None,
        };

        if self.state.headers_seen > self.config.header_mode.threshold() {
            return Ok(false);
        }

        match role {
            Some(role) => Ok(self.project(line, role, out)),
            None => {
                out.extend_from_slice(line);
                Ok(true)
            }
        }
    }

    fn project(&self, line: &[u8], role: LineRole, out: &mut Vec<u8>) -> bool {
        match project_line(line, role, &self.state, self.time.as_ref(), out) {
            Ok(()) => true,
            Err(short) => {
                warn!(
                    required = short.required,
                    found = short.found,
                    "skipping log line (not enough fields)"
                );
                false
            }
        }
    }
}

/// Read every line of `input`, writing the extracted columns to `output`.
///
/// Stops at the first fatal condition. The output is not flushed.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &Config,
) -> Result<(), CutError> {
    let mut cutter = Cutter::new(config);
    let mut line = Vec::new();
    let mut out = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }

        out.clear();
        if cutter.process_line(&line, &mut out)? {
            out.push(b'\n');
            output.write_all(&out)?;
        }
    }

    Ok(())
}

/// Convenience wrapper running over an in-memory buffer.
pub fn cut_bytes(input: &[u8], config: &Config) -> Result<Vec<u8>, CutError> {
    let mut output = Vec::new();
    run(io::Cursor::new(input), &mut output, config)?;
    Ok(output)
}
