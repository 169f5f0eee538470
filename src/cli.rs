//! Command-line argument definitions for `zeek-cut`.
//!
//! Uses [`clap`] derive macros for argument parsing. Short flags follow the
//! classic `bro-cut` letters so existing scripts keep working.

use clap::Parser;
use clap_complete::Shell;

/// Extract the given columns from a Zeek ASCII log on standard input.
///
/// If no columns are given, all are selected. By default, header blocks
/// are not included in the output.
#[derive(Debug, Parser)]
#[command(
    name = "zeek-cut",
    version,
    about,
    long_about = None,
    after_help = "For time conversion with -d or -u, the format string can also be set \
                  with the ZEEK_CUT_TIMEFMT environment variable."
)]
pub struct Cli {
    /// Include the first header block in the output.
    #[arg(short = 'c', conflicts_with = "all_headers")]
    pub first_header: bool,

    /// Include all header blocks in the output.
    #[arg(short = 'C')]
    pub all_headers: bool,

    /// Print all fields *except* those specified.
    #[arg(short = 'n')]
    pub negate: bool,

    /// Output field separator (a single character).
    #[arg(short = 'F', value_name = "OFS", value_parser = parse_ofs_arg)]
    pub ofs: Option<u8>,

    /// Convert time values into human-readable local time.
    #[arg(short = 'd', group = "timeconv")]
    pub local_time: bool,

    /// Like -d, with a strftime format for the converted time.
    #[arg(short = 'D', value_name = "FMT", group = "timeconv")]
    pub local_time_format: Option<String>,

    /// Like -d, but print timestamps in UTC.
    #[arg(short = 'u', group = "timeconv")]
    pub utc_time: bool,

    /// Like -D, but print timestamps in UTC.
    #[arg(short = 'U', value_name = "FMT", group = "timeconv")]
    pub utc_time_format: Option<String>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Column names to extract, in output order.
    pub columns: Vec<String>,
}

/// Parse an output separator argument; it must be exactly one byte.
pub(crate) fn parse_ofs_arg(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] => Ok(*b),
        _ => Err("field separator must be a single character".to_string()),
    }
}
