//! `zeek-cut` — Extract columns from Zeek-style delimited logs.
//!
//! This library provides the column-extraction engine behind the
//! `zeek-cut` CLI tool. Input logs describe themselves through `#`-prefixed
//! header lines declaring the field separator, the field names and their
//! types; the engine tracks those headers, selects (or excludes) columns by
//! name, and optionally renders `time` columns as formatted text.
//!
//! # Example
//!
//! ```
//! use zeek_cut::{Config, cut_bytes};
//!
//! let config = Config {
//!     columns: vec!["uid".to_string()],
//!     ..Config::default()
//! };
//! let log = b"#fields\tts\tuid\n#types\ttime\tstring\n1300475167.096535\tCXWv6p3arKYeMETxOg\n";
//!
//! let out = cut_bytes(log, &config).unwrap();
//! assert_eq!(out, b"CXWv6p3arKYeMETxOg\n");
//! ```

pub mod cli;
pub mod columns;
pub mod config;
pub mod cutter;
pub mod error;
pub mod header;
pub mod logging;
pub mod projector;
pub mod separator;
pub mod state;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use columns::ColumnSelection;
pub use config::{Config, HeaderMode, TimeConversion};
pub use cutter::{Cutter, cut_bytes, run};
pub use error::CutError;
pub use header::HeaderLine;
pub use projector::{LineRole, ShortLine, project_line};
pub use separator::parse_separator;
pub use state::RunState;
pub use timestamp::{TimeFormatter, detect_time_columns};
