//! Configuration management with TOML file support.
//!
//! Merges settings from four sources (highest precedence first):
//! 1. CLI flags
//! 2. Environment (`ZEEK_CUT_TIMEFMT`, legacy `BRO_CUT_TIMEFMT`)
//! 3. Config file (`~/.config/zeek-cut/config.toml` or `$XDG_CONFIG_HOME/zeek-cut/config.toml`)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, parse_ofs_arg};
use crate::error::CutError;

/// Default strftime template for converted timestamps.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Environment variable holding the default time format.
pub const TIME_FORMAT_ENV: &str = "ZEEK_CUT_TIMEFMT";

/// Older name of [`TIME_FORMAT_ENV`], read when the new one is unset.
pub const LEGACY_TIME_FORMAT_ENV: &str = "BRO_CUT_TIMEFMT";

/// Which header blocks are copied to the output.
///
/// Ordered so that a header block is shown while the number of blocks seen
/// so far is at most the mode's [`threshold`](Self::threshold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HeaderMode {
    /// Never show header lines.
    #[default]
    None,
    /// Show the first header block only.
    First,
    /// Show every header block.
    All,
}

impl HeaderMode {
    pub const fn threshold(self) -> u8 {
        match self {
            Self::None => 0,
            Self::First => 1,
            Self::All => 2,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "first" => Some(Self::First),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Timestamp conversion applied to `time` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeConversion {
    #[default]
    Off,
    Local,
    Utc,
}

/// Runtime options, constant for the whole run.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Which header blocks to display.
    pub header_mode: HeaderMode,
    /// Output every column except the requested ones.
    pub negate: bool,
    /// Timestamp conversion mode.
    pub time_conversion: TimeConversion,
    /// Requested column names in output order; empty selects all.
    pub columns: Vec<String>,
    /// Output separator override; `None` reuses the log's own separator.
    pub output_separator: Option<u8>,
    /// strftime template for converted timestamps.
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_mode: HeaderMode::None,
            negate: false,
            time_conversion: TimeConversion::Off,
            columns: Vec::new(),
            output_separator: None,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > environment > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, CutError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config)?;
        }

        if let Some(format) = env_time_format() {
            config.time_format = format;
        }

        // CLI overrides
        if cli.first_header {
            config.header_mode = HeaderMode::First;
        } else if cli.all_headers {
            config.header_mode = HeaderMode::All;
        }

        config.negate = cli.negate;
        config.columns.clone_from(&cli.columns);

        if cli.ofs.is_some() {
            config.output_separator = cli.ofs;
        }

        if cli.local_time {
            config.time_conversion = TimeConversion::Local;
        } else if cli.utc_time {
            config.time_conversion = TimeConversion::Utc;
        } else if let Some(ref format) = cli.local_time_format {
            config.time_conversion = TimeConversion::Local;
            config.time_format.clone_from(format);
        } else if let Some(ref format) = cli.utc_time_format {
            config.time_conversion = TimeConversion::Utc;
            config.time_format.clone_from(format);
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/zeek-cut/config.toml` or `~/.config/zeek-cut/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("zeek-cut").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("zeek-cut")
                .join("config.toml")
        } else {
            PathBuf::from(".config/zeek-cut/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), CutError> {
        if let Some(headers) = file.headers {
            self.header_mode = HeaderMode::from_name(&headers).ok_or_else(|| {
                CutError::Config(format!(
                    "invalid headers mode '{headers}': expected one of none, first, all"
                ))
            })?;
        }

        if let Some(format) = file.time_format {
            self.time_format = format;
        }

        if let Some(ofs) = file.output_separator {
            self.output_separator = Some(parse_ofs_arg(&ofs).map_err(CutError::Config)?);
        }

        Ok(())
    }
}

/// Time format from the environment, preferring the current variable name.
fn env_time_format() -> Option<String> {
    [TIME_FORMAT_ENV, LEGACY_TIME_FORMAT_ENV]
        .iter()
        .find_map(|name| std::env::var(name).ok())
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    headers: Option<String>,
    time_format: Option<String>,
    output_separator: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, CutError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CutError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
