//! Error types for the `zeek-cut` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Only conditions that
//! end the run live here; a short line or an oversized timestamp is a
//! diagnostic, not an error.

use thiserror::Error;

/// Errors that can occur in `zeek-cut`.
///
/// Maps to exit codes: [`Io`](Self::Io) → exit 2, everything else → exit 1.
#[derive(Debug, Error)]
pub enum CutError {
    /// Configuration error (invalid flag value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A `#types` header without a `#fields` header right before it.
    #[error("bad log header (missing #fields line)")]
    MissingFieldsHeader,

    /// A `#fields` header not followed by a `#types` header.
    #[error("bad log header (missing #types line)")]
    MissingTypesHeader,

    /// The `#types` header declares fewer types than the selected columns need.
    #[error("log header does not have enough fields (need {required}, found {found})")]
    ShortTypesHeader { required: usize, found: usize },
}

impl CutError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 2,
            _ => 1,
        }
    }
}
