//! Error handling for the lexes CLI.
//!
//! Every layer (config loading, translation, JSON encoding, I/O) reports
//! through one [`LexesCliError`] so `main` can map any failure to a
//! non-zero exit code with a single message on stderr.

use thiserror::Error;

/// Top-level error type for the `lexes` binary.
#[derive(Error, Debug)]
pub enum LexesCliError {
    /// A configuration file existed but could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The query translation pipeline reported an error.
    #[error(transparent)]
    Translate(#[from] lexes_util::TranslateError),

    /// Reading input, writing output, or loading a config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the translated document to JSON failed.
    #[error("json encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`LexesCliError`].
pub type Result<T> = std::result::Result<T, LexesCliError>;
