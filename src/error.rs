use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mtf2json operations.
///
/// Only the I/O layer produces errors; parsing itself is best-effort and
/// never fails on malformed input.
#[derive(Error, Diagnostic, Debug)]
pub enum MtfError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mtf2json::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mtf2json::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("JSON serialization error: {0}")]
    #[diagnostic(code(mtf2json::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MtfError>;
