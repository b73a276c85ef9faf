//! Unified error types for ucontent.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while compiling or rendering templates.
#[derive(Error, Debug)]
pub enum UcontentError {
    // --- Templates ---

    /// The instrumented markup holds a different number of placeholder markers
    /// than the template declares dynamic slots.
    #[error("invalid template {template} (expected {expected} slots, found {found} markers)")]
    TemplateShape {
        template: String,
        expected: usize,
        found: usize,
    },

    /// `render` was called with a number of values that does not match the template.
    #[error("template {template} takes {expected} values, got {found}")]
    ValueCount {
        template: String,
        expected: usize,
        found: usize,
    },

    /// The placeholder marker pattern could not be built from the marker prefix.
    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    // --- Configuration ---

    /// The renderer configuration file was not found or could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A chunk kind name is not one of: `html`, `raw`, `css`, `js`.
    #[error("unknown chunk kind: {0} (supported: html, raw, css, js)")]
    UnknownKind(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors raised by pluggable collaborators (instrumenters).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, UcontentError>`.
pub type Result<T> = std::result::Result<T, UcontentError>;
