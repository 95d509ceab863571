//! Error types for dayn
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`
//! at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dayn operations
pub type DaynResult<T> = Result<T, DaynError>;

/// Main error type for dayn operations
#[derive(Error, Debug)]
pub enum DaynError {
    /// Stub template missing at its expected path
    #[error("template not found at {path} - create it or pass --template")]
    TemplateNotFound { path: PathBuf },

    /// No repository markers found walking up from the start directory
    #[error("no puzzle repository found above {start} - run inside the repo or pass --root")]
    RepoNotFound { start: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
