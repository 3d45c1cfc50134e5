//! Error types for system queries.

use thiserror::Error;

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Failure of an OS or hardware query. Probes never surface these; each one
/// is mapped onto a [`Verdict`](super::Verdict).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// Registry key could not be opened
    #[error("cannot open registry key {path}: status {code}")]
    RegistryOpen { path: String, code: u32 },

    /// Key metadata could not be queried
    #[error("cannot query registry key {path}: status {code}")]
    RegistryQuery { path: String, code: u32 },

    /// Cursor position query failed
    #[error("cursor position unavailable: {0}")]
    Cursor(String),

    /// Query has no implementation on this platform
    #[error("{0} is not available on this platform")]
    Unsupported(&'static str),
}

impl ProbeError {
    pub fn registry_open(path: impl Into<String>, code: u32) -> Self {
        Self::RegistryOpen {
            path: path.into(),
            code,
        }
    }

    pub fn registry_query(path: impl Into<String>, code: u32) -> Self {
        Self::RegistryQuery {
            path: path.into(),
            code,
        }
    }
}
