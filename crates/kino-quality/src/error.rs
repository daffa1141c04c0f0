//! Error types for Kino Quality
//!
//! The synchronization and selection paths never fail. Errors only surface at
//! the edges: configuration, manifest loading, plugin activation and menu
//! activation from host input.

use thiserror::Error;

/// Result type alias for quality selector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Quality selector error types
#[derive(Error, Debug)]
pub enum Error {
    // Manifest errors
    #[error("Failed to parse manifest: {0}")]
    ManifestParse(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Host integration errors
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("Plugin already registered: {0}")]
    DuplicatePlugin(String),

    #[error("Menu entry {index} out of range ({len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("Invalid quality value: {0}")]
    InvalidQuality(String),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a manifest parse error
    pub fn manifest(msg: impl Into<String>) -> Self {
        Error::ManifestParse(msg.into())
    }

    /// Returns true if the host can retry with different input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EntryOutOfRange { .. } | Error::InvalidQuality(_)
        )
    }

    /// Returns the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::ManifestParse(_) => "MANIFEST_PARSE",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::UnknownPlugin(_) => "UNKNOWN_PLUGIN",
            Error::DuplicatePlugin(_) => "DUPLICATE_PLUGIN",
            Error::EntryOutOfRange { .. } => "ENTRY_OUT_OF_RANGE",
            Error::InvalidQuality(_) => "INVALID_QUALITY",
            Error::Json(_) => "JSON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::manifest("bad").error_code(), "MANIFEST_PARSE");
        assert_eq!(
            Error::EntryOutOfRange { index: 4, len: 2 }.error_code(),
            "ENTRY_OUT_OF_RANGE"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::EntryOutOfRange { index: 1, len: 0 }.is_recoverable());
        assert!(Error::InvalidQuality("best".into()).is_recoverable());
        assert!(!Error::UnknownPlugin("x".into()).is_recoverable());
        assert!(!Error::manifest("bad").is_recoverable());
    }

    #[test]
    fn test_json_error_code() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.error_code(), "JSON");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_display() {
        let err = Error::EntryOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Menu entry 3 out of range (2 entries)");
    }
}
