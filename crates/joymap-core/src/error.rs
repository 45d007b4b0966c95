//! Error types for joymap-core

use thiserror::Error;

/// Result type alias using joymap-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Joymap
///
/// Every variant is a fatal precondition: it aborts the run before any
/// partial work. Skippable conditions (a filename that matches no grammar,
/// a malformed record file, a template with no hardware match) are handled
/// inside the scan loops and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Saved-games root not found
    #[error("Saved-games root not found: {path}")]
    SaveRootNotFound { path: String },

    /// Input directory (Config/Input) not found
    #[error("Input directory not found: {path}")]
    InputDirNotFound { path: String },

    /// Template extraction destination not found
    #[error("Destination directory not found: {path}")]
    DestinationNotFound { path: String },

    /// Template source directory not found
    #[error("Template directory not found: {path}")]
    TemplateDirNotFound { path: String },

    /// Fingerprint directory not found
    #[error("Fingerprint directory not found: {path}")]
    FingerprintDirNotFound { path: String },

    /// No fingerprint record matches the hostname
    #[error("No fingerprint found for hostname '{hostname}'")]
    FingerprintNotFound { hostname: String },

    /// Machine reported an empty hostname
    #[error("No machine hostname found")]
    EmptyHostname,

    /// Hardware UUID retrieval failed
    #[error("Failed to retrieve hardware UUID: {message}")]
    HardwareId { message: String },

    /// Fingerprint record carries an unsupported schema version
    #[error("Unsupported fingerprint schema version: {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a save-root not found error
    pub fn save_root_not_found(path: impl Into<String>) -> Self {
        Self::SaveRootNotFound { path: path.into() }
    }

    /// Create an input-directory not found error
    pub fn input_dir_not_found(path: impl Into<String>) -> Self {
        Self::InputDirNotFound { path: path.into() }
    }

    /// Create a destination not found error
    pub fn destination_not_found(path: impl Into<String>) -> Self {
        Self::DestinationNotFound { path: path.into() }
    }

    /// Create a template-directory not found error
    pub fn template_dir_not_found(path: impl Into<String>) -> Self {
        Self::TemplateDirNotFound { path: path.into() }
    }

    /// Create a fingerprint-directory not found error
    pub fn fingerprint_dir_not_found(path: impl Into<String>) -> Self {
        Self::FingerprintDirNotFound { path: path.into() }
    }

    /// Create a fingerprint not found error
    pub fn fingerprint_not_found(hostname: impl Into<String>) -> Self {
        Self::FingerprintNotFound {
            hostname: hostname.into(),
        }
    }

    /// Create a hardware-id retrieval error
    pub fn hardware_id(message: impl Into<String>) -> Self {
        Self::HardwareId {
            message: message.into(),
        }
    }
}
