//! Core library for the Joymap CLI.
//!
//! Holds everything the fingerprint, extract, and restore crates share:
//! the binding filename grammar, the deterministic ordinal-assignment
//! primitive both scanners go through, the fingerprint record types, the
//! error taxonomy, and saved-games path resolution.

pub mod error;
pub mod filenames;
pub mod options;
pub mod paths;
pub mod scan;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use options::RunOptions;
pub use types::{
    BindingTemplate, ControllerObservation, MachineFingerprint, MatchOutcome, SCHEMA_VERSION,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
