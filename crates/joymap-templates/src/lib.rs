//! Template extraction and restore for Joymap.
//!
//! Extraction turns one module's live binding files into a portable
//! template set; restore marries a template set to a target machine's
//! fingerprint and writes resolved binding files, backing up whatever it
//! would overwrite. Both sides rely on the ordinal-assignment rule in
//! `joymap-core::scan`, which is what makes a template extracted on one
//! machine land on the right controller of another.

pub mod extract;
pub mod restore;

// Re-export commonly used types
pub use extract::{extract_module, ExtractReport, ExtractedFile};
pub use restore::{marry, restore_module, RestoreAction, RestoreOptions, RestoreReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
