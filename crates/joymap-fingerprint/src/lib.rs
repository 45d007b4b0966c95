//! Machine identity and controller inventory for Joymap.
//!
//! A fingerprint ties a machine's stable identity (BIOS hardware UUID +
//! hostname) to the controllers DCS has registered on it, with the same
//! deterministic instance ordinals the template extractor hands out.
//! Records persist as one JSON file per machine and are looked up by
//! hostname through a linear-scan store.

pub mod identity;
pub mod inventory;
pub mod store;

// Re-export commonly used types
pub use identity::{MachineIdentity, SystemIdentity};
pub use inventory::scan_inventory;
pub use store::{capture, FingerprintStore};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
