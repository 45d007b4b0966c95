//! Machine identity collaborator.
//!
//! Supplies the two values that anchor a fingerprint to a physical
//! machine: the BIOS hardware UUID and the hostname. Both are hard
//! preconditions; neither failure is retryable.

use joymap_core::error::{Error, Result};

/// Source of the machine's stable identity.
///
/// The production implementation shells out to the host OS; tests supply
/// their own.
pub trait MachineIdentity {
    /// Stable hardware UUID of the machine.
    fn hardware_id(&self) -> Result<String>;

    /// Machine hostname. Never empty.
    fn hostname(&self) -> Result<String>;
}

/// Identity read from the running system.
#[derive(Debug, Default)]
pub struct SystemIdentity;

impl MachineIdentity for SystemIdentity {
    fn hardware_id(&self) -> Result<String> {
        // WMIC is deprecated on recent Windows but still universally
        // available, and it reads the UUID straight from the BIOS, so the
        // value survives OS cloning.
        let output = duct::cmd!("wmic", "csproduct", "get", "uuid")
            .read()
            .map_err(|e| Error::hardware_id(e.to_string()))?;
        parse_wmic_uuid(&output)
    }

    fn hostname(&self) -> Result<String> {
        let name = hostname::get()?;
        let name = name.to_string_lossy().trim().to_string();
        if name.is_empty() {
            return Err(Error::EmptyHostname);
        }
        Ok(name)
    }
}

/// Extracts the UUID from WMIC output.
///
/// WMIC prints a `UUID` header line, the value, and assorted blank lines;
/// the value is the second non-blank line.
fn parse_wmic_uuid(output: &str) -> Result<String> {
    let lines: Vec<&str> = output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(Error::hardware_id("no UUID returned from WMIC"));
    }

    Ok(lines[1].to_string())
}
