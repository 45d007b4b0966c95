//! Fingerprint capture and the on-disk record store.
//!
//! One JSON file per machine, named `{hostname}_{machine_guid}.json`.
//! The store is a deliberate linear scan over a directory: lookup parses
//! every record file until the hostname matches, so it can later be
//! swapped for an indexed store without touching callers.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use joymap_core::error::{Error, Result};
use joymap_core::types::MachineFingerprint;

use crate::identity::MachineIdentity;
use crate::inventory::scan_inventory;

/// Captures a fingerprint of the current machine.
///
/// Identity failures (missing hardware UUID, empty hostname) abort before
/// the inventory scan runs.
pub fn capture(
    identity: &dyn MachineIdentity,
    input_dir: &Utf8Path,
) -> Result<MachineFingerprint> {
    let hostname = identity.hostname()?;
    let machine_guid = identity.hardware_id()?;
    info!("Capturing fingerprint for {} ({})", hostname, machine_guid);

    let controllers = scan_inventory(input_dir)?;
    Ok(MachineFingerprint::new(machine_guid, hostname, controllers))
}

/// Directory of fingerprint record files, keyed by hostname.
#[derive(Debug, Clone)]
pub struct FingerprintStore {
    directory: Utf8PathBuf,
}

impl FingerprintStore {
    /// Creates a store over `directory`. The directory need not exist
    /// until the first persist.
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory this store reads and writes.
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// Writes a record, creating the directory if absent.
    ///
    /// Any prior file for the same hostname + machine GUID is overwritten
    /// unconditionally: a fresh capture is authoritative.
    pub fn persist(&self, record: &MachineFingerprint) -> Result<Utf8PathBuf> {
        fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(record.file_name());
        fs::write(&path, record.to_json()?)?;
        Ok(path)
    }

    /// Finds the first record whose stored hostname matches.
    ///
    /// Record files are visited in sorted filename order; unparsable
    /// files are skipped. The directory itself must exist.
    pub fn lookup(&self, hostname: &str) -> Result<MachineFingerprint> {
        if !self.directory.is_dir() {
            return Err(Error::fingerprint_dir_not_found(self.directory.as_str()));
        }

        for path in self.record_files()? {
            let Ok(text) = fs::read_to_string(&path) else {
                continue;
            };
            let Ok(record) = MachineFingerprint::from_json(&text) else {
                debug!("Skipping unparsable record file: {}", path);
                continue;
            };
            if record.hostname == hostname {
                record.validate()?;
                return Ok(record);
            }
        }

        Err(Error::fingerprint_not_found(hostname))
    }

    /// Lists `*.json` files in the store directory, sorted.
    fn record_files(&self) -> Result<Vec<Utf8PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.ends_with(".json") {
                files.push(self.directory.join(name));
            }
        }
        files.sort();
        Ok(files)
    }
}
