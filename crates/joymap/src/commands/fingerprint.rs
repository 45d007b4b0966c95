//! Fingerprint command
//!
//! Captures this machine's identity and controller inventory and writes
//! the record into the fingerprint directory.

use anyhow::Result;
use joymap_core::paths::{input_dir, resolve_save_root};
use joymap_core::RunOptions;
use joymap_fingerprint::{capture, FingerprintStore, SystemIdentity};

use crate::cli::FingerprintArgs;
use crate::output;

pub fn run(args: FingerprintArgs, options: RunOptions) -> Result<()> {
    output::header("Capture Machine Fingerprint");

    let save_root = resolve_save_root(args.saveroot.as_deref())?;
    output::kv("Saved games", save_root.as_str());
    output::kv("Fingerprints", args.repofprints.as_str());

    if options.dry_run {
        output::warning("DRY RUN MODE - no record will be written");
    }

    let record = capture(&SystemIdentity, &input_dir(&save_root))?;

    output::kv("Hostname", &record.hostname);
    output::kv("Hardware UUID", &record.machine_guid);
    output::kv("Controllers", &record.controllers.len().to_string());
    for controller in &record.controllers {
        output::info(&format!(
            "{} (instance {}) -> {}",
            controller.controller_name, controller.instance_id, controller.dcs_guid
        ));
    }
    if record.controllers.is_empty() {
        output::warning("No joystick GUIDs found on this machine");
    }

    let store = FingerprintStore::new(args.repofprints);
    if options.dry_run {
        output::info(&format!(
            "Would write machine record to: {}",
            store.directory().join(record.file_name())
        ));
        return Ok(());
    }

    let path = store.persist(&record)?;
    output::success(&format!("Wrote machine record to: {}", path));

    Ok(())
}
