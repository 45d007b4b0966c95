//! Template extraction.
//!
//! Re-reads a machine's live binding files through the same deterministic
//! ordering the inventory scanner uses, and writes copies whose filenames
//! carry the GUID placeholder plus the instance marker instead of the
//! machine-local identifier. Payloads are opaque and copied byte-for-byte.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

use joymap_core::error::{Error, Result};
use joymap_core::filenames::template_file_name;
use joymap_core::options::RunOptions;
use joymap_core::paths::{input_dir, module_joystick_dir, resolve_save_root};
use joymap_core::scan::scan_joystick_dir;

/// One binding file turned into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Live binding the template was read from
    pub source: Utf8PathBuf,

    /// Templatized filename written at the destination
    pub template_name: String,
}

/// Result of one extraction run.
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Per-file records, in the deterministic scan order
    pub files: Vec<ExtractedFile>,

    /// The module had no joystick folder on this machine
    pub source_missing: bool,
}

impl ExtractReport {
    /// Number of templates written (or narrated, in dry-run).
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Extracts one module's bindings into a portable template set.
///
/// The destination root must already exist; a module with no joystick
/// folder on this machine yields a zero-count report, not an error.
/// Dry-run narrates the same per-file records without creating the
/// destination or copying anything.
pub fn extract_module(
    module: &str,
    save_root: Option<&Utf8Path>,
    output_root: &Utf8Path,
    options: &RunOptions,
) -> Result<ExtractReport> {
    if !output_root.exists() {
        return Err(Error::destination_not_found(output_root.as_str()));
    }

    let root = resolve_save_root(save_root)?;
    let src_dir = module_joystick_dir(&input_dir(&root), module);

    if !src_dir.is_dir() {
        warn!("No joystick folder for '{}' at {}", module, src_dir);
        return Ok(ExtractReport {
            files: Vec::new(),
            source_missing: true,
        });
    }

    let dest_dir = module_joystick_dir(output_root, module);
    debug!("Source: {}", src_dir);
    debug!("Target: {}", dest_dir);

    if !options.dry_run {
        fs::create_dir_all(&dest_dir)?;
    }

    let bindings = scan_joystick_dir(&src_dir)?;
    if bindings.is_empty() {
        info!("No binding files found in {}", src_dir);
        return Ok(ExtractReport::default());
    }

    let mut files = Vec::new();
    for binding in bindings {
        // The instance marker is the key a later restore uses to pick the
        // right controller out of the target machine's fingerprint.
        let template_name = template_file_name(&binding.controller_name, binding.instance_id);

        if !options.dry_run {
            fs::copy(&binding.path, dest_dir.join(&template_name))?;
        }

        files.push(ExtractedFile {
            source: binding.path,
            template_name,
        });
    }

    Ok(ExtractReport {
        files,
        source_missing: false,
    })
}
