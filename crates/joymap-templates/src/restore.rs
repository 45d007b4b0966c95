//! The marriage/restore engine.
//!
//! Joins a template set to a target machine's fingerprint: each template's
//! `(name, instance)` key either marries exactly one recorded controller,
//! recovering that machine's GUID, or goes unmatched. Matched templates
//! are written as resolved binding files, backing up anything they would
//! overwrite. Unmatched templates warn and write nothing; they never abort
//! the run.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

use joymap_core::error::{Error, Result};
use joymap_core::filenames::{backup_file_name, parse_template, resolved_file_name};
use joymap_core::options::RunOptions;
use joymap_core::paths::{input_dir, module_joystick_dir, resolve_save_root};
use joymap_core::scan::list_binding_files;
use joymap_core::types::{BindingTemplate, MachineFingerprint, MatchOutcome};
use joymap_fingerprint::FingerprintStore;

/// Options for one restore run.
#[derive(Debug, Clone, Copy)]
pub struct RestoreOptions {
    /// Shared verbosity / dry-run switches
    pub run: RunOptions,

    /// Backup generations kept per resolved file, minimum 1.
    ///
    /// Depth 1 keeps a single `.old`, replacing any prior backup. Deeper
    /// retention rotates older generations to `.old.2`, `.old.3`, …
    pub backup_retention: usize,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            run: RunOptions::default(),
            backup_retention: 1,
        }
    }
}

/// Per-template outcome of a restore run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreAction {
    /// Template married a controller and was written out
    Restored {
        /// Resolved filename carrying the real GUID
        file_name: String,
        /// Backup the pre-existing file was renamed to, if there was one
        backed_up_to: Option<Utf8PathBuf>,
    },

    /// No controller with the template's `(name, instance)` pair
    Unmatched {
        controller_name: String,
        instance_id: u32,
    },
}

/// Result of one restore run.
#[derive(Debug)]
pub struct RestoreReport {
    /// Per-template records, in template filename order
    pub actions: Vec<RestoreAction>,

    /// Directory resolved files were written to (or would be, in dry-run)
    pub output_dir: Utf8PathBuf,
}

impl RestoreReport {
    /// Number of templates written out.
    pub fn restored(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, RestoreAction::Restored { .. }))
            .count()
    }

    /// Number of templates with no hardware match.
    pub fn unmatched(&self) -> usize {
        self.actions.len() - self.restored()
    }

    /// Number of pre-existing files that were backed up.
    pub fn backed_up(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| {
                matches!(
                    a,
                    RestoreAction::Restored {
                        backed_up_to: Some(_),
                        ..
                    }
                )
            })
            .count()
    }
}

/// Restores one module's templates against a machine's fingerprint.
///
/// Preconditions (missing fingerprint, missing template folder, bad save
/// root) abort before any file is touched. With no save root, resolved
/// files are staged under the current directory for manual copying.
/// Dry-run emits the same per-template records with no filesystem
/// mutation at all.
pub fn restore_module(
    module: &str,
    hostname: &str,
    fingerprint_dir: &Utf8Path,
    template_root: &Utf8Path,
    save_root: Option<&Utf8Path>,
    options: &RestoreOptions,
) -> Result<RestoreReport> {
    let store = FingerprintStore::new(fingerprint_dir);
    let fingerprint = store.lookup(hostname)?;
    info!(
        "Using fingerprint for '{}' ({}, {} controllers)",
        fingerprint.hostname,
        fingerprint.machine_guid,
        fingerprint.controllers.len()
    );

    let src_dir = module_joystick_dir(template_root, module);
    if !src_dir.is_dir() {
        return Err(Error::template_dir_not_found(src_dir));
    }

    let base_output = match save_root {
        Some(root) => {
            let resolved = resolve_save_root(Some(root))?;
            let base = input_dir(&resolved);
            info!("Targeting installation: {}", base);
            base
        }
        None => {
            info!("Targeting local directory for manual staging");
            Utf8PathBuf::from(".")
        }
    };
    let output_dir = module_joystick_dir(&base_output, module);

    let dry_run = options.run.dry_run;
    if !dry_run {
        fs::create_dir_all(&output_dir)?;
    }

    let mut actions = Vec::new();
    for path in list_binding_files(&src_dir)? {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let Some(parsed) = parse_template(file_name) else {
            continue;
        };
        let template = BindingTemplate {
            controller_name: parsed.controller_name,
            instance_id: parsed.instance_id,
            payload: path,
        };

        let dcs_guid = match marry(&fingerprint, &template) {
            MatchOutcome::Resolved { dcs_guid } => dcs_guid,
            MatchOutcome::Unmatched => {
                warn!(
                    "No hardware match for: {} (instance {})",
                    template.controller_name, template.instance_id
                );
                actions.push(RestoreAction::Unmatched {
                    controller_name: template.controller_name,
                    instance_id: template.instance_id,
                });
                continue;
            }
        };

        let file_name = resolved_file_name(&template.controller_name, &dcs_guid);
        let target = output_dir.join(&file_name);

        let backed_up_to = if target.exists() {
            Some(backup_existing(&output_dir, &file_name, &target, options)?)
        } else {
            None
        };

        if !dry_run {
            fs::copy(&template.payload, &target)?;
        }
        debug!(
            "Mapped {}_{} to {}",
            template.controller_name, template.instance_id, dcs_guid
        );

        actions.push(RestoreAction::Restored {
            file_name,
            backed_up_to,
        });
    }

    Ok(RestoreReport {
        actions,
        output_dir,
    })
}

/// Joins one template to a fingerprint.
///
/// The `(name, instance)` pair must match an observation exactly; there
/// is no partial or nearest-match fallback.
pub fn marry(fingerprint: &MachineFingerprint, template: &BindingTemplate) -> MatchOutcome {
    match fingerprint.find_controller(&template.controller_name, template.instance_id) {
        Some(hw) => MatchOutcome::Resolved {
            dcs_guid: hw.dcs_guid.clone(),
        },
        None => MatchOutcome::Unmatched,
    }
}

/// Moves a pre-existing resolved file out of the way.
///
/// The rename replaces any previous backup of the same generation, so at
/// most `backup_retention` generations exist afterwards. Returns the
/// backup path; dry-run reports it without renaming anything.
fn backup_existing(
    output_dir: &Utf8Path,
    resolved_name: &str,
    target: &Utf8Path,
    options: &RestoreOptions,
) -> Result<Utf8PathBuf> {
    let retention = options.backup_retention.max(1);

    if !options.run.dry_run {
        // Shift older generations up; whatever sat at the retention limit
        // is overwritten by the shift below it.
        for generation in (1..retention).rev() {
            let from = output_dir.join(backup_file_name(resolved_name, generation));
            if from.exists() {
                let to = output_dir.join(backup_file_name(resolved_name, generation + 1));
                fs::rename(&from, &to)?;
            }
        }
    }

    let backup = output_dir.join(backup_file_name(resolved_name, 1));
    if !options.run.dry_run {
        fs::rename(target, &backup)?;
    }
    Ok(backup)
}
