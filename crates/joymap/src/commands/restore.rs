//! Restore command
//!
//! Marries a module's template set to a target machine's fingerprint and
//! writes the resolved binding files.

use anyhow::Result;
use joymap_core::RunOptions;
use joymap_templates::{restore_module, RestoreAction, RestoreOptions};

use crate::cli::RestoreArgs;
use crate::output;

pub fn run(args: RestoreArgs, options: RunOptions) -> Result<()> {
    output::header("Restore Binding Templates");

    output::kv("Module", &args.module);
    output::kv("Hostname", &args.hostname);
    output::kv("Fingerprints", args.repofprints.as_str());
    output::kv("Templates", args.repotemplates.as_str());

    if options.dry_run {
        output::warning("DRY RUN MODE - no files will be restored");
    }

    let restore_options = RestoreOptions {
        run: options,
        backup_retention: args.backup_retention,
    };

    let report = restore_module(
        &args.module,
        &args.hostname,
        &args.repofprints,
        &args.repotemplates,
        args.saveroot.as_deref(),
        &restore_options,
    )?;

    for action in &report.actions {
        match action {
            RestoreAction::Restored {
                file_name,
                backed_up_to,
            } => {
                if let Some(backup) = backed_up_to {
                    if options.dry_run {
                        output::info(&format!("Would rename existing file to: {}", backup));
                    } else {
                        output::info(&format!("Existing file renamed to: {}", backup));
                    }
                }
                if options.dry_run {
                    output::info(&format!("Would restore: {}", file_name));
                } else {
                    output::success(&format!("Restored {}", file_name));
                }
            }
            RestoreAction::Unmatched {
                controller_name,
                instance_id,
            } => {
                output::warning(&format!(
                    "No hardware match for: {} (instance {})",
                    controller_name, instance_id
                ));
            }
        }
    }

    println!();
    output::kv("Output", report.output_dir.as_str());
    output::kv("Files restored", &report.restored().to_string());
    output::kv("Unmatched", &report.unmatched().to_string());
    if report.backed_up() > 0 {
        output::kv("Files backed up", &report.backed_up().to_string());
    }

    if !options.dry_run {
        output::success("Restore complete");
    }

    Ok(())
}
