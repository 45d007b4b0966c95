//! Extract command
//!
//! Templatizes one module's live binding files into the templates
//! directory.

use anyhow::Result;
use joymap_core::RunOptions;
use joymap_templates::extract_module;

use crate::cli::ExtractArgs;
use crate::output;

pub fn run(args: ExtractArgs, options: RunOptions) -> Result<()> {
    output::header("Extract Binding Templates");

    output::kv("Module", &args.module);
    output::kv("Templates", args.repotemplates.as_str());

    if options.dry_run {
        output::warning("DRY RUN MODE - no files will be written");
    }

    let report = extract_module(
        &args.module,
        args.saveroot.as_deref(),
        &args.repotemplates,
        &options,
    )?;

    if report.source_missing {
        output::warning(&format!(
            "No joystick folder for '{}' on this machine",
            args.module
        ));
        return Ok(());
    }

    for file in &report.files {
        if options.dry_run {
            output::info(&format!("Would extract: {}", file.template_name));
        } else {
            output::success(&format!("Extracted {}", file.template_name));
        }
    }

    if report.count() == 0 {
        output::info("No binding files found");
    } else if !options.dry_run {
        println!();
        output::success(&format!("{} template(s) extracted", report.count()));
    }

    Ok(())
}
