//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Joymap - Portable DCS joystick binding templates
#[derive(Parser, Debug)]
#[command(name = "joymap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug trace output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Dry run: narrate every action without performing it
    #[arg(long, global = true)]
    pub noaction: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture this machine's controller fingerprint
    Fingerprint(FingerprintArgs),

    /// Extract a module's bindings into portable templates
    Extract(ExtractArgs),

    /// Restore templates against a machine's fingerprint
    Restore(RestoreArgs),

    /// Show version information
    Version(VersionArgs),
}

// Fingerprint command
#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// Saved-games root override (non-standard install locations)
    #[arg(long)]
    pub saveroot: Option<Utf8PathBuf>,

    /// Directory fingerprint records are written to
    #[arg(long, default_value = ".")]
    pub repofprints: Utf8PathBuf,
}

// Extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Module name (e.g. FA-18C_hornet)
    pub module: String,

    /// Saved-games root override
    #[arg(long)]
    pub saveroot: Option<Utf8PathBuf>,

    /// Target directory for extracted templates
    #[arg(long, default_value = ".")]
    pub repotemplates: Utf8PathBuf,
}

// Restore command
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Module name (e.g. F-16C_50)
    pub module: String,

    /// Target machine hostname
    pub hostname: String,

    /// Fingerprint directory
    #[arg(long, default_value = ".")]
    pub repofprints: Utf8PathBuf,

    /// Templates directory
    #[arg(long, default_value = ".")]
    pub repotemplates: Utf8PathBuf,

    /// Saved-games root of the target installation; omit to stage files
    /// under the current directory
    #[arg(long)]
    pub saveroot: Option<Utf8PathBuf>,

    /// Backup generations kept per overwritten file
    #[arg(long, default_value = "1")]
    pub backup_retention: usize,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
