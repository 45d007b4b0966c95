//! Run options threaded through every operation.
//!
//! Verbosity and dry-run are explicit values passed down the call chain,
//! never ambient process state.

/// Options shared by all operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Emit verbose trace output
    pub verbose: bool,

    /// Narrate every decision without touching the filesystem
    pub dry_run: bool,
}

impl RunOptions {
    /// Create run options.
    pub fn new(verbose: bool, dry_run: bool) -> Self {
        Self { verbose, dry_run }
    }
}
