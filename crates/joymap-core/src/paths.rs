//! Saved-games path resolution.
//!
//! Locates the DCS saved-games root and its `Config/Input` tree. An
//! explicit override always wins and must exist; otherwise the standard
//! install locations under the user's home directory are probed.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Saved-games folder names probed under `<home>/Saved Games`.
const DEFAULT_SAVE_DIRS: &[&str] = &["DCS", "DCS.openbeta"];

/// Get the user's home directory.
///
/// Prefers the HOME environment variable over `dirs::home_dir()` so shell
/// and container overrides are respected.
fn home_dir() -> Option<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(Utf8PathBuf::from(home));
    }
    dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
}

/// Resolves the saved-games root directory.
///
/// An override is trimmed of stray quotes and spaces that terminals
/// sometimes inject, and must exist. With no override, the standard
/// locations are probed in order; the first hit wins.
pub fn resolve_save_root(override_path: Option<&Utf8Path>) -> Result<Utf8PathBuf> {
    if let Some(raw) = override_path {
        let trimmed = raw.as_str().trim_matches(|c| c == ' ' || c == '"');
        let path = Utf8PathBuf::from(trimmed);
        if path.exists() {
            return Ok(path);
        }
        return Err(Error::save_root_not_found(path));
    }

    let home = home_dir()
        .ok_or_else(|| Error::save_root_not_found("<home>/Saved Games"))?;

    for name in DEFAULT_SAVE_DIRS {
        let candidate = home.join("Saved Games").join(name);
        if candidate.exists() {
            debug!("Found saved-games root: {}", candidate);
            return Ok(candidate);
        }
    }

    Err(Error::save_root_not_found(
        home.join("Saved Games").join("DCS[.openbeta]"),
    ))
}

/// The binding-file tree under a saved-games root.
pub fn input_dir(save_root: &Utf8Path) -> Utf8PathBuf {
    save_root.join("Config").join("Input")
}

/// The joystick binding directory of one module under `base`.
pub fn module_joystick_dir(base: &Utf8Path, module: &str) -> Utf8PathBuf {
    base.join(module).join("joystick")
}
