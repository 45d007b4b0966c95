//! Binding filename grammar.
//!
//! Three forms exist on disk:
//!
//! - live:     `<name> {<guid>}.diff.lua`
//! - template: `<name> {__GUID__}_<instance>.diff.lua`
//! - resolved: `<name> <guid>.diff.lua` (backup: same + `.old`)
//!
//! A filename matching no grammar is not an error anywhere in the system;
//! callers skip it.

use regex::Regex;
use std::sync::LazyLock;

/// Extension shared by every binding file.
pub const BINDING_SUFFIX: &str = ".diff.lua";

/// Placeholder substituted for the GUID in template filenames.
pub const GUID_PLACEHOLDER: &str = "{__GUID__}";

/// Suffix appended to a pre-existing resolved file before overwrite.
pub const BACKUP_SUFFIX: &str = ".old";

static LIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\s+(\{.*\})\.diff\.lua$").expect("live regex is valid"));

static TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)\s+\{__GUID__\}_(\d+)\.diff\.lua$").expect("template regex is valid")
});

/// A live binding filename, split into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveBindingName {
    /// Controller display name, trimmed
    pub controller_name: String,

    /// Brace-wrapped DCS GUID, trimmed
    pub dcs_guid: String,
}

/// A template filename, split into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateName {
    /// Controller display name, trimmed
    pub controller_name: String,

    /// 1-based positional marker
    pub instance_id: u32,
}

/// Parses a live binding filename (`Name {GUID}.diff.lua`).
pub fn parse_live(file_name: &str) -> Option<LiveBindingName> {
    let caps = LIVE_RE.captures(file_name)?;
    Some(LiveBindingName {
        controller_name: caps[1].trim().to_string(),
        dcs_guid: caps[2].trim().to_string(),
    })
}

/// Parses a template filename (`Name {__GUID__}_N.diff.lua`).
pub fn parse_template(file_name: &str) -> Option<TemplateName> {
    let caps = TEMPLATE_RE.captures(file_name)?;
    // The instance group is all digits; overflow past u32 means the name
    // is not one of ours.
    let instance_id = caps[2].parse().ok()?;
    Some(TemplateName {
        controller_name: caps[1].trim().to_string(),
        instance_id,
    })
}

/// Formats the template filename for a `(name, instance)` pair.
pub fn template_file_name(controller_name: &str, instance_id: u32) -> String {
    format!("{controller_name} {GUID_PLACEHOLDER}_{instance_id}{BINDING_SUFFIX}")
}

/// Formats the resolved filename for a `(name, guid)` pair.
pub fn resolved_file_name(controller_name: &str, dcs_guid: &str) -> String {
    format!("{controller_name} {dcs_guid}{BINDING_SUFFIX}")
}

/// Formats the backup filename for a resolved file.
///
/// Generation 1 is plain `.old`; deeper generations (when retention is
/// raised above one) carry a numeric suffix.
pub fn backup_file_name(resolved_name: &str, generation: usize) -> String {
    if generation <= 1 {
        format!("{resolved_name}{BACKUP_SUFFIX}")
    } else {
        format!("{resolved_name}{BACKUP_SUFFIX}.{generation}")
    }
}
