//! Deterministic ordinal assignment over one binding directory.
//!
//! The inventory scanner and the template extractor must hand out
//! identical instance numbers for identical physical layouts, so both go
//! through this module: one sorted listing, one counter rule.
//!
//! The sort key is the full filename. Live filenames put the GUID after
//! the controller name, so two same-named controllers always order by
//! GUID, independent of filesystem enumeration order.

use std::collections::HashMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::Result;
use crate::filenames::{self, BINDING_SUFFIX};

/// Per-name running counter handing out 1-based instance ordinals.
///
/// The counter is bumped for every grammar-matching file before any
/// dedupe or placeholder decision, so the second same-named device in a
/// folder is always instance 2 even when the first was already recorded
/// elsewhere.
#[derive(Debug, Default)]
pub struct InstanceCounter {
    counts: HashMap<String, u32>,
}

impl InstanceCounter {
    /// Creates a fresh counter. Scoped to one directory scan; instance
    /// numbering never carries over between modules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next 1-based ordinal for `controller_name`.
    pub fn next(&mut self, controller_name: &str) -> u32 {
        let count = self
            .counts
            .entry(controller_name.to_string())
            .or_insert(0);
        *count += 1;
        *count
    }
}

/// One live binding file with its assigned instance ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedBinding {
    /// Controller display name, trimmed
    pub controller_name: String,

    /// Brace-wrapped DCS GUID from the filename
    pub dcs_guid: String,

    /// 1-based ordinal among same-named controllers in this directory
    pub instance_id: u32,

    /// Full path to the binding file
    pub path: Utf8PathBuf,
}

/// Lists the `*.diff.lua` files of one directory in sorted filename order.
///
/// Subdirectories and files with any other extension are ignored.
pub fn list_binding_files(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            // Non-UTF-8 names cannot match the grammar
            continue;
        };
        if name.ends_with(BINDING_SUFFIX) {
            files.push(dir.join(name));
        }
    }
    files.sort();
    Ok(files)
}

/// Scans one `joystick` directory, assigning deterministic instances.
///
/// Files whose names do not match the live grammar are silently skipped
/// and do not advance any counter.
pub fn scan_joystick_dir(dir: &Utf8Path) -> Result<Vec<ScannedBinding>> {
    let mut counter = InstanceCounter::new();
    let mut bindings = Vec::new();

    for path in list_binding_files(dir)? {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let Some(parsed) = filenames::parse_live(file_name) else {
            continue;
        };
        let instance_id = counter.next(&parsed.controller_name);
        bindings.push(ScannedBinding {
            controller_name: parsed.controller_name,
            dcs_guid: parsed.dcs_guid,
            instance_id,
            path,
        });
    }

    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    fn touch(dir: &Utf8Path, name: &str) {
        fs::write(dir.join(name), b"binding").unwrap();
    }

    #[test]
    fn test_instance_counter_is_per_name() {
        let mut counter = InstanceCounter::new();
        assert_eq!(counter.next("Stick"), 1);
        assert_eq!(counter.next("Stick"), 2);
        assert_eq!(counter.next("Throttle"), 1);
        assert_eq!(counter.next("Stick"), 3);
    }

    #[test]
    fn test_scan_assigns_instances_in_guid_order() {
        let temp = TempDir::new().unwrap();
        let dir = utf8(&temp);

        // Created in reverse order; the sort must not care.
        touch(&dir, "VPC Stick {777}.diff.lua");
        touch(&dir, "VPC Stick {666}.diff.lua");
        touch(&dir, "Throttle {123}.diff.lua");

        let bindings = scan_joystick_dir(&dir).unwrap();
        assert_eq!(bindings.len(), 3);

        assert_eq!(bindings[0].controller_name, "Throttle");
        assert_eq!(bindings[0].instance_id, 1);

        assert_eq!(bindings[1].dcs_guid, "{666}");
        assert_eq!(bindings[1].instance_id, 1);
        assert_eq!(bindings[2].dcs_guid, "{777}");
        assert_eq!(bindings[2].instance_id, 2);
    }

    #[test]
    fn test_scan_is_deterministic_across_invocations() {
        let temp = TempDir::new().unwrap();
        let dir = utf8(&temp);

        touch(&dir, "Stick {B}.diff.lua");
        touch(&dir, "Stick {A}.diff.lua");
        touch(&dir, "Throttle {C}.diff.lua");

        let first = scan_joystick_dir(&dir).unwrap();
        let second = scan_joystick_dir(&dir).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_skips_non_grammar_files() {
        let temp = TempDir::new().unwrap();
        let dir = utf8(&temp);

        touch(&dir, "Keyboard.diff.lua");
        touch(&dir, "notes.txt");
        touch(&dir, "Stick {A}.diff.lua");

        let bindings = scan_joystick_dir(&dir).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].controller_name, "Stick");
        assert_eq!(bindings[0].instance_id, 1);
    }

    #[test]
    fn test_scan_empty_dir_yields_empty() {
        let temp = TempDir::new().unwrap();
        let bindings = scan_joystick_dir(&utf8(&temp)).unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_list_binding_files_sorted() {
        let temp = TempDir::new().unwrap();
        let dir = utf8(&temp);

        touch(&dir, "b {2}.diff.lua");
        touch(&dir, "a {1}.diff.lua");
        fs::create_dir(dir.join("sub")).unwrap();

        let files = list_binding_files(&dir).unwrap();
        let names: Vec<_> = files.iter().filter_map(|p| p.file_name()).collect();
        assert_eq!(names, vec!["a {1}.diff.lua", "b {2}.diff.lua"]);
    }
}
