//! Controller inventory scanner.
//!
//! Walks a machine's `Config/Input` tree and records every registered
//! joystick once, with the deterministic instance ordinal shared with the
//! template extractor.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use joymap_core::error::{Error, Result};
use joymap_core::scan::scan_joystick_dir;
use joymap_core::types::ControllerObservation;

/// Scans the input tree for registered controllers.
///
/// Module folders are visited in sorted order, so the same tree always
/// yields the same observation list. Instance ordinals are local to each
/// module's `joystick` directory; GUID dedupe is global across the whole
/// tree, keeping the first sighting of each physical device.
pub fn scan_inventory(input_dir: &Utf8Path) -> Result<Vec<ControllerObservation>> {
    if !input_dir.is_dir() {
        return Err(Error::input_dir_not_found(input_dir.as_str()));
    }

    let mut seen_guids: HashSet<String> = HashSet::new();
    let mut controllers = Vec::new();

    for joy_dir in joystick_dirs(input_dir)? {
        debug!("Scanning {}", joy_dir);

        for binding in scan_joystick_dir(&joy_dir)? {
            if seen_guids.insert(binding.dcs_guid.clone()) {
                controllers.push(ControllerObservation {
                    controller_name: binding.controller_name,
                    dcs_guid: binding.dcs_guid,
                    instance_id: binding.instance_id,
                });
            }
        }
    }

    // A machine with no sticks plugged in yet is not an error
    if controllers.is_empty() {
        warn!("No joystick GUIDs found under {}", input_dir);
    }

    Ok(controllers)
}

/// Collects every `joystick` directory under `input_dir`, in sorted
/// traversal order.
fn joystick_dirs(input_dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(input_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if !entry.file_type().is_dir() || entry.file_name() != "joystick" {
            continue;
        }
        if let Ok(path) = Utf8PathBuf::from_path_buf(entry.into_path()) {
            dirs.push(path);
        }
    }

    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    fn add_binding(input: &Utf8Path, module: &str, file: &str) {
        let dir = input.join(module).join("joystick");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), b"binding").unwrap();
    }

    #[test]
    fn test_missing_input_dir_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = utf8(&temp).join("Config").join("Input");
        assert!(matches!(
            scan_inventory(&missing),
            Err(Error::InputDirNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_tree_warns_but_succeeds() {
        let temp = TempDir::new().unwrap();
        let controllers = scan_inventory(&utf8(&temp)).unwrap();
        assert!(controllers.is_empty());
    }

    #[test]
    fn test_each_device_recorded_once_across_modules() {
        let temp = TempDir::new().unwrap();
        let input = utf8(&temp);

        add_binding(&input, "A-10C", "Throttle {AAA}.diff.lua");
        add_binding(&input, "F-16C_50", "Throttle {AAA}.diff.lua");
        add_binding(&input, "F-16C_50", "Stick {BBB}.diff.lua");

        let controllers = scan_inventory(&input).unwrap();
        assert_eq!(controllers.len(), 2);
        assert_eq!(controllers[0].controller_name, "Throttle");
        assert_eq!(controllers[0].dcs_guid, "{AAA}");
        assert_eq!(controllers[1].controller_name, "Stick");
    }

    #[test]
    fn test_instance_numbering_is_local_to_module() {
        let temp = TempDir::new().unwrap();
        let input = utf8(&temp);

        // Two same-named sticks in one module, one of them also bound in
        // a second module. The counter restarts per module, so the lone
        // {666} stick is that module's instance 1, not a carried-over 2.
        add_binding(&input, "A-10C", "VPC Stick {555}.diff.lua");
        add_binding(&input, "A-10C", "VPC Stick {666}.diff.lua");
        add_binding(&input, "F-16C_50", "VPC Stick {999}.diff.lua");

        let controllers = scan_inventory(&input).unwrap();
        assert_eq!(controllers.len(), 3);

        assert_eq!(controllers[0].dcs_guid, "{555}");
        assert_eq!(controllers[0].instance_id, 1);
        assert_eq!(controllers[1].dcs_guid, "{666}");
        assert_eq!(controllers[1].instance_id, 2);
        assert_eq!(controllers[2].dcs_guid, "{999}");
        assert_eq!(controllers[2].instance_id, 1);
    }

    #[test]
    fn test_counter_advances_for_deduped_devices() {
        let temp = TempDir::new().unwrap();
        let input = utf8(&temp);

        // {AAA} was already recorded under A-10C. In the F-16 folder it
        // still occupies instance 1, so the second stick there must be
        // instance 2 even though {AAA} itself is deduped.
        add_binding(&input, "A-10C", "VPC Stick {AAA}.diff.lua");
        add_binding(&input, "F-16C_50", "VPC Stick {AAA}.diff.lua");
        add_binding(&input, "F-16C_50", "VPC Stick {BBB}.diff.lua");

        let controllers = scan_inventory(&input).unwrap();
        assert_eq!(controllers.len(), 2);

        let second = controllers
            .iter()
            .find(|c| c.dcs_guid == "{BBB}")
            .unwrap();
        assert_eq!(second.instance_id, 2);
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let temp = TempDir::new().unwrap();
        let input = utf8(&temp);

        add_binding(&input, "F-16C_50", "Stick {B}.diff.lua");
        add_binding(&input, "F-16C_50", "Stick {A}.diff.lua");
        add_binding(&input, "A-10C", "Throttle {C}.diff.lua");

        let first = scan_inventory(&input).unwrap();
        let second = scan_inventory(&input).unwrap();
        assert_eq!(first, second);

        // Lexicographically first GUID takes instance 1
        let a = first.iter().find(|c| c.dcs_guid == "{A}").unwrap();
        assert_eq!(a.instance_id, 1);
    }
}
