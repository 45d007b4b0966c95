//! Fingerprint record format and shared types.
//!
//! The fingerprint is stored as one JSON file per machine, naming every
//! controller DCS has registered along with the machine's own identity.

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version of the fingerprint record format.
pub const SCHEMA_VERSION: u32 = 1;

/// One physical controller as seen in one binding-directory scan.
///
/// `instance_id` is the 1-based ordinal among controllers sharing
/// `controller_name`, assigned by the deterministic scan order. The pair
/// `(controller_name, instance_id)` is the join key between a fingerprint
/// and a template set and never collides within one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerObservation {
    /// Display name DCS uses for the device, trimmed
    pub controller_name: String,

    /// Machine-local GUID DCS assigned to the device
    pub dcs_guid: String,

    /// 1-based ordinal among same-named devices
    pub instance_id: u32,
}

/// Complete machine fingerprint record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineFingerprint {
    /// Record format version
    pub schema_version: u32,

    /// Stable hardware UUID of the machine
    pub machine_guid: String,

    /// Machine hostname; the external lookup key
    pub hostname: String,

    /// When the fingerprint was captured
    pub last_seen: DateTime<Utc>,

    /// Controllers observed on this machine
    pub controllers: Vec<ControllerObservation>,
}

impl MachineFingerprint {
    /// Creates a fingerprint record stamped with the current schema
    /// version and capture time.
    pub fn new(
        machine_guid: impl Into<String>,
        hostname: impl Into<String>,
        controllers: Vec<ControllerObservation>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            machine_guid: machine_guid.into(),
            hostname: hostname.into(),
            last_seen: Utc::now(),
            controllers,
        }
    }

    /// Serializes the record to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a record from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates that the record is readable by this build.
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(Error::SchemaVersion {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(())
    }

    /// The on-disk file name for this record.
    pub fn file_name(&self) -> String {
        format!("{}_{}.json", self.hostname, self.machine_guid)
    }

    /// Finds the controller with the exact `(name, instance)` pair.
    ///
    /// No partial or nearest-match fallback: a template either marries an
    /// observation exactly or not at all.
    pub fn find_controller(&self, name: &str, instance: u32) -> Option<&ControllerObservation> {
        self.controllers
            .iter()
            .find(|c| c.controller_name == name && c.instance_id == instance)
    }
}

/// One templatized binding file, keyed by its logical controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTemplate {
    /// Controller display name from the template filename
    pub controller_name: String,

    /// 1-based positional marker from the template filename
    pub instance_id: u32,

    /// Path to the opaque binding payload
    pub payload: Utf8PathBuf,
}

/// Outcome of marrying one template against a fingerprint.
///
/// Transient: drives the restore step and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Template married an observation; carries the real identifier
    Resolved { dcs_guid: String },

    /// No observation with the template's `(name, instance)` pair
    Unmatched,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fingerprint() -> MachineFingerprint {
        MachineFingerprint::new(
            "12345678-1234-1234-1234-123456789ABC",
            "GAMING-PC",
            vec![
                ControllerObservation {
                    controller_name: "Throttle - HOTAS Warthog".to_string(),
                    dcs_guid: "{072CAE50-E1C6-11eb-8002-444553540000}".to_string(),
                    instance_id: 1,
                },
                ControllerObservation {
                    controller_name: "VPC Stick MT-50".to_string(),
                    dcs_guid: "{11E4FB10-E1C6-11eb-8003-444553540000}".to_string(),
                    instance_id: 1,
                },
                ControllerObservation {
                    controller_name: "VPC Stick MT-50".to_string(),
                    dcs_guid: "{FFE4FB10-E1C6-11eb-8004-444553540000}".to_string(),
                    instance_id: 2,
                },
            ],
        )
    }

    #[test]
    fn test_fingerprint_creation() {
        let record = sample_fingerprint();
        assert_eq!(record.schema_version, SCHEMA_VERSION);
        assert_eq!(record.hostname, "GAMING-PC");
        assert_eq!(record.controllers.len(), 3);
    }

    #[test]
    fn test_fingerprint_serialization_round_trip() {
        let record = sample_fingerprint();
        let json = record.to_json().unwrap();
        assert!(json.contains("schema_version"));
        assert!(json.contains("dcs_guid"));

        let parsed = MachineFingerprint::from_json(&json).unwrap();
        assert_eq!(parsed.hostname, record.hostname);
        assert_eq!(parsed.controllers, record.controllers);
    }

    #[test]
    fn test_fingerprint_validation() {
        let mut record = sample_fingerprint();
        assert!(record.validate().is_ok());

        record.schema_version = 99;
        assert!(matches!(
            record.validate(),
            Err(Error::SchemaVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_file_name_combines_hostname_and_guid() {
        let record = sample_fingerprint();
        assert_eq!(
            record.file_name(),
            "GAMING-PC_12345678-1234-1234-1234-123456789ABC.json"
        );
    }

    #[test]
    fn test_find_controller_exact_pair_only() {
        let record = sample_fingerprint();

        let hit = record.find_controller("VPC Stick MT-50", 2).unwrap();
        assert_eq!(hit.dcs_guid, "{FFE4FB10-E1C6-11eb-8004-444553540000}");

        // Right name, wrong instance
        assert!(record.find_controller("VPC Stick MT-50", 3).is_none());
        // Wrong name, right instance
        assert!(record.find_controller("VPC Stick", 1).is_none());
    }

    #[test]
    fn test_record_field_names_match_on_disk_format() {
        let json = sample_fingerprint().to_json().unwrap();
        for field in [
            "schema_version",
            "machine_guid",
            "hostname",
            "last_seen",
            "controllers",
            "controller_name",
            "dcs_guid",
            "instance_id",
        ] {
            assert!(json.contains(field), "missing field {field}");
        }
    }
}
