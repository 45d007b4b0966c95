//! Version command

use crate::cli::VersionArgs;
use crate::version::VersionInfo;
use anyhow::Result;

pub fn run(args: VersionArgs) -> Result<()> {
    let info = VersionInfo::current();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.display());

        if let Some(commit) = &info.commit {
            println!("Commit:     {}", commit);
        }
        if let Some(date) = &info.build_date {
            println!("Build date: {}", date);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_current_returns_non_empty_version() {
        let info = VersionInfo::current();
        assert!(
            !info.version.is_empty(),
            "version string should not be empty"
        );
    }

    #[test]
    fn test_version_info_current_is_valid_semver() {
        let info = VersionInfo::current();
        let parsed = semver::Version::parse(&info.version);
        assert!(
            parsed.is_ok(),
            "version should be valid semver, got: {}",
            info.version
        );
    }

    #[test]
    fn test_version_info_display_contains_version() {
        let info = VersionInfo::current();
        let display = info.display();
        assert!(
            display.contains(&info.version),
            "display should contain the version string"
        );
        assert!(
            display.starts_with("joymap "),
            "display should start with 'joymap '"
        );
    }

    #[test]
    fn test_version_info_json_serialization() {
        let info = VersionInfo::current();
        let json = serde_json::to_string(&info).expect("should serialize to JSON");
        assert!(json.contains(&info.version));

        let deserialized: VersionInfo =
            serde_json::from_str(&json).expect("should deserialize from JSON");
        assert_eq!(deserialized.version, info.version);
    }
}
