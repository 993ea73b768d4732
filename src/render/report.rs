//! Resolution report JSON generation.

use crate::resolve::Resolution;
use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::path::Path;

pub const REPORT_SCHEMA_VERSION: &str = "1.0";

/// Write a machine-readable summary of one resolution run: the folder chain
/// consulted and every resolved flag with the override file that decided it.
/// The timestamp is optional so callers can keep report output reproducible.
pub fn write_report(
    report_path: &Path,
    resolution: &Resolution,
    include_timestamp: bool,
) -> Result<()> {
    let packages = resolution
        .packages
        .iter()
        .map(|package| {
            let flags = package
                .flags
                .iter()
                .map(|flag| {
                    let mut entry = Map::new();
                    entry.insert("name".to_string(), Value::String(flag.name.clone()));
                    entry.insert("state".to_string(), Value::Bool(flag.state));
                    if let Some(source) = resolution.overrides.source_of(&flag.name) {
                        entry.insert(
                            "source".to_string(),
                            Value::String(source.display().to_string()),
                        );
                    }
                    Value::Object(entry)
                })
                .collect::<Vec<_>>();
            json!({
                "package": package.package_name,
                "flags": flags,
            })
        })
        .collect::<Vec<_>>();

    let mut report = Map::new();
    report.insert(
        "schema_version".to_string(),
        Value::String(REPORT_SCHEMA_VERSION.to_string()),
    );
    if include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert("variant_folders".to_string(), serde_json::to_value(&resolution.folders)?);
    report.insert("packages".to_string(), Value::Array(packages));

    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&Value::Object(report))?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_report;
    use crate::domain::{ResolvedFlag, ResolvedPackage};
    use crate::overrides::OverrideSet;
    use crate::resolve::Resolution;
    use tempfile::TempDir;

    fn sample_resolution() -> Resolution {
        Resolution {
            folders: vec!["root".to_string(), "user".to_string()],
            packages: vec![ResolvedPackage {
                package_name: "a.b".to_string(),
                flags: vec![ResolvedFlag { name: "my_flag".to_string(), state: false }],
            }],
            files: vec![],
            overrides: OverrideSet::default(),
        }
    }

    #[test]
    fn report_without_timestamp_is_reproducible() {
        let out = TempDir::new().expect("tmp");
        let first = out.path().join("first.json");
        let second = out.path().join("second.json");

        let resolution = sample_resolution();
        write_report(&first, &resolution, false).expect("write first");
        write_report(&second, &resolution, false).expect("write second");

        let a = std::fs::read_to_string(&first).expect("read first");
        let b = std::fs::read_to_string(&second).expect("read second");
        similar_asserts::assert_eq!(a, b);
        assert!(!a.contains("generated_at"));
    }

    #[test]
    fn report_lists_folders_and_flags() {
        let out = TempDir::new().expect("tmp");
        let path = out.path().join("report.json");
        write_report(&path, &sample_resolution(), true).expect("write");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(value["schema_version"], "1.0");
        assert_eq!(value["variant_folders"][1], "user");
        assert_eq!(value["packages"][0]["package"], "a.b");
        assert_eq!(value["packages"][0]["flags"][0]["state"], false);
        assert!(value["generated_at"].is_string());
    }
}
