//! Merging variant-scoped override files into resolved flag state.
//!
//! For each folder in the variant precedence chain, for each declared
//! package, every `.textproto` file under
//! `<work>/aconfig/<folder>/<package>/` is parsed and folded into an
//! [`OverrideSet`]. A later folder's value for a flag replaces an earlier
//! one; within a single directory files are processed in lexicographic
//! file-name order so the last-write-wins rule stays deterministic.

use crate::domain::{
    FlagDeclaration, ResolvedFlag, ResolvedPackage, OVERRIDE_EXTENSION, OVERRIDE_SUBTREE,
};
use crate::error::ResolveError;
use crate::utils::field_value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Accumulated override state keyed by flag name, carrying the file each
/// value came from so replacements can be reported and traced.
#[derive(Debug, Default)]
pub struct OverrideSet {
    values: HashMap<String, OverrideValue>,
}

#[derive(Debug)]
struct OverrideValue {
    state: bool,
    source: PathBuf,
}

impl OverrideSet {
    pub fn state_of(&self, flag: &str) -> Option<bool> {
        self.values.get(flag).map(|v| v.state)
    }

    /// The override file that supplied the winning value for `flag`.
    pub fn source_of(&self, flag: &str) -> Option<&Path> {
        self.values.get(flag).map(|v| v.source.as_path())
    }

    /// Record `state` for `flag`, replacing and reporting any earlier value.
    fn record(&mut self, flag: &str, state: bool, source: &Path) {
        if self.values.contains_key(flag) {
            tracing::info!(
                "value for {flag} is overridden by the config for it in {}",
                source.parent().unwrap_or_else(|| Path::new("")).display()
            );
        }
        self.values
            .insert(flag.to_string(), OverrideValue { state, source: source.to_path_buf() });
    }
}

/// Normalize an override state token. `ENABLED`/`true` enable the flag,
/// `DISABLED`/`false` disable it, and any other token disables it too
/// (permissive fallback rather than an error).
pub fn normalize_state(token: &str) -> bool {
    match token {
        "true" | "ENABLED" => true,
        "false" | "DISABLED" => false,
        _ => false,
    }
}

/// Walk the fetched tree in precedence order and fold every override file
/// into one [`OverrideSet`].
pub fn merge_overrides(
    workdir: &Path,
    folders: &[String],
    declarations: &[FlagDeclaration],
    read_only_gate: bool,
) -> Result<OverrideSet, ResolveError> {
    let mut set = OverrideSet::default();
    for file in candidate_files(workdir, folders, declarations) {
        apply_file(&mut set, &file, declarations, read_only_gate)?;
    }
    Ok(set)
}

/// Assign each declared flag its merged state, defaulting to disabled when
/// no override matched anywhere in the variant chain.
pub fn resolve_flags(
    declarations: &[FlagDeclaration],
    set: &OverrideSet,
) -> Vec<ResolvedPackage> {
    declarations
        .iter()
        .map(|declaration| ResolvedPackage {
            package_name: declaration.package_name.clone(),
            flags: declaration
                .flags
                .iter()
                .map(|name| ResolvedFlag {
                    name: name.clone(),
                    state: set.state_of(name).unwrap_or(false),
                })
                .collect(),
        })
        .collect()
}

/// Collect candidate override files in processing order. A missing
/// `(folder, package)` directory contributes nothing.
fn candidate_files(
    workdir: &Path,
    folders: &[String],
    declarations: &[FlagDeclaration],
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for folder in folders {
        for declaration in declarations {
            let dir = workdir
                .join(OVERRIDE_SUBTREE)
                .join(folder)
                .join(&declaration.package_name);
            let Ok(entries) = std::fs::read_dir(&dir) else { continue };
            let mut batch: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| {
                    path.extension().and_then(|e| e.to_str()) == Some(OVERRIDE_EXTENSION)
                })
                .collect();
            // Directory listing order varies by filesystem; sort by name so
            // multiply-defined flags resolve the same way on every machine.
            batch.sort();
            files.extend(batch);
        }
    }
    files
}

/// Fold one override file into the accumulator.
///
/// Tracks a `name` variable scoped to the current record; a `state:` line
/// closes the record by storing the normalized value under that name.
fn apply_file(
    set: &mut OverrideSet,
    file: &Path,
    declarations: &[FlagDeclaration],
    read_only_gate: bool,
) -> Result<(), ResolveError> {
    let content = std::fs::read_to_string(file).map_err(|e| {
        ResolveError::Fetch(format!("error reading textproto file {}: {e}", file.display()))
    })?;
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let mut name: Option<String> = None;

    for raw_line in content.lines() {
        let line = raw_line.trim();

        // Comment lines are ignored even when they contain a field prefix.
        if line.starts_with('#') {
            continue;
        }

        if line.starts_with("name:") {
            name = Some(field_value(line).to_string());
        } else if line.starts_with("package:") {
            let package = field_value(line);
            if !declarations.iter().any(|d| d.package_name == package) {
                return Err(ResolveError::PackageMismatch {
                    file: file_name,
                    package: package.to_string(),
                });
            }
        } else if line.starts_with("permission:") {
            let permission = field_value(line);
            let flag = || name.clone().unwrap_or_else(|| "<unnamed>".to_string());
            match permission {
                "READ_ONLY" => {}
                "READ_WRITE" => {
                    if read_only_gate {
                        return Err(ResolveError::WriteFlagForbidden { flag: flag() });
                    }
                }
                other => {
                    return Err(ResolveError::InvalidPermission {
                        flag: flag(),
                        permission: other.to_string(),
                    });
                }
            }
        } else if line.starts_with("state:") {
            match &name {
                Some(flag) => set.record(flag, normalize_state(field_value(line)), file),
                // A record can never match a declared flag without a name.
                None => tracing::debug!(
                    "ignoring state with no preceding name in {}",
                    file.display()
                ),
            }
        }
    }

    Ok(())
}
