//! The global read-only policy gate.
//!
//! One mandatory file in the fetched tree decides whether read-write flags
//! are allowed at all. The file must exist and must declare the exact
//! sentinel flag name; anything else aborts the run. The gate is evaluated
//! once, eagerly, before the merge engine looks at any `permission:` field.

use crate::domain::{POLICY_FILE, POLICY_SENTINEL};
use crate::error::ResolveError;
use crate::overrides::normalize_state;
use crate::utils::field_value;
use std::fs;
use std::path::Path;

#[derive(Debug, PartialEq)]
enum Scan {
    Outside,
    InValueBlock,
}

/// Parse the policy file and return whether read-write flags are globally
/// forbidden.
///
/// The raw `bool_value` answers "are read-write flags allowed", so the
/// exposed gate is its logical negation.
pub fn read_only_gate(workdir: &Path) -> Result<bool, ResolveError> {
    let path = workdir.join(POLICY_FILE);
    let content = fs::read_to_string(&path).map_err(|e| ResolveError::CorruptRequiredFile {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let mut gate = false;
    let mut scan = Scan::Outside;

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if line.starts_with("name:") {
            if field_value(line) != POLICY_SENTINEL {
                return Err(corrupt(&path, "unexpected flag name"));
            }
            continue;
        }

        if line.starts_with("value: {") {
            if scan == Scan::InValueBlock {
                return Err(corrupt(&path, "nested 'value: {' block"));
            }
            scan = Scan::InValueBlock;
            continue;
        }

        if line.starts_with('}') {
            if scan == Scan::Outside {
                return Err(corrupt(&path, "unmatched '}'"));
            }
            scan = Scan::Outside;
            continue;
        }

        if scan == Scan::InValueBlock && line.starts_with("bool_value:") {
            gate = !normalize_state(field_value(line));
        }
    }

    Ok(gate)
}

fn corrupt(path: &Path, reason: &str) -> ResolveError {
    ResolveError::CorruptRequiredFile { path: path.to_path_buf(), reason: reason.to_string() }
}
