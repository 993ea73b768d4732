//! Core value types shared across resolution phases.

use std::path::PathBuf;

/// File extension of override files under the fetched tree.
pub const OVERRIDE_EXTENSION: &str = "textproto";

/// Sentinel flag whose value globally forbids read-write flags.
pub const POLICY_SENTINEL: &str = "RELEASE_ACONFIG_REQUIRE_ALL_READ_ONLY";

/// Well-known path of the policy-gate file inside the fetched tree.
pub const POLICY_FILE: &str = "flag_values/bp1a/RELEASE_ACONFIG_REQUIRE_ALL_READ_ONLY.textproto";

/// Subtree of the fetched repository holding per-variant override files.
pub const OVERRIDE_SUBTREE: &str = "aconfig";

/// One parsed `.aconfig` declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDeclaration {
    pub package_name: String,
    /// Flag names in source order; order drives generated accessor order.
    pub flags: Vec<String>,
}

/// A declared flag with its final merged state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFlag {
    pub name: String,
    pub state: bool,
}

/// All flags of one package after merging, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub package_name: String,
    pub flags: Vec<ResolvedFlag>,
}

/// A generated source file, relative to the caller's output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: PathBuf,
    pub content: String,
}
