//! Failure taxonomy for a resolution run.
//!
//! Every variant except [`ResolveError::MissingFile`] aborts the whole run;
//! a missing declaration file is logged and skipped by the caller.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::POLICY_SENTINEL;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// An individual declaration path does not exist or cannot be read.
    /// Non-fatal: the caller logs and skips the path.
    #[error("no aconfig file found at {}", .0.display())]
    MissingFile(PathBuf),

    /// Every supplied declaration path was missing.
    #[error("no aconfig files found at {0:?}")]
    NoDeclarations(Vec<String>),

    #[error("malformed aconfig file {}: {reason}", .path.display())]
    MalformedDeclaration { path: PathBuf, reason: String },

    /// The fetch collaborator failed; carries its diagnostic verbatim.
    #[error("failed to fetch override repository: {0}")]
    Fetch(String),

    /// An override file names a package no declaration file declares.
    #[error("package name '{package}' in {file} does not match the package name in any aconfig file")]
    PackageMismatch { file: String, package: String },

    #[error("invalid permission '{permission}' for {flag}")]
    InvalidPermission { flag: String, permission: String },

    #[error("read-write flag '{flag}' is not allowed, it is disabled by flag '{}'", POLICY_SENTINEL)]
    WriteFlagForbidden { flag: String },

    /// The policy-gate file is absent, unreadable, or structurally wrong.
    #[error("required file {} is missing or corrupted: {reason}", .path.display())]
    CorruptRequiredFile { path: PathBuf, reason: String },

    #[error("error writing generated source {}", .path.display())]
    GenerationIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
