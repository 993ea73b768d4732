//! Fetching the override repository (git remote or local directory).

use crate::error::ResolveError;
use std::fs;
use std::path::Path;

pub mod git;
pub mod local;

pub use git::GitFetcher;
pub use local::LocalFetcher;

/// Subtrees a fetcher must materialize under the destination: the per-variant
/// override tree and the directory holding the policy-gate file.
pub const SPARSE_PATHS: [&str; 2] = ["aconfig", "flag_values/bp1a"];

/// Capability to populate a local directory with the override subtrees.
///
/// Any failure is fatal to the run; retry policy, if any, belongs to the
/// implementation.
pub trait Fetcher {
    fn fetch(&self, remote: &str, destination: &Path) -> Result<(), ResolveError>;
}

/// Fetch the override tree into `workdir`.
///
/// An existing local directory is copied; anything else is treated as a git
/// remote. The workdir is removed and recreated first so a failed prior run
/// can never leak stale override files into this one.
pub fn fetch_overrides(remote: &str, workdir: &Path) -> Result<(), ResolveError> {
    prepare_workdir(workdir)?;
    if Path::new(remote).is_dir() {
        LocalFetcher.fetch(remote, workdir)
    } else {
        GitFetcher.fetch(remote, workdir)
    }
}

fn prepare_workdir(workdir: &Path) -> Result<(), ResolveError> {
    if workdir.exists() {
        fs::remove_dir_all(workdir).map_err(|e| ResolveError::Fetch(e.to_string()))?;
    }
    fs::create_dir_all(workdir).map_err(|e| ResolveError::Fetch(e.to_string()))?;
    Ok(())
}
