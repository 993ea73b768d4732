//! Copying override subtrees from a local directory.

use crate::error::ResolveError;
use crate::fetch::{Fetcher, SPARSE_PATHS};
use std::fs;
use std::path::Path;

/// Copies the required subtrees from a directory on the local filesystem.
/// Used when the configured repository location is a path rather than a URL.
pub struct LocalFetcher;

impl Fetcher for LocalFetcher {
    fn fetch(&self, remote: &str, destination: &Path) -> Result<(), ResolveError> {
        let source = Path::new(remote);
        tracing::info!("Copying override tree from {}", source.display());
        for subtree in SPARSE_PATHS {
            let from = source.join(subtree);
            if from.is_dir() {
                copy_tree(&from, &destination.join(subtree))
                    .map_err(|e| ResolveError::Fetch(e.to_string()))?;
            }
        }
        Ok(())
    }
}

fn copy_tree(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
