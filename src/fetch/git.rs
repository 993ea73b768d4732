//! Sparse git fetch of the override repository.

use crate::error::ResolveError;
use crate::fetch::{Fetcher, SPARSE_PATHS};
use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::FetchOptions;
use std::path::Path;

/// Shallow-clones the remote and checks out only the override subtrees.
pub struct GitFetcher;

impl Fetcher for GitFetcher {
    fn fetch(&self, remote: &str, destination: &Path) -> Result<(), ResolveError> {
        tracing::info!("Cloning repository: {remote}");

        let mut fetch_options = FetchOptions::new();
        fetch_options.depth(1);

        let mut checkout = CheckoutBuilder::new();
        for subtree in SPARSE_PATHS {
            checkout.path(subtree);
        }

        RepoBuilder::new()
            .fetch_options(fetch_options)
            .with_checkout(checkout)
            .clone(remote, destination)
            .map_err(|e| ResolveError::Fetch(e.message().to_string()))?;

        Ok(())
    }
}
