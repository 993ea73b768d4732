//! The resolution pipeline.
//!
//! Phases run strictly in order: parse declarations, build the variant
//! chain, fetch the override tree, evaluate the policy gate, merge
//! overrides, render sources. Any failure past declaration collection
//! aborts the run; nothing is written until resolution has fully completed.

use crate::declarations::collect_declarations;
use crate::domain::{GeneratedFile, ResolvedPackage};
use crate::error::ResolveError;
use crate::fetch::fetch_overrides;
use crate::overrides::{merge_overrides, resolve_flags, OverrideSet};
use crate::policy::read_only_gate;
use crate::render::render_packages;
use crate::variants::variant_order;
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs for one resolution run, supplied by the host.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub project_root: PathBuf,
    /// Declaration file paths relative to the project root.
    pub aconfig_files: Vec<String>,
    /// Override repository location: git URL or local directory.
    pub textproto_repo: String,
    pub debuggable: bool,
    pub custom_debug_build_values: Vec<String>,
    pub custom_release_build_values: Vec<String>,
    /// Scratch directory for the fetched tree; recreated every run.
    pub workdir: PathBuf,
}

/// Everything a run produced. Files are returned rather than written so the
/// host decides where generated sources land.
#[derive(Debug)]
pub struct Resolution {
    /// The variant folder chain that was consulted, in precedence order.
    pub folders: Vec<String>,
    pub packages: Vec<ResolvedPackage>,
    pub files: Vec<GeneratedFile>,
    /// Merged override values with per-flag provenance.
    pub overrides: OverrideSet,
}

pub fn resolve(options: &ResolveOptions) -> Result<Resolution, ResolveError> {
    let declarations = collect_declarations(&options.project_root, &options.aconfig_files)?;
    let folders = variant_order(
        options.debuggable,
        &options.custom_debug_build_values,
        &options.custom_release_build_values,
    );

    fetch_overrides(&options.textproto_repo, &options.workdir)?;

    let gate = read_only_gate(&options.workdir)?;
    let overrides = merge_overrides(&options.workdir, &folders, &declarations, gate)?;
    let packages = resolve_flags(&declarations, &overrides);
    let files = render_packages(&packages);

    Ok(Resolution { folders, packages, files, overrides })
}

/// Write generated modules under `output_root`, creating package directories
/// as needed.
pub fn write_files(output_root: &Path, files: &[GeneratedFile]) -> Result<(), ResolveError> {
    for file in files {
        let path = output_root.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ResolveError::GenerationIo { path: path.clone(), source: e })?;
        }
        fs::write(&path, &file.content)
            .map_err(|e| ResolveError::GenerationIo { path: path.clone(), source: e })?;
    }
    Ok(())
}
