//! CLI/file/defaults merging

use super::FileConfig;
use std::path::PathBuf;

/// Declaration path assumed when neither the CLI nor the config file names
/// any.
pub const DEFAULT_ACONFIG_FILE: &str = "aconfig/config.aconfig";

/// Default output root for generated sources, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated/source/aconfig";

/// Values taken from CLI arguments. `None`/empty means "not supplied";
/// booleans only override when set.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub aconfig_files: Vec<String>,
    pub textproto_repo: Option<String>,
    pub debuggable: Option<bool>,
    pub custom_debug_build_values: Vec<String>,
    pub custom_release_build_values: Vec<String>,
    pub output_dir: Option<PathBuf>,
}

/// Fully merged settings for one run.
#[derive(Debug)]
pub struct Settings {
    pub aconfig_files: Vec<String>,
    pub textproto_repo: Option<String>,
    pub debuggable: bool,
    pub custom_debug_build_values: Vec<String>,
    pub custom_release_build_values: Vec<String>,
    pub output_dir: PathBuf,
}

pub fn merge_cli_with_config(file: FileConfig, cli: CliOverrides) -> Settings {
    let aconfig_files = if !cli.aconfig_files.is_empty() {
        cli.aconfig_files
    } else {
        file.aconfig_files
            .unwrap_or_else(|| vec![DEFAULT_ACONFIG_FILE.to_string()])
    };

    let custom_debug_build_values = if !cli.custom_debug_build_values.is_empty() {
        cli.custom_debug_build_values
    } else {
        file.custom_debug_build_values.unwrap_or_default()
    };

    let custom_release_build_values = if !cli.custom_release_build_values.is_empty() {
        cli.custom_release_build_values
    } else {
        file.custom_release_build_values.unwrap_or_default()
    };

    Settings {
        aconfig_files,
        textproto_repo: cli.textproto_repo.or(file.textproto_repo),
        debuggable: cli.debuggable.or(file.debuggable).unwrap_or(false),
        custom_debug_build_values,
        custom_release_build_values,
        output_dir: cli
            .output_dir
            .or(file.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    }
}
