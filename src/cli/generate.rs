//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::render::write_report;
use crate::resolve::{resolve, write_files, ResolveOptions};

/// Scratch directory for the fetched override tree, relative to the project
/// root. Recreated on every run.
const WORKDIR: &str = "build/tempRepo";

#[derive(Args)]
pub struct GenerateArgs {
    /// Project root containing declaration files and aconfig.toml
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub project_root: PathBuf,

    /// Override repository location (git URL or local directory)
    #[arg(short = 'r', long, value_name = "URL")]
    pub repo: Option<String>,

    /// Path to config file (aconfig.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Declaration file paths relative to the project root (repeatable or comma-separated)
    #[arg(short = 'f', long = "aconfig-file", value_name = "PATHS", value_delimiter = ',', num_args = 1..)]
    pub aconfig_files: Vec<String>,

    /// Resolve debug-variant state (consults userdebug and eng folders)
    #[arg(long)]
    pub debuggable: bool,

    /// Extra debug-variant folders appended after the built-in ones
    #[arg(long = "debug-folder", value_name = "NAMES", value_delimiter = ',', num_args = 1..)]
    pub debug_folders: Vec<String>,

    /// Extra release-variant folders appended after the built-in ones
    #[arg(long = "release-folder", value_name = "NAMES", value_delimiter = ',', num_args = 1..)]
    pub release_folders: Vec<String>,

    /// Output root for generated sources (default: build/generated/source/aconfig)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write a JSON resolution report to this path
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Omit the timestamp from the report (reproducible output)
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let file_config = load_config(&args.project_root, args.config.as_deref())?;
    let settings = merge_cli_with_config(
        file_config,
        CliOverrides {
            aconfig_files: args.aconfig_files,
            textproto_repo: args.repo,
            debuggable: if args.debuggable { Some(true) } else { None },
            custom_debug_build_values: args.debug_folders,
            custom_release_build_values: args.release_folders,
            output_dir: args.output_dir,
        },
    );

    let textproto_repo = settings.textproto_repo.context(
        "repo url value is not set, please set it using aconfig.toml or --repo",
    )?;

    let options = ResolveOptions {
        project_root: args.project_root.clone(),
        aconfig_files: settings.aconfig_files.clone(),
        textproto_repo,
        debuggable: settings.debuggable,
        custom_debug_build_values: settings.custom_debug_build_values,
        custom_release_build_values: settings.custom_release_build_values,
        workdir: args.project_root.join(WORKDIR),
    };

    let resolution = resolve(&options)?;

    let output_root = args.project_root.join(&settings.output_dir);
    write_files(&output_root, &resolution.files)?;

    if let Some(report_path) = &args.report {
        write_report(report_path, &resolution, !args.no_timestamp)?;
    }

    tracing::info!(
        "Generated Flags.java for {} package(s) from {:?} and textproto files",
        resolution.packages.len(),
        settings.aconfig_files
    );
    Ok(())
}
