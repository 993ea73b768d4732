//! Order command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::variants::variant_order;

#[derive(Args)]
pub struct OrderArgs {
    /// Project root containing aconfig.toml
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub project_root: PathBuf,

    /// Path to config file (aconfig.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show the debug-variant chain instead of the release one
    #[arg(long)]
    pub debuggable: bool,

    /// Extra debug-variant folders appended after the built-in ones
    #[arg(long = "debug-folder", value_name = "NAMES", value_delimiter = ',', num_args = 1..)]
    pub debug_folders: Vec<String>,

    /// Extra release-variant folders appended after the built-in ones
    #[arg(long = "release-folder", value_name = "NAMES", value_delimiter = ',', num_args = 1..)]
    pub release_folders: Vec<String>,
}

pub fn run(args: OrderArgs) -> Result<()> {
    let file_config = load_config(&args.project_root, args.config.as_deref())?;
    let settings = merge_cli_with_config(
        file_config,
        CliOverrides {
            debuggable: if args.debuggable { Some(true) } else { None },
            custom_debug_build_values: args.debug_folders,
            custom_release_build_values: args.release_folders,
            ..CliOverrides::default()
        },
    );

    let folders = variant_order(
        settings.debuggable,
        &settings.custom_debug_build_values,
        &settings.custom_release_build_values,
    );
    for folder in folders {
        println!("{folder}");
    }
    Ok(())
}
