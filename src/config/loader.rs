//! Config file loading

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw values read from `aconfig.toml`. Every field is optional; defaults
/// are applied during merging.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Declaration file paths relative to the project root.
    pub aconfig_files: Option<Vec<String>>,
    /// Override repository location (git URL or local directory).
    pub textproto_repo: Option<String>,
    pub debuggable: Option<bool>,
    /// Extra debug-variant folders appended after `userdebug, eng`.
    pub custom_debug_build_values: Option<Vec<String>>,
    /// Extra release-variant folders appended after `user`.
    pub custom_release_build_values: Option<Vec<String>>,
    /// Output root for generated sources, relative to the project root.
    pub output_dir: Option<PathBuf>,
}

/// Load configuration from an explicit path or a discovered `aconfig.toml`.
///
/// An explicitly provided file that fails to parse is an error; a discovered
/// one is logged and replaced with defaults, so a stray config file never
/// breaks a build that did not ask for it.
pub fn load_config(project_root: &Path, config_path: Option<&Path>) -> Result<FileConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(project_root),
    };

    let Some(config_file) = discovered else {
        return Ok(FileConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    match parse_toml_config(&content, &config_file) {
        Ok(config) => Ok(config),
        Err(e) => {
            if config_path_provided {
                return Err(e);
            }
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            Ok(FileConfig::default())
        }
    }
}

/// Parse TOML config, supporting a nested `[aconfig]` table so the keys can
/// live inside a shared project config file.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<FileConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = if let Some(nested) = raw.get("aconfig") { nested.clone() } else { raw };

    config_val
        .try_into()
        .with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn discover_config(project_root: &Path) -> Option<PathBuf> {
    let candidate = project_root.join("aconfig.toml");
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::load_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let temp = TempDir::new().expect("tmp");
        let config = load_config(temp.path(), None).expect("load");
        assert!(config.aconfig_files.is_none());
        assert!(config.textproto_repo.is_none());
    }

    #[test]
    fn flat_table_parses() {
        let temp = TempDir::new().expect("tmp");
        fs::write(
            temp.path().join("aconfig.toml"),
            "textproto_repo = \"https://example.com/release.git\"\naconfig_files = [\"aconfig/config.aconfig\"]\n",
        )
        .expect("write");

        let config = load_config(temp.path(), None).expect("load");
        assert_eq!(config.textproto_repo.as_deref(), Some("https://example.com/release.git"));
        assert_eq!(
            config.aconfig_files,
            Some(vec!["aconfig/config.aconfig".to_string()])
        );
    }

    #[test]
    fn nested_aconfig_table_parses() {
        let temp = TempDir::new().expect("tmp");
        fs::write(
            temp.path().join("aconfig.toml"),
            "[aconfig]\ndebuggable = true\ncustom_debug_build_values = [\"team_x\"]\n",
        )
        .expect("write");

        let config = load_config(temp.path(), None).expect("load");
        assert_eq!(config.debuggable, Some(true));
        assert_eq!(config.custom_debug_build_values, Some(vec!["team_x".to_string()]));
    }

    #[test]
    fn explicit_broken_config_is_an_error() {
        let temp = TempDir::new().expect("tmp");
        let path = temp.path().join("broken.toml");
        fs::write(&path, "not = [valid").expect("write");

        assert!(load_config(temp.path(), Some(&path)).is_err());
    }

    #[test]
    fn discovered_broken_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("tmp");
        fs::write(temp.path().join("aconfig.toml"), "not = [valid").expect("write");

        let config = load_config(temp.path(), None).expect("load");
        assert!(config.textproto_repo.is_none());
    }
}
