//! Parsing of local `.aconfig` flag declaration files.
//!
//! A declaration file names one package and lists its flags:
//!
//! ```text
//! package: "com.example.app"
//!
//! flag {
//!     name: "my_flag"
//!     description: "..."
//! }
//! ```
//!
//! Only `package:`, `flag {`, `}` and (inside a flag block) `name:` lines are
//! recognized; everything else is ignored.

use crate::domain::FlagDeclaration;
use crate::error::ResolveError;
use crate::utils::field_value;
use std::fs;
use std::path::Path;

#[derive(Debug, PartialEq)]
enum Scan {
    Outside,
    InFlagBlock,
}

/// Parse every declaration path relative to `project_root`, logging and
/// skipping paths that do not exist. Fails if nothing could be parsed at all.
pub fn collect_declarations(
    project_root: &Path,
    paths: &[String],
) -> Result<Vec<FlagDeclaration>, ResolveError> {
    let mut declarations = Vec::new();
    for relative in paths {
        match parse_declaration(&project_root.join(relative)) {
            Ok(declaration) => declarations.push(declaration),
            Err(ResolveError::MissingFile(path)) => {
                tracing::warn!("No aconfig file found at {}", path.display());
            }
            Err(other) => return Err(other),
        }
    }
    if declarations.is_empty() {
        return Err(ResolveError::NoDeclarations(paths.to_vec()));
    }
    Ok(declarations)
}

/// Parse a single declaration file into a [`FlagDeclaration`].
pub fn parse_declaration(path: &Path) -> Result<FlagDeclaration, ResolveError> {
    let content =
        fs::read_to_string(path).map_err(|_| ResolveError::MissingFile(path.to_path_buf()))?;
    parse_declaration_content(&content, path)
}

fn parse_declaration_content(
    content: &str,
    path: &Path,
) -> Result<FlagDeclaration, ResolveError> {
    let mut package_name: Option<String> = None;
    let mut flags = Vec::new();
    let mut scan = Scan::Outside;

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if line.starts_with("package:") {
            // First occurrence wins; well-formed files only have one.
            if package_name.is_none() {
                package_name = Some(field_value(line).to_string());
            }
            continue;
        }

        if line.starts_with("flag {") {
            if scan == Scan::InFlagBlock {
                return Err(malformed(path, "nested 'flag {' block"));
            }
            scan = Scan::InFlagBlock;
            continue;
        }

        if line.starts_with('}') {
            if scan == Scan::Outside {
                return Err(malformed(path, "unmatched '}'"));
            }
            scan = Scan::Outside;
            continue;
        }

        if scan == Scan::InFlagBlock && line.starts_with("name:") {
            flags.push(field_value(line).to_string());
        }
    }

    match package_name {
        Some(package_name) => Ok(FlagDeclaration { package_name, flags }),
        None => Err(malformed(path, "no 'package:' line found")),
    }
}

fn malformed(path: &Path, reason: &str) -> ResolveError {
    ResolveError::MalformedDeclaration { path: path.to_path_buf(), reason: reason.to_string() }
}
