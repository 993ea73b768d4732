//! Generation of per-package `Flags.java` accessor classes.

use crate::domain::{GeneratedFile, ResolvedPackage};
use crate::utils::to_camel_case;
use std::fmt::Write;
use std::path::PathBuf;

/// Render one `Flags.java` per package. Output depends only on the resolved
/// state, so identical inputs produce byte-identical files.
pub fn render_packages(packages: &[ResolvedPackage]) -> Vec<GeneratedFile> {
    packages.iter().map(render_package).collect()
}

fn render_package(package: &ResolvedPackage) -> GeneratedFile {
    let mut class = String::new();
    let _ = writeln!(class, "package {};", package.package_name);
    class.push('\n');
    class.push_str("public class Flags {\n");
    for flag in &package.flags {
        let _ = writeln!(
            class,
            "    public static boolean {}() {{\n        return {};\n    }}",
            to_camel_case(&flag.name),
            flag.state
        );
    }
    class.push_str("}\n");

    // com.example.app -> com/example/app/Flags.java
    let mut relative_path: PathBuf = package.package_name.split('.').collect();
    relative_path.push("Flags.java");

    GeneratedFile { relative_path, content: class }
}
