//! String helpers shared by the parsers and the code generator.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Delimiter runs (`-`/`_`) and the character that follows each run.
static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_]+(.)?").unwrap());

/// Convert a delimiter-separated flag identifier to lowerCamelCase.
///
/// Each character following a removed `-`/`_` run is upper-cased and the
/// first character of the result is forced lowercase, so `my_flag` and
/// `my-flag` both become `myFlag`.
pub fn to_camel_case(name: &str) -> String {
    let camel = DELIMITER_RE.replace_all(name, |caps: &Captures<'_>| {
        caps.get(1).map(|m| m.as_str().to_uppercase()).unwrap_or_default()
    });
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Extract the value of a `field: value` line: the text after the first
/// `": "` separator, with surrounding whitespace and quotes stripped.
/// Lines without the separator yield an empty value.
pub fn field_value(line: &str) -> &str {
    line.split_once(": ")
        .map(|(_, value)| value)
        .unwrap_or("")
        .trim()
        .trim_matches('"')
        .trim()
}
