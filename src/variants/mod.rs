//! Override precedence: the ordered list of build-variant folders.
//!
//! Later folders override earlier ones for the same flag name, so this order
//! is the merge precedence used by the override engine.

/// Release-train folders always consulted first, in this exact order.
const BASELINE: [&str; 8] = ["root", "ap2a", "ap3a", "ap4a", "bp1a", "bp2a", "bp3a", "bp4a"];

/// Build the ordered folder chain for one resolution run.
///
/// Debuggable builds consult `userdebug` then `eng` after the baseline,
/// followed by any caller-supplied debug folders; release builds consult
/// `user` followed by the caller's release folders.
pub fn variant_order(
    debuggable: bool,
    debug_extras: &[String],
    release_extras: &[String],
) -> Vec<String> {
    let mut folders: Vec<String> = BASELINE.iter().map(|s| s.to_string()).collect();
    if debuggable {
        folders.push("userdebug".to_string());
        folders.push("eng".to_string());
        folders.extend(debug_extras.iter().cloned());
    } else {
        folders.push("user".to_string());
        folders.extend(release_extras.iter().cloned());
    }
    folders
}
