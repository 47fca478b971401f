//! Relative asset names and how frontends locate them.

/// Typeface used for the decorative text.
pub const FONT: &str = "droid_serif_regular.typeface.json";

/// Join a base location (URL prefix or directory) with a relative asset
/// name. An empty base leaves the name relative to the current page or
/// working directory.
pub fn resolve(base: &str, name: &str) -> String {
    let name = name.trim_start_matches('/');
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}/{name}")
    }
}
