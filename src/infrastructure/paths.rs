//! Path utilities for configuration values.
//!
//! Configuration accepts tilde-prefixed paths for the catalog and theme
//! files; this module expands them against the user's home directory.

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix pass through unchanged, as do tilde paths
/// when `HOME` is unset (rare, but leaves a usable relative path rather than
/// failing).
///
/// # Examples
///
/// ```
/// use dripcity::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}
