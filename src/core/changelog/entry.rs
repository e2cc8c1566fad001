//! core::changelog::entry
//!
//! Entry-line formatting.

/// Render a (module, message) pair into the canonical entry text.
///
/// Recognized library modules get square brackets, everything else (scripts,
/// build files, docs) gets parentheses:
///
/// ```
/// use caretaker::core::changelog::format_entry;
///
/// let modules = vec!["Types".to_string(), "Utils".to_string()];
/// assert_eq!(format_entry(&modules, "Types", "add slices"), "**[ Types ]** add slices");
/// assert_eq!(format_entry(&modules, "Scripts", "fix bump"), "**( Scripts )** fix bump");
/// ```
///
/// Module matching is case-sensitive. The message passes through verbatim -
/// no escaping, embedded markdown included.
pub fn format_entry(recognized: &[String], module: &str, message: &str) -> String {
    if recognized.iter().any(|m| m == module) {
        format!("**[ {module} ]** {message}")
    } else {
        format!("**( {module} )** {message}")
    }
}
