//! Helpers for validating server-provided names used in local paths.

/// Characters Windows refuses in file names.
const RESERVED: &[char] = &[':', '*', '?', '"', '<', '>', '|'];

/// Checks a platform `fs_slug` or ROM `file_name` before it becomes one
/// directory level under the ROM root.
///
/// Both come straight from the server, so a name is refused when it could
/// leave its directory (`..`, a slash or backslash), when it is blank, or when
/// a FAT or Windows card would reject or silently rename it (control
/// characters, reserved punctuation, a trailing dot or space).
pub fn is_safe_path_component(name: &str) -> bool {
    match name {
        "" | "." | ".." => false,
        _ if name.ends_with(['.', ' ']) => false,
        _ => !name
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control() || RESERVED.contains(&c)),
    }
}
