//! Relative path helpers
//!
//! Install records may come from any OS, so both `/` and `\` count as separators.

use std::path::{Component, Path, MAIN_SEPARATOR};

/// Rewrite every `/` and `\` in `path` to the host separator
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

/// Last segment of a relative path, whichever separator it uses
pub fn file_name(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
}

/// Number of path segments, never less than 1
pub fn path_depth(path: &str) -> usize {
    let normalized = normalize_separators(path);
    Path::new(&normalized)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
        .max(1)
}
