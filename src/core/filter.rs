//! File filter
//!
//! Decides from a bare name alone whether a file belongs in the dump, and
//! whether a directory is pruned from the walk. No content is inspected.

use std::path::Path;

use crate::core::config::{ALLOWED_EXTENSIONS, IGNORE_DIRS, IGNORE_FILES};

/// Check whether a file with this bare name should be dumped
///
/// Ignored names are matched exactly. The extension is compared
/// case-insensitively; a lone leading dot (`.md`, `.eslintrc`) is part of
/// the stem, not an extension.
pub fn is_useful_file(name: &str) -> bool {
    if IGNORE_FILES.contains(name) {
        return false;
    }

    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check whether a directory with this bare name is pruned
pub fn is_ignored_dir(name: &str) -> bool {
    IGNORE_DIRS.contains(name)
}
