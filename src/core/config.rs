//! Fixed configuration
//!
//! Everything here is constant for the life of the process and is not
//! configurable from the command line.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Name of the dump written into the scanned directory
pub const OUTPUT_FILE: &str = "project_context.txt";

/// Header written at the top of every dump
pub const HEADER: &str = "PROJECT CONTEXT DUMP\n====================\n\n";

/// Directories that are never entered
pub static IGNORE_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules",
        ".git",
        ".next",
        "dist",
        "build",
        ".vscode",
        // mostly images and svgs
        "public",
    ]
    .into_iter()
    .collect()
});

/// Generated or bulky files skipped regardless of extension (exact, case-sensitive)
pub static IGNORE_FILES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "next-env.d.ts",
        ".DS_Store",
        "migration_lock.toml",
        "favicon.ico",
    ]
    .into_iter()
    .collect()
});

/// Allowed extensions, lower-case and without the leading dot
pub static ALLOWED_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["ts", "tsx", "js", "mjs", "json", "prisma", "sql", "css", "md"]
        .into_iter()
        .collect()
});
