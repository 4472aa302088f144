//! Backends module - Filesystem traversal
//!
//! Provides:
//! - walk: Pruned, ordered project walk with explicit recursion

pub mod walk;
