//! Core module - Fixed configuration and the building blocks of a dump
//!
//! This module provides:
//! - The fixed ignore sets and allowed extensions
//! - The file filter predicate
//! - Path normalization utilities
//! - Whole-file text reading
//! - Output document layout
//! - Console progress reporting

pub mod config;
pub mod console;
pub mod file_reader;
pub mod filter;
pub mod paths;
pub mod render;
