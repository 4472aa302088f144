//! Flows module - End-to-end runs built from core and backends
//!
//! Provides:
//! - dump: Walk the project and write the context document

pub mod dump;
