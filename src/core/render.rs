//! Renderer module
//!
//! Lays out the dump document: a fixed header followed by one block per file.

use std::io::{self, Write};

use crate::core::config::HEADER;

/// Start marker line for a file block (without newline)
pub fn start_marker(rel_path: &str) -> String {
    format!("--- START OF FILE: {} ---", rel_path)
}

/// End marker line for a file block (without newline)
pub fn end_marker(rel_path: &str) -> String {
    format!("--- END OF FILE: {} ---", rel_path)
}

/// Write the document header
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())
}

/// Write one file block
///
/// The content is written verbatim. A newline always follows it so the end
/// marker starts its own line, then a blank line separates blocks.
pub fn write_block<W: Write>(out: &mut W, rel_path: &str, content: &str) -> io::Result<()> {
    writeln!(out, "{}", start_marker(rel_path))?;
    out.write_all(content.as_bytes())?;
    write!(out, "\n{}\n\n", end_marker(rel_path))
}
