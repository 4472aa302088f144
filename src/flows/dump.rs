//! Context dump flow - Walk the project and write every useful file
//!
//! Unreadable files are reported and skipped. Only failing to create or
//! write the output itself aborts the run.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::backends::walk::{ProjectWalk, WalkEvent};
use crate::core::console::Console;
use crate::core::file_reader::read_text;
use crate::core::paths::file_name_lossy;
use crate::core::render::{write_block, write_header};

/// Outcome of a dump run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Files written as blocks
    pub scraped: usize,
    /// Files skipped because their path or content is not UTF-8 text
    pub failed: usize,
}

/// Write the header and one block per useful file under `root` into `out`
pub fn dump_to<W: Write>(root: &Path, out: &mut W, console: &Console) -> Result<DumpSummary> {
    let mut summary = DumpSummary::default();

    write_header(out).context("Failed to write header")?;

    for event in ProjectWalk::new(root) {
        let file = match event {
            Ok(WalkEvent::File(file)) => file,
            Ok(WalkEvent::Pruned(rel_path)) => {
                console.pruned(&rel_path);
                continue;
            }
            Ok(WalkEvent::Rejected(rel_path)) => {
                console.rejected(&rel_path);
                continue;
            }
            Err(err) => {
                console.walk_warning(&err);
                continue;
            }
        };

        let read = file
            .rel_path()
            .and_then(|rel_path| read_text(&file.path).map(|content| (rel_path, content)));
        let (rel_path, content) = match read {
            Ok(read) => read,
            Err(err) => {
                console.read_error(&file.display_path(), &err);
                summary.failed += 1;
                continue;
            }
        };

        write_block(out, &rel_path, &content)
            .with_context(|| format!("Failed to write block for {}", rel_path))?;
        console.scraped(&rel_path);
        summary.scraped += 1;
    }

    Ok(summary)
}

/// Create (or truncate) `output` and dump `root` into it
pub fn run_dump(root: &Path, output: &Path, console: &Console) -> Result<DumpSummary> {
    let output_name = file_name_lossy(output);
    console.start(&output_name);

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {:?}", output))?;
    let mut writer = BufWriter::new(file);

    let summary = dump_to(root, &mut writer, console)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write output file: {:?}", output))?;

    console.success(&output_name, summary.scraped, summary.failed);
    Ok(summary)
}
