//! ctxdump - Concatenate a project's source files into one context document
//!
//! ctxdump provides:
//! - A pruned walk of the current directory (noise directories never entered)
//! - A fixed file-name and extension filter
//! - A single plain-text dump with start/end markers per file

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
