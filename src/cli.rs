//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use crate::core::config::OUTPUT_FILE;
use crate::core::console::{Console, Verbosity};
use crate::flows::dump::run_dump;

/// ctxdump - dump a project's source files into a single context document.
#[derive(Parser, Debug)]
#[command(name = "ctxdump")]
#[command(
    author,
    version,
    about,
    long_about = r#"ctxdump walks the current directory and writes every useful source file
into project_context.txt, ready to paste into a prompt.

Noise directories (node_modules, .git, .next, dist, build, .vscode, public) are
never entered. Lock files and other generated files are skipped. Only files with
a known source extension (.ts .tsx .js .mjs .json .prisma .sql .css .md) are kept.

The output file is overwritten on every run. Files that cannot be read as UTF-8
text are reported and skipped; the run still succeeds.

Examples:
    ctxdump
    ctxdump --quiet
    ctxdump --verbose --no-color
"#
)]
pub struct Cli {
    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no per-file lines).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Suppress the per-file 'Scraped:' lines. Read errors and the final\n\
success message are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (report pruned directories and skipped files).
    #[arg(
        short,
        long,
        long_help = "Also report every pruned directory, every file rejected by the\n\
name/extension filter, and the final file counts."
    )]
    pub verbose: bool,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Run the dump over the current working directory
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let console = Console::new(cli.verbosity());
    let root = Path::new(".");
    let output = root.join(OUTPUT_FILE);

    run_dump(root, &output, &console)?;
    Ok(())
}
