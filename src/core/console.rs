//! Console progress reporting
//!
//! One line per event. Progress and read errors go to stdout, traversal
//! warnings to stderr.

use colored::Colorize;

/// How much progress output to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors and the final message only
    Quiet,
    Normal,
    /// Also pruned directories, rejected files and counts
    Verbose,
}

/// Prints progress events for a dump run
#[derive(Debug, Clone, Copy)]
pub struct Console {
    verbosity: Verbosity,
}

impl Console {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn start(&self, output: &str) {
        println!("Starting scrape... Output will be saved to: {}", output);
    }

    pub fn scraped(&self, rel_path: &str) {
        if self.verbosity != Verbosity::Quiet {
            println!("{} {}", "Scraped:".green(), rel_path);
        }
    }

    pub fn read_error(&self, rel_path: &str, err: &dyn std::fmt::Display) {
        println!("{} {}: {}", "Error reading".red(), rel_path, err);
    }

    pub fn walk_warning(&self, err: &dyn std::fmt::Display) {
        eprintln!("{} {}", "Warning:".yellow(), err);
    }

    pub fn pruned(&self, rel_path: &str) {
        if self.verbosity == Verbosity::Verbose {
            println!("{} {}/", "Pruned:".dimmed(), rel_path);
        }
    }

    pub fn rejected(&self, rel_path: &str) {
        if self.verbosity == Verbosity::Verbose {
            println!("{} {}", "Skipped:".dimmed(), rel_path);
        }
    }

    pub fn success(&self, output: &str, scraped: usize, failed: usize) {
        println!();
        println!(
            "{} All useful info is in '{}'.",
            "Success!".green().bold(),
            output
        );
        if self.verbosity == Verbosity::Verbose {
            println!("   Files: {} written, {} unreadable", scraped, failed);
        }
    }
}
