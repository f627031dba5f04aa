//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! topolog takes no positional arguments or subcommands; it always prints
//! the ordering for the repository containing the working directory.
//!
//! # Global Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug traces on stderr
//! - `--quiet` / `-q`: Suppress the informational summary

use clap::Parser;
use std::path::PathBuf;

/// Topological commit log, read straight from the object store
#[derive(Parser, Debug)]
#[command(name = "topolog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if topolog was started in this directory
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Enable debug traces on stderr
    #[arg(long)]
    pub debug: bool,

    /// Suppress the informational summary on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
