//! cli
//!
//! Command-line interface layer for topolog.
//!
//! # Responsibilities
//!
//! - Parse flags
//! - Drive the pipeline: discover repository, enumerate branches, build the
//!   commit graph, sort, render
//! - Print the rendered lines to stdout
//!
//! The layer is thin: all real work happens in [`crate::git`],
//! [`crate::core`], and [`crate::ui`]. Nothing is printed to stdout until
//! the whole pipeline has succeeded, so failures never leave partial,
//! misleading output behind.

pub mod args;

pub use args::Cli;

use std::io::Write;

use anyhow::Result;

use crate::core::graph::CommitGraph;
use crate::core::sort::topo_sort;
use crate::git::{discover_git_dir, list_branches, ObjectDatabase};
use crate::ui::output::{self, Verbosity};
use crate::ui::render::{branches_by_head, render_ordering};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let start = match &cli.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let git_dir = discover_git_dir(&start)?;
    output::debug(format!("git directory: {}", git_dir.display()), verbosity);

    let heads = list_branches(&git_dir)?;
    output::debug(format!("{} branch(es) found", heads.len()), verbosity);

    let odb = ObjectDatabase::open(&git_dir);
    let graph = CommitGraph::build(&heads, &odb)?;
    output::debug(format!("{} commit(s) reachable", graph.len()), verbosity);

    let order = topo_sort(&graph)?;
    let lines = render_ordering(&graph, &order, &branches_by_head(&heads));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
