//! topolog - Topological commit log for Git repositories
//!
//! topolog reconstructs the commit DAG of a Git repository straight from
//! its loose object store and `refs/heads` references, then prints the
//! commits in topological order (children before parents) with branch
//! annotations and sticky `=` markers wherever adjacent output lines are
//! not connected by a parent edge.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses flags, drives the pipeline)
//! - [`core`] - Domain types, graph construction, and topological sorting
//! - [`git`] - Single interface for all repository reads
//! - [`ui`] - Rendering and diagnostics
//!
//! # Correctness Invariants
//!
//! 1. Graph adjacency is always recorded symmetrically
//! 2. The graph is reachability-closed over parent and child sets
//! 3. Sorting never mutates the graph it orders
//! 4. Nothing reaches stdout until the whole pipeline has succeeded

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
