//! core
//!
//! Core domain types and pure algorithms for topolog.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Oid, BranchName
//! - [`graph`] - Commit graph construction from branch heads
//! - [`sort`] - Topological ordering with cycle detection
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Algorithms are pure: the object store is reached only through the
//!   [`graph::CommitSource`] seam
//! - All traversal and ordering is deterministic

pub mod graph;
pub mod sort;
pub mod types;
