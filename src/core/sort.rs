//! core::sort
//!
//! Topological ordering of the commit graph.
//!
//! # Algorithm
//!
//! Kahn-style edge peeling, children before parents. Instead of deep-copying
//! the adjacency sets and dissolving edges, the peel runs over per-node
//! remaining-children counters next to the immutable adjacency, so the
//! caller's graph is left untouched for later lookups.
//!
//! # Determinism
//!
//! Ready nodes are processed FIFO in discovery order. The contract only
//! requires a valid order plus determinism, not any particular tie-break.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;

use super::graph::CommitGraph;
use super::types::Oid;

/// Errors from topological sorting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The commit graph is not a DAG.
    ///
    /// Commit objects are content addressed, so a cycle means the store is
    /// corrupt or adversarial.
    #[error("cycle detected in commit graph: {remaining} commit(s) form a cycle")]
    CycleDetected {
        /// Number of commits left unordered when peeling stalled.
        remaining: usize,
    },
}

/// Order the graph's commits so every commit precedes all of its parents.
///
/// Returns a permutation of the graph's oids. For every recorded edge
/// (parent, child), the child's index in the result is smaller than the
/// parent's.
///
/// # Errors
///
/// Returns [`SortError::CycleDetected`] if no valid order exists. No
/// partial order is returned.
pub fn topo_sort(graph: &CommitGraph) -> Result<Vec<Oid>, SortError> {
    let mut remaining_children: HashMap<&Oid, usize> = graph
        .oids()
        .filter_map(|oid| graph.node(oid).map(|node| (oid, node.children().len())))
        .collect();

    // Heads of the peel: commits nothing currently points to as a parent.
    let mut ready: VecDeque<&Oid> = graph
        .oids()
        .filter(|oid| remaining_children.get(oid) == Some(&0))
        .collect();

    let mut result: Vec<Oid> = Vec::with_capacity(graph.len());
    while let Some(oid) = ready.pop_front() {
        result.push(oid.clone());

        let Some(node) = graph.node(oid) else {
            continue;
        };
        for parent in node.parents() {
            if let Some(count) = remaining_children.get_mut(parent) {
                *count -= 1;
                if *count == 0 {
                    ready.push_back(parent);
                }
            }
        }
    }

    if result.len() < graph.len() {
        return Err(SortError::CycleDetected {
            remaining: graph.len() - result.len(),
        });
    }
    Ok(result)
}
