//! ui::render
//!
//! Renders a topological ordering as line-oriented text with sticky
//! markers.
//!
//! # Output grammar
//!
//! - commit line: `<hash>[ <branch1> <branch2> ...]` with branch names
//!   sorted lexicographically
//! - when the next commit in the order is not a parent of the current one,
//!   the chain breaks: `<parent-hashes>=` is emitted, then a blank line
//! - when a chain resumes after a break, `=<child-hashes>` of the resuming
//!   commit is emitted first
//!
//! The markers let a linear reading of the output reconstruct the graph's
//! edges even though the order need not be a single chain.

use std::collections::BTreeMap;

use crate::core::graph::CommitGraph;
use crate::core::types::{BranchName, Oid};

/// Invert a branch-head mapping for output annotation.
///
/// Branch names pointing at the same head are collected together and
/// sorted lexicographically, which is the order commit lines print them.
pub fn branches_by_head(heads: &BTreeMap<BranchName, Oid>) -> BTreeMap<Oid, Vec<BranchName>> {
    let mut by_head: BTreeMap<Oid, Vec<BranchName>> = BTreeMap::new();
    for (name, oid) in heads {
        by_head.entry(oid.clone()).or_default().push(name.clone());
    }
    // BTreeMap iteration already yields names in sorted order, but the
    // contract of this map is "sorted", so make it explicit.
    for names in by_head.values_mut() {
        names.sort();
    }
    by_head
}

/// Render the ordering as output lines.
///
/// `order` must be a permutation of the graph's oids (the sorter's
/// contract); oids without a node are skipped rather than trusted.
pub fn render_ordering(
    graph: &CommitGraph,
    order: &[Oid],
    branches: &BTreeMap<Oid, Vec<BranchName>>,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(order.len());
    let mut jumped = false;

    for (i, oid) in order.iter().enumerate() {
        let Some(node) = graph.node(oid) else {
            continue;
        };

        if jumped {
            jumped = false;
            lines.push(format!("={}", join_oids(node.children())));
        }

        lines.push(commit_line(oid, branches.get(oid)));

        if let Some(next) = order.get(i + 1) {
            if !node.has_parent(next) {
                jumped = true;
                lines.push(format!("{}=", join_oids(node.parents())));
                lines.push(String::new());
            }
        }
    }

    lines
}

/// Format one commit line: the hash, then any branch names.
fn commit_line(oid: &Oid, branches: Option<&Vec<BranchName>>) -> String {
    let mut line = oid.as_str().to_string();
    if let Some(names) = branches {
        for name in names {
            line.push(' ');
            line.push_str(name.as_str());
        }
    }
    line
}

/// Space-join a set of oids.
fn join_oids<'a>(oids: impl IntoIterator<Item = &'a Oid>) -> String {
    oids.into_iter()
        .map(Oid::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
