//! core::graph
//!
//! Commit graph representation and construction.
//!
//! # Architecture
//!
//! The commit graph is a DAG where:
//! - Nodes are commits, keyed by [`Oid`]
//! - Edges run from parent to child and are stored symmetrically: every
//!   edge appears in the parent's child-set and the child's parent-set
//! - Discovery starts from branch heads and follows parent edges
//!
//! Nodes hold each other's identifiers rather than references, so the
//! structure is a plain id-indexed map with no ownership cycles.
//!
//! # Invariants
//!
//! - Reachability closure: every oid appearing in any node's parent-set or
//!   child-set is itself a key in the graph
//! - Each commit object is decoded at most once during construction
//! - Nodes are created lazily on first reference and never removed

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::types::{BranchName, Oid};

/// Source of commit parent information.
///
/// This is the seam between the pure graph construction in `core` and the
/// on-disk object database in [`crate::git`]. The object database implements
/// it by decoding loose objects; tests implement it with in-memory maps.
pub trait CommitSource {
    /// Error produced when a commit cannot be decoded.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the parent oids of `oid`, in the order the commit lists them.
    ///
    /// A root commit has no parents; a merge commit has several.
    fn commit_parents(&self, oid: &Oid) -> Result<Vec<Oid>, Self::Error>;
}

/// A single commit and its adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitNode {
    oid: Oid,
    parents: BTreeSet<Oid>,
    children: BTreeSet<Oid>,
}

impl CommitNode {
    fn new(oid: Oid) -> Self {
        Self {
            oid,
            parents: BTreeSet::new(),
            children: BTreeSet::new(),
        }
    }

    /// The commit's own oid.
    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    /// The commits this commit directly descends from.
    pub fn parents(&self) -> &BTreeSet<Oid> {
        &self.parents
    }

    /// The commits that directly descend from this commit.
    pub fn children(&self) -> &BTreeSet<Oid> {
        &self.children
    }

    /// Whether `oid` is a direct parent of this commit.
    pub fn has_parent(&self, oid: &Oid) -> bool {
        self.parents.contains(oid)
    }
}

/// The commit DAG reachable from a set of branch heads.
///
/// Iteration order over [`CommitGraph::oids`] is the order in which commits
/// were first discovered, which makes downstream processing deterministic
/// even though lookups go through a hash map.
#[derive(Debug, Default, Clone)]
pub struct CommitGraph {
    nodes: HashMap<Oid, CommitNode>,
    discovery: Vec<Oid>,
}

impl CommitGraph {
    /// Create an empty commit graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph of all commits reachable from `heads`.
    ///
    /// Performs a depth-first traversal with an explicit work-list seeded
    /// with every head oid. Each reachable commit is decoded exactly once;
    /// its parent edges are recorded symmetrically and unvisited parents are
    /// pushed for later processing. An already-visited node may still gain
    /// children when a later commit names it as a parent.
    ///
    /// # Errors
    ///
    /// Propagates the source's error if any reachable commit cannot be
    /// decoded. No partial graph is returned.
    pub fn build<S: CommitSource>(
        heads: &BTreeMap<BranchName, Oid>,
        source: &S,
    ) -> Result<Self, S::Error> {
        let mut graph = Self::new();
        let mut visited: HashSet<Oid> = HashSet::new();
        let mut stack: Vec<Oid> = heads.values().cloned().collect();

        while let Some(oid) = stack.pop() {
            if !visited.insert(oid.clone()) {
                continue;
            }
            graph.ensure_node(&oid);

            for parent in source.commit_parents(&oid)? {
                if !visited.contains(&parent) {
                    stack.push(parent.clone());
                }
                graph.ensure_node(&parent);
                graph.add_edge(&parent, &oid);
            }
        }

        Ok(graph)
    }

    /// Ensure a node exists for `oid`, creating it lazily.
    pub fn ensure_node(&mut self, oid: &Oid) {
        if !self.nodes.contains_key(oid) {
            self.nodes
                .insert(oid.clone(), CommitNode::new(oid.clone()));
            self.discovery.push(oid.clone());
        }
    }

    /// Record a parent/child edge symmetrically.
    ///
    /// Both endpoints are created if absent, preserving the closure
    /// invariant.
    pub fn add_edge(&mut self, parent: &Oid, child: &Oid) {
        self.ensure_node(parent);
        self.ensure_node(child);
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.insert(child.clone());
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parents.insert(parent.clone());
        }
    }

    /// Look up a node by oid.
    pub fn node(&self, oid: &Oid) -> Option<&CommitNode> {
        self.nodes.get(oid)
    }

    /// Whether the graph contains `oid`.
    pub fn contains(&self, oid: &Oid) -> bool {
        self.nodes.contains_key(oid)
    }

    /// Number of commits in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All oids in discovery order.
    pub fn oids(&self) -> impl Iterator<Item = &Oid> {
        self.discovery.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// In-memory commit source for tests.
    struct MapSource(HashMap<Oid, Vec<Oid>>);

    impl MapSource {
        fn new(commits: &[(&Oid, &[&Oid])]) -> Self {
            let mut map = HashMap::new();
            for (oid, parents) in commits {
                map.insert(
                    (*oid).clone(),
                    parents.iter().map(|p| (*p).clone()).collect(),
                );
            }
            Self(map)
        }
    }

    impl CommitSource for MapSource {
        type Error = Infallible;

        fn commit_parents(&self, oid: &Oid) -> Result<Vec<Oid>, Infallible> {
            Ok(self.0.get(oid).cloned().unwrap_or_default())
        }
    }

    fn oid(fill: char) -> Oid {
        Oid::new(std::iter::repeat(fill).take(40).collect::<String>()).unwrap()
    }

    fn heads(entries: &[(&str, &Oid)]) -> BTreeMap<BranchName, Oid> {
        entries
            .iter()
            .map(|(name, oid)| (BranchName::new(*name).unwrap(), (*oid).clone()))
            .collect()
    }

    fn assert_closed(graph: &CommitGraph) {
        for oid in graph.oids() {
            let node = graph.node(oid).unwrap();
            for parent in node.parents() {
                assert!(graph.contains(parent), "parent {parent} missing from graph");
            }
            for child in node.children() {
                assert!(graph.contains(child), "child {child} missing from graph");
            }
        }
    }

    #[test]
    fn empty_heads_build_empty_graph() {
        let source = MapSource::new(&[]);
        let graph = CommitGraph::build(&heads(&[]), &source).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn linear_history_builds_chain() {
        let (c, b, a) = (oid('c'), oid('b'), oid('a'));
        let source = MapSource::new(&[(&c, &[&b][..]), (&b, &[&a][..]), (&a, &[][..])]);
        let graph = CommitGraph::build(&heads(&[("main", &c)]), &source).unwrap();

        assert_eq!(graph.len(), 3);
        assert!(graph.node(&c).unwrap().has_parent(&b));
        assert!(graph.node(&b).unwrap().has_parent(&a));
        assert!(graph.node(&a).unwrap().children().contains(&b));
        assert!(graph.node(&a).unwrap().parents().is_empty());
        assert_closed(&graph);
    }

    #[test]
    fn edges_are_recorded_symmetrically() {
        let (child, parent) = (oid('c'), oid('b'));
        let source = MapSource::new(&[(&child, &[&parent][..]), (&parent, &[][..])]);
        let graph = CommitGraph::build(&heads(&[("main", &child)]), &source).unwrap();

        assert!(graph.node(&child).unwrap().parents().contains(&parent));
        assert!(graph.node(&parent).unwrap().children().contains(&child));
    }

    #[test]
    fn merge_commit_records_all_parents() {
        let (h, p1, p2) = (oid('d'), oid('1'), oid('2'));
        let source = MapSource::new(&[(&h, &[&p1, &p2][..]), (&p1, &[][..]), (&p2, &[][..])]);
        let graph = CommitGraph::build(&heads(&[("main", &h)]), &source).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.node(&h).unwrap().parents().len(), 2);
        assert!(graph.node(&p1).unwrap().children().contains(&h));
        assert!(graph.node(&p2).unwrap().children().contains(&h));
        assert_closed(&graph);
    }

    #[test]
    fn shared_root_reached_from_two_heads() {
        let (m, f, r) = (oid('3'), oid('4'), oid('5'));
        let source = MapSource::new(&[(&m, &[&r][..]), (&f, &[&r][..]), (&r, &[][..])]);
        let graph =
            CommitGraph::build(&heads(&[("main", &m), ("feature", &f)]), &source).unwrap();

        assert_eq!(graph.len(), 3);
        let root = graph.node(&r).unwrap();
        assert!(root.children().contains(&m));
        assert!(root.children().contains(&f));
        assert_closed(&graph);
    }

    #[test]
    fn two_branches_on_same_head_decode_once() {
        let c = oid('6');
        let source = MapSource::new(&[(&c, &[][..])]);
        let graph = CommitGraph::build(&heads(&[("main", &c), ("dev", &c)]), &source).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn cyclic_source_still_terminates() {
        // Corrupt stores can name descendants as parents; construction must
        // not loop even though sorting will later reject the graph.
        let (a, b) = (oid('a'), oid('b'));
        let source = MapSource::new(&[(&a, &[&b][..]), (&b, &[&a][..])]);
        let graph = CommitGraph::build(&heads(&[("main", &a)]), &source).unwrap();

        assert_eq!(graph.len(), 2);
        assert!(graph.node(&a).unwrap().has_parent(&b));
        assert!(graph.node(&b).unwrap().has_parent(&a));
    }

    #[test]
    fn discovery_order_is_deterministic() {
        let (m, f, r) = (oid('3'), oid('4'), oid('5'));
        let source = MapSource::new(&[(&m, &[&r][..]), (&f, &[&r][..]), (&r, &[][..])]);
        let h = heads(&[("main", &m), ("feature", &f)]);

        let first: Vec<Oid> = CommitGraph::build(&h, &source).unwrap().oids().cloned().collect();
        let second: Vec<Oid> = CommitGraph::build(&h, &source).unwrap().oids().cloned().collect();
        assert_eq!(first, second);
    }
}
