use super::{Edge, ScratchFits, ScratchRecord};
use std::cell::Cell;

/// A directed graph over nodes `0..n`, with `CAP` bytes of scratch per node.
///
/// The structure is append-only: nodes are fixed at construction and edges
/// may only be added, never removed or reordered. Adjacency lists keep
/// insertion order, and insertion order decides traversal order everywhere
/// in this crate.
///
/// `CAP` bounds the scratch record any algorithm may overlay on a node.
/// The default of 8 bytes fits everything shipped here; a graph used only
/// for [`find_cycle`](crate::algorithm::CycleDetection::find_cycle) and
/// [`topo_sort`](crate::algorithm::TopologicalSort::topo_sort) can shrink
/// to `Graph<1>`. An algorithm whose record does not fit fails to compile.
///
/// `E` is the edge payload type; the default `()` adds no storage.
///
/// ```rust
/// use scratchgraph::{algorithm::*, graph::*};
///
/// let mut g = Graph::<1>::new(2);
/// g.add_edge(0, 1);
/// assert!(!g.find_cycle());
/// ```
#[derive(Clone)]
pub struct Graph<const CAP: usize = 8, E = ()> {
    nodes: Vec<Node<CAP, E>>,
}

#[derive(Clone)]
struct Node<const CAP: usize, E> {
    edges: Vec<Edge<E>>,
    scratch: Cell<[u8; CAP]>,
}

impl<const CAP: usize, E> Graph<CAP, E> {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        let mut nodes = Vec::new();
        nodes.resize_with(node_count, || Node {
            edges: vec![],
            scratch: Cell::new([0; CAP]),
        });
        Self { nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Appends an edge from `u` to `v` carrying `payload`.
    ///
    /// Both indices must be in range; this is only checked in debug builds.
    pub fn add_edge_with(&mut self, u: usize, v: usize, payload: E) {
        debug_assert!(u < self.nodes.len());
        debug_assert!(v < self.nodes.len());
        self.nodes[u].edges.push(Edge { target: v, payload });
    }

    /// The outgoing edges of `u`, in insertion order.
    pub fn out_edges(&self, u: usize) -> &[Edge<E>] {
        &self.nodes[u].edges
    }

    /// Overwrites every node's scratch with `R`'s default. Called at the
    /// start of each algorithm invocation; whatever a previous algorithm
    /// left behind is discarded here.
    pub(crate) fn init_scratch<R: ScratchRecord>(&self) {
        let () = ScratchFits::<R, CAP>::CHECK;
        for node in self.nodes.iter() {
            let mut buf = node.scratch.get();
            R::default().store(&mut buf);
            node.scratch.set(buf);
        }
    }

    pub(crate) fn scratch<R: ScratchRecord>(&self, v: usize) -> R {
        R::load(&self.nodes[v].scratch.get())
    }

    pub(crate) fn update_scratch<R, F>(&self, v: usize, f: F)
    where
        R: ScratchRecord,
        F: FnOnce(&mut R),
    {
        let mut buf = self.nodes[v].scratch.get();
        let mut rec = R::load(&buf);
        f(&mut rec);
        rec.store(&mut buf);
        self.nodes[v].scratch.set(buf);
    }
}

impl<const CAP: usize, E: Default> Graph<CAP, E> {
    /// Appends a payload-free edge from `u` to `v`.
    ///
    /// Both indices must be in range; this is only checked in debug builds.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.add_edge_with(u, v, E::default());
    }
}

impl<const CAP: usize, E> std::fmt::Debug for Graph<CAP, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        for (u, node) in self.nodes.iter().enumerate() {
            writeln!(f, "{}:", u)?;
            for e in node.edges.iter() {
                writeln!(f, "  -> {}", e.target)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
