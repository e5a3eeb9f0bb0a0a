//! Structural analysis for directed graphs with caller-sized per-node
//! scratch memory.
//!
//! # Per-node scratch
//!
//! Graph algorithms need a little working state per node while they run:
//! a visitation color, sometimes a parent link. Most libraries bake the
//! maximal bookkeeping structure into every node. Here the graph instead
//! reserves a fixed scratch buffer of `CAP` bytes per node, and each
//! algorithm overlays its own small record onto that buffer. A graph used
//! only for cycle checks can get away with `CAP = 1`; asking an algorithm
//! for more scratch than the graph reserved is rejected at compile time,
//! never mid-traversal.
//!
//! Both shipped algorithms — cycle detection and topological sort — are
//! thin callback policies over one depth-first-search engine, so the whole
//! crate stays O(V+E).
//!
//! ```rust
//! use scratchgraph::{algorithm::*, graph::*};
//!
//! let mut g: Graph = Graph::new(3);
//! g.add_edge(0, 1);
//! g.add_edge(1, 2);
//! g.add_edge(2, 0);
//!
//! assert!(g.find_cycle());
//! let mut cycle = vec![];
//! assert!(g.find_cycle_path(&mut cycle));
//! assert_eq!(cycle, vec![2, 1, 0]);
//!
//! let mut order = vec![];
//! assert!(!g.topo_sort(&mut order));
//! ```

pub mod algorithm;
pub mod graph;
