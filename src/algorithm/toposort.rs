use super::Control;
use crate::graph::{Color, Graph, ScratchRecord, VisitRecord};

/// Topological ordering for directed acyclic graphs.
pub trait TopologicalSort {
    /// Fills `order` with an ordering in which every edge's source comes
    /// before its target, and returns `true`. If the graph has a cycle no
    /// such ordering exists: returns `false` with `order` left empty.
    ///
    /// `order` is cleared first either way; check the return value, not
    /// the output's length.
    ///
    /// Needs one byte of scratch per node.
    ///
    /// ```rust
    /// use scratchgraph::{algorithm::*, graph::*};
    ///
    /// let mut g: Graph = Graph::new(3);
    /// g.add_edge(2, 1);
    /// g.add_edge(1, 0);
    /// let mut order = vec![];
    /// assert!(g.topo_sort(&mut order));
    /// assert_eq!(order, vec![2, 1, 0]);
    /// ```
    fn topo_sort(&self, order: &mut Vec<usize>) -> bool;
}

impl<const CAP: usize, E> TopologicalSort for Graph<CAP, E> {
    fn topo_sort(&self, order: &mut Vec<usize>) -> bool {
        order.clear();
        let mut cyclic = false;
        self.dfs::<VisitRecord, _, _, _>(
            |_| Control::Continue,
            |_, e| {
                if self.scratch::<VisitRecord>(e.target).color() == Color::InProgress {
                    cyclic = true;
                    Control::Stop
                } else {
                    Control::Continue
                }
            },
            // Nodes finish in reverse topological order.
            |u| {
                order.push(u);
                Control::Continue
            },
        );
        if cyclic {
            order.clear();
            return false;
        }
        order.reverse();
        true
    }
}
