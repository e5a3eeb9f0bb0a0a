use super::Control;
use crate::graph::{Color, Graph, ScratchRecord, TraceRecord, VisitRecord};

/// Cycle detection for directed graphs.
///
/// Both variants stop at the first back edge found; neither enumerates
/// every cycle. Which cycle the reporting variant picks when several exist
/// follows from traversal order and is otherwise unspecified.
pub trait CycleDetection {
    /// Reports whether the graph contains a directed cycle.
    ///
    /// Needs one byte of scratch per node.
    fn find_cycle(&self) -> bool;

    /// Like [`find_cycle`](CycleDetection::find_cycle), but on `true` also
    /// appends the nodes of one cycle to `out`, in closing-to-opening
    /// order: the node whose edge closes the cycle first, the node it
    /// points back to last. On `false`, `out` is left untouched.
    ///
    /// Needs five bytes of scratch per node.
    ///
    /// ```rust
    /// use scratchgraph::{algorithm::*, graph::*};
    ///
    /// let mut g: Graph = Graph::new(3);
    /// g.add_edge(0, 1);
    /// g.add_edge(1, 2);
    /// g.add_edge(2, 0);
    /// let mut cycle = vec![];
    /// assert!(g.find_cycle_path(&mut cycle));
    /// assert_eq!(cycle, vec![2, 1, 0]);
    /// ```
    fn find_cycle_path(&self, out: &mut Vec<usize>) -> bool;
}

impl<const CAP: usize, E> CycleDetection for Graph<CAP, E> {
    fn find_cycle(&self) -> bool {
        let mut found = false;
        self.dfs::<VisitRecord, _, _, _>(
            |_| Control::Continue,
            |_, e| {
                // A back edge: the target is still on the current path.
                if self.scratch::<VisitRecord>(e.target).color() == Color::InProgress {
                    found = true;
                    Control::Stop
                } else {
                    Control::Continue
                }
            },
            |_| Control::Continue,
        );
        found
    }

    fn find_cycle_path(&self, out: &mut Vec<usize>) -> bool {
        let mut found = false;
        self.dfs::<TraceRecord, _, _, _>(
            |_| Control::Continue,
            |u, e| {
                let v = e.target;
                if self.scratch::<TraceRecord>(v).color() == Color::InProgress {
                    found = true;
                    // Walk tree parents from the closing node back to the
                    // one the back edge points at.
                    let mut cur = u;
                    while cur != v {
                        out.push(cur);
                        cur = self.scratch::<TraceRecord>(cur).parent as usize;
                    }
                    out.push(cur);
                    Control::Stop
                } else {
                    Control::Continue
                }
            },
            |_| Control::Continue,
        );
        found
    }
}
