use crate::graph::{Color, Edge, Graph, ScratchRecord};

/// Returned by engine callbacks to keep walking or abort the whole
/// traversal, all roots included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Continue,
    Stop,
}

/// One suspended node on the explicit DFS stack: which node, and how far
/// through its adjacency list the walk has advanced.
struct Frame {
    node: usize,
    next_edge: usize,
}

impl<const CAP: usize, E> Graph<CAP, E> {
    /// The one traversal primitive of this crate: a depth-first walk over
    /// the whole graph, with algorithm behavior supplied as callbacks.
    ///
    /// Every node's scratch is reset to `R::default()` first. Roots are
    /// taken in index order, so disconnected components form a forest
    /// visited in index order. Per node `u`:
    ///
    /// - on first entry, `u` turns [`Color::InProgress`] and `pre(u)` runs;
    /// - each outgoing edge `(u, v)` is scanned in insertion order. If `v`
    ///   is unvisited its parent is recorded as `u` (for records that keep
    ///   one) before `edge(u, e)` runs; if `v` is still unvisited
    ///   afterwards, the walk descends into it;
    /// - once all edges are scanned, `u` turns [`Color::Done`] and
    ///   `post(u)` runs. A `Done` node is never entered again.
    ///
    /// [`Control::Stop`] from any callback ends the traversal immediately.
    ///
    /// An explicit stack stands in for call-stack recursion, so the walk
    /// survives graphs whose deepest simple path would overflow the native
    /// stack. Visitation and finishing order match the recursive
    /// formulation exactly.
    pub(crate) fn dfs<R, Pre, Ed, Post>(&self, mut pre: Pre, mut edge: Ed, mut post: Post)
    where
        R: ScratchRecord,
        Pre: FnMut(usize) -> Control,
        Ed: FnMut(usize, &Edge<E>) -> Control,
        Post: FnMut(usize) -> Control,
    {
        self.init_scratch::<R>();
        let mut stack: Vec<Frame> = vec![];
        for root in 0..self.node_count() {
            if self.scratch::<R>(root).color() != Color::Unvisited {
                continue;
            }
            self.update_scratch(root, |r: &mut R| r.set_color(Color::InProgress));
            if pre(root) == Control::Stop {
                return;
            }
            stack.push(Frame {
                node: root,
                next_edge: 0,
            });
            while !stack.is_empty() {
                let top = stack.len() - 1;
                let u = stack[top].node;
                let i = stack[top].next_edge;
                let edges = self.out_edges(u);
                if i == edges.len() {
                    self.update_scratch(u, |r: &mut R| r.set_color(Color::Done));
                    stack.pop();
                    if post(u) == Control::Stop {
                        return;
                    }
                    continue;
                }
                stack[top].next_edge = i + 1;
                let e = &edges[i];
                let v = e.target;
                if self.scratch::<R>(v).color() == Color::Unvisited {
                    self.update_scratch(v, |r: &mut R| r.set_parent(u as u32));
                }
                if edge(u, e) == Control::Stop {
                    return;
                }
                if self.scratch::<R>(v).color() == Color::Unvisited {
                    self.update_scratch(v, |r: &mut R| r.set_color(Color::InProgress));
                    if pre(v) == Control::Stop {
                        return;
                    }
                    stack.push(Frame {
                        node: v,
                        next_edge: 0,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{TraceRecord, VisitRecord};

    fn walk_orders<const CAP: usize>(g: &Graph<CAP>) -> (Vec<usize>, Vec<usize>) {
        let mut pre_order = vec![];
        let mut post_order = vec![];
        g.dfs::<VisitRecord, _, _, _>(
            |u| {
                pre_order.push(u);
                Control::Continue
            },
            |_, _| Control::Continue,
            |u| {
                post_order.push(u);
                Control::Continue
            },
        );
        (pre_order, post_order)
    }

    #[test]
    fn forest_covers_components_in_index_order() {
        let mut g: Graph = Graph::new(5);
        g.add_edge(1, 3);
        g.add_edge(4, 2);
        let (pre_order, post_order) = walk_orders(&g);
        assert_eq!(pre_order, vec![0, 1, 3, 2, 4]);
        assert_eq!(post_order, vec![0, 3, 1, 2, 4]);
    }

    #[test]
    fn edges_scanned_in_insertion_order() {
        let mut g: Graph = Graph::new(4);
        g.add_edge(0, 3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        let mut scanned = vec![];
        g.dfs::<VisitRecord, _, _, _>(
            |_| Control::Continue,
            |u, e| {
                scanned.push((u, e.target));
                Control::Continue
            },
            |_| Control::Continue,
        );
        assert_eq!(scanned, vec![(0, 3), (0, 1), (0, 2)]);
    }

    #[test]
    fn done_nodes_are_never_reentered() {
        // Both 0 and 2 point at 1; it must be entered exactly once.
        let mut g: Graph = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(2, 1);
        let (pre_order, _) = walk_orders(&g);
        assert_eq!(pre_order, vec![0, 1, 2]);
    }

    #[test]
    fn stop_from_pre_halts_every_root() {
        let mut g: Graph = Graph::new(3);
        g.add_edge(2, 0);
        let mut seen = vec![];
        let mut finished = vec![];
        g.dfs::<VisitRecord, _, _, _>(
            |u| {
                seen.push(u);
                if u == 1 {
                    Control::Stop
                } else {
                    Control::Continue
                }
            },
            |_, _| Control::Continue,
            |u| {
                finished.push(u);
                Control::Continue
            },
        );
        assert_eq!(seen, vec![0, 1]);
        assert_eq!(finished, vec![0]);
    }

    #[test]
    fn stop_from_edge_halts_the_walk_mid_node() {
        let mut g: Graph = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        let mut scanned = 0;
        let mut finished = vec![];
        g.dfs::<VisitRecord, _, _, _>(
            |_| Control::Continue,
            |_, _| {
                scanned += 1;
                Control::Stop
            },
            |u| {
                finished.push(u);
                Control::Continue
            },
        );
        assert_eq!(scanned, 1);
        assert_eq!(finished, Vec::<usize>::new());
    }

    #[test]
    fn parent_is_recorded_before_the_edge_callback_runs() {
        let mut g: Graph = Graph::new(2);
        g.add_edge(0, 1);
        let mut checked = false;
        g.dfs::<TraceRecord, _, _, _>(
            |_| Control::Continue,
            |u, e| {
                assert_eq!(g.scratch::<TraceRecord>(e.target).parent, u as u32);
                checked = true;
                Control::Continue
            },
            |_| Control::Continue,
        );
        assert!(checked);
    }
}
