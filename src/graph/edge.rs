/// An outgoing edge: the target node index plus an optional payload.
///
/// The target is a plain index into the owning graph, not a reference.
/// The payload type defaults to `()`, so edges without attached data cost
/// exactly one `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<E = ()> {
    pub target: usize,
    pub payload: E,
}
