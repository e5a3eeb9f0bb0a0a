//! The graph store: nodes, edges, and the per-node scratch machinery.

mod edge;
pub use self::edge::*;
mod scratch;
pub(crate) use self::scratch::*;
mod store;
pub use self::store::*;

#[cfg(test)]
pub(crate) use self::tests::*;
