//! Structural analysis, expressed as callback policies over the DFS engine.

mod dfs;
pub(crate) use self::dfs::*;
mod cycle;
pub use self::cycle::*;
mod toposort;
pub use self::toposort::*;
