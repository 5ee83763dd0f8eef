//! Array-backed quadtree over 2-D point masses with Barnes-Hut force
//! evaluation.
//!
//! Nodes live in parallel arrays indexed by a dense [`NodeId`]; the root is
//! slot `0` and its box never changes. Leaves hold at most one point. Every
//! internal node carries the mass and center of mass of its subtree, kept
//! current after each insertion so force queries can read any ancestor.

mod api;
mod config;
mod force;
mod insert;
mod storage;
mod types;

pub use config::*;
pub use types::{BodyId, NodeId, NodeView, NO_BODY, NO_NODE, ROOT};

use common::shapes::Rectangle;
use storage::NodeStorage;

pub struct QuadTree {
    bounds: Rectangle,
    config: Config,
    eps: f32,
    storage: NodeStorage,
    // Live node count; ids at or above it are never read.
    count: usize,
    // Leaf currently holding each body, indexed by `BodyId`.
    body_leaf: Vec<NodeId>,
}
