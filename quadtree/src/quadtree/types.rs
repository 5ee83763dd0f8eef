use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{PointMass, Rectangle};
use smallvec::SmallVec;

/// Dense, append-only index into the node arrays. The root is always `0`.
pub type NodeId = u32;
/// Stable handle for an inserted point, assigned in insertion order.
pub type BodyId = u32;

pub const ROOT: NodeId = 0;
pub const NO_NODE: NodeId = u32::MAX;
pub const NO_BODY: BodyId = u32::MAX;
pub(crate) const NO_POSITION: f32 = f32::NAN;
pub(crate) const NO_MASS: f32 = 0.0;
pub(crate) const NO_CHILDREN: [NodeId; 4] = [NO_NODE; 4];

// Deepest chain of splits tried when separating two nearby points.
pub(crate) const MAX_SPLIT_DEPTH: usize = 128;

pub(crate) type NodeStack = SmallVec<[NodeId; 64]>;

/// Read-only snapshot of one live node, for renderers and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeView {
    pub id: NodeId,
    pub bounds: Rectangle,
    pub is_leaf: bool,
    /// The point stored at this leaf, `None` for empty leaves and internal nodes.
    pub resident: Option<PointMass>,
    /// Aggregate mass of the subtree, `0.0` when empty.
    pub mass: f32,
    pub center_of_mass: Option<(f32, f32)>,
    pub children: Option<[NodeId; 4]>,
    pub parent: Option<NodeId>,
}

#[inline(always)]
pub(crate) fn validate_bounds(bounds: &Rectangle) -> QuadtreeResult<()> {
    let finite = bounds.x.is_finite()
        && bounds.y.is_finite()
        && bounds.width.is_finite()
        && bounds.height.is_finite();
    if !finite || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Err(QuadtreeError::InvalidBounds {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn validate_config_value(field: &'static str, value: f32) -> QuadtreeResult<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(QuadtreeError::InvalidConfig { field, value });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn validate_point(x: f32, y: f32) -> QuadtreeResult<()> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(QuadtreeError::NonFinitePoint { x, y });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn validate_mass(mass: f32) -> QuadtreeResult<()> {
    if !(mass.is_finite() && mass > 0.0) {
        return Err(QuadtreeError::InvalidMass { mass });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn validate_parameter(name: &'static str, value: f32) -> QuadtreeResult<()> {
    if !value.is_finite() {
        return Err(QuadtreeError::InvalidParameter { name, value });
    }
    Ok(())
}

/// Whether repeated midpoint splits of `bounds` end up putting `a` and `b` in
/// different quadrants. Fails when `f32` halving stops making progress.
pub(crate) fn separable(bounds: Rectangle, a: (f32, f32), b: (f32, f32)) -> bool {
    let mut current = bounds;
    for _ in 0..MAX_SPLIT_DEPTH {
        let qa = current.quadrant_of(a.0, a.1);
        if qa != current.quadrant_of(b.0, b.1) {
            return true;
        }
        let child = current.quadrant(qa);
        if child == current {
            return false;
        }
        current = child;
    }
    false
}
