use super::types::*;
use common::shapes::Rectangle;

/// Per-node fields in structure-of-arrays form.
///
/// Every array always has `capacity()` entries. Slots that were never
/// initialised (or that a `clear` orphaned) hold stale or sentinel data and
/// must only be read through ids below the tree's live count.
pub(crate) struct NodeStorage {
    pub(crate) x: Vec<f32>,
    pub(crate) y: Vec<f32>,
    pub(crate) w: Vec<f32>,
    pub(crate) h: Vec<f32>,
    pub(crate) is_leaf: Vec<bool>,
    pub(crate) px: Vec<f32>,
    pub(crate) py: Vec<f32>,
    pub(crate) mass: Vec<f32>,
    pub(crate) cm_x: Vec<f32>,
    pub(crate) cm_y: Vec<f32>,
    pub(crate) body: Vec<BodyId>,
    pub(crate) children: Vec<[NodeId; 4]>,
    pub(crate) parent: Vec<NodeId>,
}

impl NodeStorage {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            x: vec![NO_POSITION; capacity],
            y: vec![NO_POSITION; capacity],
            w: vec![NO_POSITION; capacity],
            h: vec![NO_POSITION; capacity],
            is_leaf: vec![true; capacity],
            px: vec![NO_POSITION; capacity],
            py: vec![NO_POSITION; capacity],
            mass: vec![NO_MASS; capacity],
            cm_x: vec![NO_POSITION; capacity],
            cm_y: vec![NO_POSITION; capacity],
            body: vec![NO_BODY; capacity],
            children: vec![NO_CHILDREN; capacity],
            parent: vec![NO_NODE; capacity],
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.x.len()
    }

    /// Extends every array to `capacity` slots, sentinel-filling the new ones.
    pub(crate) fn grow_to(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        self.x.resize(capacity, NO_POSITION);
        self.y.resize(capacity, NO_POSITION);
        self.w.resize(capacity, NO_POSITION);
        self.h.resize(capacity, NO_POSITION);
        self.is_leaf.resize(capacity, true);
        self.px.resize(capacity, NO_POSITION);
        self.py.resize(capacity, NO_POSITION);
        self.mass.resize(capacity, NO_MASS);
        self.cm_x.resize(capacity, NO_POSITION);
        self.cm_y.resize(capacity, NO_POSITION);
        self.body.resize(capacity, NO_BODY);
        self.children.resize(capacity, NO_CHILDREN);
        self.parent.resize(capacity, NO_NODE);
    }

    /// Turns slot `id` into an empty leaf covering `bounds`.
    pub(crate) fn init_leaf(&mut self, id: NodeId, bounds: Rectangle, parent: NodeId) {
        let i = id as usize;
        self.x[i] = bounds.x;
        self.y[i] = bounds.y;
        self.w[i] = bounds.width;
        self.h[i] = bounds.height;
        self.is_leaf[i] = true;
        self.px[i] = NO_POSITION;
        self.py[i] = NO_POSITION;
        self.mass[i] = NO_MASS;
        self.cm_x[i] = NO_POSITION;
        self.cm_y[i] = NO_POSITION;
        self.body[i] = NO_BODY;
        self.children[i] = NO_CHILDREN;
        self.parent[i] = parent;
    }

    #[inline(always)]
    pub(crate) fn bounds(&self, id: NodeId) -> Rectangle {
        let i = id as usize;
        Rectangle::new(self.x[i], self.y[i], self.w[i], self.h[i])
    }

    #[inline(always)]
    pub(crate) fn has_resident(&self, id: NodeId) -> bool {
        !self.px[id as usize].is_nan()
    }

    #[inline(always)]
    pub(crate) fn has_mass(&self, id: NodeId) -> bool {
        self.mass[id as usize] > NO_MASS
    }

    /// Stores a point at leaf `id`; the leaf's aggregate is the point itself.
    pub(crate) fn set_resident(&mut self, id: NodeId, x: f32, y: f32, mass: f32, body: BodyId) {
        let i = id as usize;
        self.px[i] = x;
        self.py[i] = y;
        self.mass[i] = mass;
        self.cm_x[i] = x;
        self.cm_y[i] = y;
        self.body[i] = body;
    }

    /// Removes the resident point from `id` and returns it as
    /// `(x, y, mass, body)`. The aggregate fields are left untouched.
    pub(crate) fn take_resident(&mut self, id: NodeId) -> (f32, f32, f32, BodyId) {
        let i = id as usize;
        let resident = (self.px[i], self.py[i], self.mass[i], self.body[i]);
        self.px[i] = NO_POSITION;
        self.py[i] = NO_POSITION;
        self.body[i] = NO_BODY;
        resident
    }

    /// Recomputes the mass and center of mass of internal node `id` from its
    /// non-empty children.
    pub(crate) fn aggregate(&mut self, id: NodeId) {
        let i = id as usize;
        let mut total = 0.0;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for child in self.children[i] {
            if child == NO_NODE || !self.has_mass(child) {
                continue;
            }
            let c = child as usize;
            total += self.mass[c];
            sum_x += self.mass[c] * self.cm_x[c];
            sum_y += self.mass[c] * self.cm_y[c];
        }
        if total > NO_MASS {
            self.mass[i] = total;
            self.cm_x[i] = sum_x / total;
            self.cm_y[i] = sum_y / total;
        } else {
            self.mass[i] = NO_MASS;
            self.cm_x[i] = NO_POSITION;
            self.cm_y[i] = NO_POSITION;
        }
    }
}
