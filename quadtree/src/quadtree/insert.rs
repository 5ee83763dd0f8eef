use super::types::*;
use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use tracing::{debug, trace};

impl QuadTree {
    pub fn new(bounds: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn with_capacity(bounds: Rectangle, initial_capacity: usize) -> QuadtreeResult<Self> {
        Self::new_with_config(
            bounds,
            Config {
                initial_capacity,
                ..Config::default()
            },
        )
    }

    pub fn new_with_config(bounds: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_bounds(&bounds)?;
        if config.initial_capacity == 0 {
            return Err(QuadtreeError::InvalidCapacity {
                capacity: config.initial_capacity,
            });
        }
        validate_config_value("coincidence_factor", config.coincidence_factor)?;
        validate_config_value("softening", config.softening)?;

        let eps = config.coincidence_factor * bounds.diagonal();
        let mut storage = NodeStorage::with_capacity(config.initial_capacity);
        storage.init_leaf(ROOT, bounds, NO_NODE);
        Ok(Self {
            bounds,
            config,
            eps,
            storage,
            count: 1,
            body_leaf: Vec::new(),
        })
    }

    /// Inserts a point mass. Returns `false` when the point is coincident with
    /// an existing resident, in which case the tree is left untouched.
    pub fn insert(&mut self, x: f32, y: f32, mass: f32) -> QuadtreeResult<bool> {
        Ok(self.insert_body(x, y, mass)?.is_some())
    }

    /// Like [`QuadTree::insert`], but returns the handle of the stored point.
    ///
    /// The handle stays valid across later subdivisions (which move the point
    /// to a deeper leaf) until the next [`QuadTree::clear`].
    pub fn insert_body(&mut self, x: f32, y: f32, mass: f32) -> QuadtreeResult<Option<BodyId>> {
        validate_point(x, y)?;
        validate_mass(mass)?;
        if !self.bounds.contains_point(x, y) {
            return Err(QuadtreeError::PointOutOfBounds { x, y });
        }

        let mut node = ROOT;
        loop {
            let i = node as usize;
            if !self.storage.is_leaf[i] {
                let quadrant = self.storage.bounds(node).quadrant_of(x, y);
                node = self.storage.children[i][quadrant];
                continue;
            }

            if !self.storage.has_resident(node) {
                let body = self.body_leaf.len() as BodyId;
                self.storage.set_resident(node, x, y, mass, body);
                self.body_leaf.push(node);
                self.aggregate_upwards(self.storage.parent[i]);
                return Ok(Some(body));
            }

            let resident = (self.storage.px[i], self.storage.py[i]);
            let dx = resident.0 - x;
            let dy = resident.1 - y;
            if dx * dx + dy * dy < self.eps
                || !separable(self.storage.bounds(node), resident, (x, y))
            {
                trace!(x, y, node, "coincident point rejected");
                return Ok(None);
            }

            // Revisit the same node: it is internal now and routes the point down.
            self.subdivide(node);
        }
    }

    /// Drops every point. Node slots stay allocated for reuse.
    pub fn clear(&mut self) {
        self.count = 1;
        self.storage.init_leaf(ROOT, self.bounds, NO_NODE);
        self.body_leaf.clear();
        debug!(capacity = self.storage.capacity(), "quadtree cleared");
    }

    fn subdivide(&mut self, node: NodeId) {
        self.reserve_nodes(4);
        let first = self.count as NodeId;
        let bounds = self.storage.bounds(node);
        let mut children = NO_CHILDREN;
        for (quadrant, child) in children.iter_mut().enumerate() {
            *child = first + quadrant as NodeId;
            self.storage.init_leaf(*child, bounds.quadrant(quadrant), node);
        }
        self.count += 4;

        let i = node as usize;
        self.storage.is_leaf[i] = false;
        self.storage.children[i] = children;

        let (x, y, mass, body) = self.storage.take_resident(node);
        let target = children[bounds.quadrant_of(x, y)];
        self.storage.set_resident(target, x, y, mass, body);
        self.body_leaf[body as usize] = target;
        trace!(node, first_child = first, "node subdivided");
    }

    fn reserve_nodes(&mut self, additional: usize) {
        let required = self.count + additional;
        let old_capacity = self.storage.capacity();
        if required <= old_capacity {
            return;
        }
        let mut new_capacity = old_capacity.max(1);
        while new_capacity < required {
            new_capacity *= 2;
        }
        self.storage.grow_to(new_capacity);
        debug!(old_capacity, new_capacity, "grew node storage");
    }

    fn aggregate_upwards(&mut self, mut node: NodeId) {
        while node != NO_NODE {
            self.storage.aggregate(node);
            node = self.storage.parent[node as usize];
        }
    }
}
