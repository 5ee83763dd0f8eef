use super::types::*;
use super::*;
use common::shapes::PointMass;

impl QuadTree {
    /// Live nodes, root included. Ids `0..node_count()` are valid.
    pub fn node_count(&self) -> usize {
        self.count
    }

    /// Allocated node slots.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    pub fn body_count(&self) -> usize {
        self.body_leaf.len()
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Squared-distance threshold below which two points are coincident.
    pub fn eps(&self) -> f32 {
        self.eps
    }

    pub fn total_mass(&self) -> f32 {
        self.storage.mass[ROOT as usize]
    }

    pub fn center_of_mass(&self) -> Option<(f32, f32)> {
        self.node(ROOT).and_then(|node| node.center_of_mass)
    }

    pub fn node(&self, id: NodeId) -> Option<NodeView> {
        if id as usize >= self.count {
            return None;
        }
        let s = &self.storage;
        let i = id as usize;
        let resident = s
            .has_resident(id)
            .then(|| PointMass::new(s.px[i], s.py[i], s.mass[i]));
        let center_of_mass = s.has_mass(id).then(|| (s.cm_x[i], s.cm_y[i]));
        let children = (!s.is_leaf[i]).then(|| s.children[i]);
        let parent = (s.parent[i] != NO_NODE).then(|| s.parent[i]);
        Some(NodeView {
            id,
            bounds: s.bounds(id),
            is_leaf: s.is_leaf[i],
            resident,
            mass: s.mass[i],
            center_of_mass,
            children,
            parent,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeView> + '_ {
        (0..self.count as NodeId).filter_map(move |id| self.node(id))
    }

    /// Current position and mass of `body`, `None` for unknown handles.
    pub fn body(&self, body: BodyId) -> Option<PointMass> {
        let leaf = self.leaf_of(body).ok()? as usize;
        let s = &self.storage;
        Some(PointMass::new(s.px[leaf], s.py[leaf], s.mass[leaf]))
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.extend(self.nodes().map(|node| node.bounds));
    }

    pub fn all_residents(&self, residents: &mut Vec<PointMass>) {
        residents.extend(self.nodes().filter_map(|node| node.resident));
    }
}
