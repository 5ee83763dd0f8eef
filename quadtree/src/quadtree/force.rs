use super::storage::NodeStorage;
use super::types::*;
use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};

/// Which resident to leave out of a force sum.
#[derive(Clone, Copy)]
enum Exclusion {
    /// Any resident sitting exactly on the query point.
    Position,
    Body(BodyId),
}

impl Exclusion {
    #[inline(always)]
    fn skips(self, storage: &NodeStorage, i: usize, x: f32, y: f32) -> bool {
        match self {
            Exclusion::Position => storage.px[i] == x && storage.py[i] == y,
            Exclusion::Body(body) => storage.body[i] == body,
        }
    }
}

impl QuadTree {
    /// Approximate gravitational pull of every resident on `(x, y, mass)`.
    ///
    /// A subtree is treated as one point at its center of mass when it is a
    /// leaf or when `width / distance < theta`; `theta = 0` visits every
    /// resident. A resident located exactly at `(x, y)` is skipped.
    pub fn compute_force(
        &self,
        x: f32,
        y: f32,
        mass: f32,
        g: f32,
        theta: f32,
    ) -> QuadtreeResult<(f32, f32)> {
        validate_point(x, y)?;
        validate_parameter("mass", mass)?;
        validate_parameter("g", g)?;
        validate_parameter("theta", theta)?;
        Ok(self.accumulate_force(x, y, mass, g, theta, Exclusion::Position))
    }

    /// Force on the resident `body` from every other resident.
    pub fn compute_force_on(&self, body: BodyId, g: f32, theta: f32) -> QuadtreeResult<(f32, f32)> {
        validate_parameter("g", g)?;
        validate_parameter("theta", theta)?;
        let leaf = self.leaf_of(body)?;
        Ok(self.force_on_leaf(leaf, body, g, theta))
    }

    /// Appends `(body, fx, fy)` for every resident, in body order.
    pub fn compute_forces(
        &self,
        g: f32,
        theta: f32,
        forces: &mut Vec<(BodyId, f32, f32)>,
    ) -> QuadtreeResult<()> {
        validate_parameter("g", g)?;
        validate_parameter("theta", theta)?;
        forces.reserve(self.body_leaf.len());
        for (body, &leaf) in self.body_leaf.iter().enumerate() {
            let body = body as BodyId;
            let (fx, fy) = self.force_on_leaf(leaf, body, g, theta);
            forces.push((body, fx, fy));
        }
        Ok(())
    }

    pub(crate) fn leaf_of(&self, body: BodyId) -> QuadtreeResult<NodeId> {
        self.body_leaf
            .get(body as usize)
            .copied()
            .ok_or(QuadtreeError::UnknownBody { body })
    }

    fn force_on_leaf(&self, leaf: NodeId, body: BodyId, g: f32, theta: f32) -> (f32, f32) {
        let i = leaf as usize;
        let (x, y, mass) = (self.storage.px[i], self.storage.py[i], self.storage.mass[i]);
        self.accumulate_force(x, y, mass, g, theta, Exclusion::Body(body))
    }

    fn accumulate_force(
        &self,
        x: f32,
        y: f32,
        mass: f32,
        g: f32,
        theta: f32,
        exclusion: Exclusion,
    ) -> (f32, f32) {
        let storage = &self.storage;
        let softening = self.config.softening;
        let mut fx = 0.0;
        let mut fy = 0.0;

        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(node) = stack.pop() {
            if !storage.has_mass(node) {
                continue;
            }
            let i = node as usize;
            let is_leaf = storage.is_leaf[i];
            if is_leaf && exclusion.skips(storage, i, x, y) {
                continue;
            }

            let dx = storage.cm_x[i] - x;
            let dy = storage.cm_y[i] - y;
            let dist_sq = dx * dx + dy * dy + softening;
            let dist = dist_sq.sqrt();

            if is_leaf || storage.w[i] / dist < theta {
                let f = g * mass * storage.mass[i] / (dist_sq * dist);
                fx += f * dx;
                fy += f * dy;
            } else {
                stack.extend(
                    storage.children[i]
                        .iter()
                        .copied()
                        .filter(|&child| child != NO_NODE),
                );
            }
        }

        (fx, fy)
    }
}
