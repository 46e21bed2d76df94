//! Ray picking against node spheres and pointer-drag impulses.
//!
//! Turning a screen position into a world-space [`Ray`] is the caller's
//! job; this module only answers which nodes a ray touches.

use crate::float::Float;
use crate::handle::NodeHandle;
use crate::simulation::Simulation;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Half-line `origin + t * direction`, `t >= 0`. `direction` need not be
/// normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<V: Vec> {
    pub origin: V,
    pub direction: V,
}

impl<V: Vec> Ray<V> {
    pub fn new(origin: V, direction: V) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at(&self, t: V::Scalar) -> V {
        self.origin + self.direction.scale(t)
    }

    /// Parameter of the point on the ray's line closest to `point`.
    pub fn closest_t(&self, point: V) -> V::Scalar {
        let denom = self.direction.dot(self.direction);
        if denom.is_near_zero(V::Scalar::from_f32(1e-20)) {
            return V::Scalar::zero();
        }
        (point - self.origin).dot(self.direction) / denom
    }
}

/// True when the ray's line passes through the sphere's interior.
///
/// Tangent lines (zero discriminant) do not count.
pub fn intersects_sphere<V: Vec>(ray: &Ray<V>, centre: V, radius: V::Scalar) -> bool {
    let oc = ray.origin - centre;
    let a = ray.direction.dot(ray.direction);
    let b = V::Scalar::two() * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - V::Scalar::from_f32(4.0) * a * c;
    discriminant > V::Scalar::zero()
}

impl<V: Vec> Simulation<V> {
    /// Nodes whose radius sphere the ray crosses, in node order.
    pub fn hits<'a>(&'a self, ray: &'a Ray<V>) -> impl Iterator<Item = NodeHandle> + 'a {
        self.nodes()
            .iter()
            .enumerate()
            .filter(move |(_, node)| intersects_sphere(ray, node.position(), node.radius()))
            .map(|(i, _)| NodeHandle::from_index(i))
    }

    /// The hit node nearest the ray origin, ignoring nodes behind it.
    pub fn nearest_hit(&self, ray: &Ray<V>) -> Option<NodeHandle> {
        let mut best: Option<(NodeHandle, V::Scalar)> = None;
        for handle in self.hits(ray) {
            let t = ray.closest_t(self.nodes()[handle.index()].position());
            if t < V::Scalar::zero() {
                continue;
            }
            match best {
                Some((_, best_t)) if best_t <= t => {}
                _ => best = Some((handle, t)),
            }
        }
        best.map(|(handle, _)| handle)
    }

    /// Add `impulse` to every dynamic node the ray crosses. Returns how
    /// many nodes were pushed.
    pub fn drag(&mut self, ray: &Ray<V>, impulse: V) -> usize {
        let targets: AllocVec<NodeHandle> = self
            .hits(ray)
            .filter(|h| !self.nodes()[h.index()].is_static())
            .collect();
        for &handle in targets.iter() {
            if let Ok(node) = self.node_mut(handle) {
                node.add_force(impulse);
            }
        }
        targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    #[test]
    fn ray_through_centre_hits() {
        let ray = Ray::new(Vec3::new(0.0f32, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(intersects_sphere(&ray, Vec3::zero(), 0.5));
    }

    #[test]
    fn ray_passing_wide_misses() {
        let ray = Ray::new(Vec3::new(2.0f32, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!intersects_sphere(&ray, Vec3::zero(), 1.0));
    }

    #[test]
    fn tangent_ray_misses() {
        let ray = Ray::new(Vec3::new(1.0f32, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!intersects_sphere(&ray, Vec3::zero(), 1.0));
    }

    #[test]
    fn closest_t_handles_unnormalized_direction() {
        let ray = Ray::new(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.closest_t(Vec3::new(1.0, 0.0, 4.0)), 2.0);
        assert_eq!(ray.point_at(2.0), Vec3::new(0.0, 0.0, 4.0));
    }
}
