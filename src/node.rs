//! Point masses integrated with variable-timestep Verlet.

use crate::float::Float;
use crate::vec::Vec;

/// `last_timestep` of a node that has never been integrated.
pub const DEFAULT_LAST_TIMESTEP: f32 = 1.0;

/// A cloth node: point mass with implicit velocity.
///
/// Velocity is never stored. It is inferred from `position - prev_position`
/// and rescaled by `dt / last_timestep` so steps of varying length compose:
///
/// ```text
/// x1 = x + (x - x0) * (dt / dt0) + a * dt * (dt + dt0) / 2
/// ```
///
/// A node with `inv_mass == 0` is static: neither gravity nor integration
/// ever moves it.
#[derive(Clone, Debug)]
pub struct Node<V: Vec> {
    position: V,
    prev_position: V,
    force: V,
    acceleration: V,
    inv_mass: V::Scalar,
    last_timestep: V::Scalar,
    radius: V::Scalar,
}

impl<V: Vec> Node<V> {
    /// Create a node at rest. `mass <= 0` makes it static.
    pub fn new(position: V, mass: V::Scalar) -> Self {
        let inv_mass = if mass > V::Scalar::zero() {
            V::Scalar::one() / mass
        } else {
            V::Scalar::zero()
        };
        Node {
            position,
            prev_position: position,
            force: V::zero(),
            acceleration: V::zero(),
            inv_mass,
            last_timestep: V::Scalar::from_f32(DEFAULT_LAST_TIMESTEP),
            radius: V::Scalar::one(),
        }
    }

    /// Seed the previous step length. Must be positive.
    pub fn with_last_timestep(mut self, dt: V::Scalar) -> Self {
        self.last_timestep = dt;
        self
    }

    /// Set the pick radius used by [`Node::contains`].
    pub fn with_radius(mut self, radius: V::Scalar) -> Self {
        self.radius = radius;
        self
    }

    /// Accumulate a force until the next [`Node::update`].
    pub fn add_force(&mut self, force: V) {
        self.force = self.force + force;
    }

    /// Add the weight `gravity * mass` of a dynamic node.
    pub fn apply_gravity(&mut self, gravity: V) {
        if !self.is_static() {
            self.add_force(gravity.scale(V::Scalar::one() / self.inv_mass));
        }
    }

    /// Integrate one step of length `dt` and consume accumulated forces.
    ///
    /// A zero `dt` leaves position, history and `last_timestep` untouched so
    /// the next step never rescales by `dt / 0`.
    pub fn update(&mut self, dt: V::Scalar) {
        if self.is_static() {
            self.clear_forces();
            return;
        }

        self.acceleration = self.acceleration + self.force.scale(self.inv_mass);

        if dt == V::Scalar::zero() {
            self.clear_forces();
            return;
        }

        let velocity = self.position - self.prev_position;
        self.prev_position = self.position;

        let time_scaled_velocity = velocity.scale(dt / self.last_timestep);
        let acceleration_term =
            self.acceleration.scale(dt * (dt + self.last_timestep) / V::Scalar::two());
        self.position = self.position + time_scaled_velocity + acceleration_term;

        self.last_timestep = dt;
        self.clear_forces();
    }

    fn clear_forces(&mut self) {
        self.acceleration = V::zero();
        self.force = V::zero();
    }

    /// Make the node static. Its current position becomes fixed.
    pub fn pin(&mut self) {
        self.inv_mass = V::Scalar::zero();
        self.prev_position = self.position;
        self.clear_forces();
    }

    pub fn position(&self) -> V { self.position }
    pub fn prev_position(&self) -> V { self.prev_position }
    pub fn force(&self) -> V { self.force }
    pub fn inv_mass(&self) -> V::Scalar { self.inv_mass }
    pub fn last_timestep(&self) -> V::Scalar { self.last_timestep }
    pub fn radius(&self) -> V::Scalar { self.radius }

    pub fn is_static(&self) -> bool {
        self.inv_mass == V::Scalar::zero()
    }

    /// Mass, or zero for a static node.
    pub fn mass(&self) -> V::Scalar {
        if self.is_static() {
            V::Scalar::zero()
        } else {
            V::Scalar::one() / self.inv_mass
        }
    }

    /// Implicit velocity over the last step.
    pub fn velocity(&self, dt: V::Scalar) -> V {
        if dt.is_near_zero(V::Scalar::from_f32(1e-30)) {
            return V::zero();
        }
        (self.position - self.prev_position).scale(V::Scalar::one() / dt)
    }

    /// True when `point` lies strictly inside the node's radius.
    pub fn contains(&self, point: V) -> bool {
        self.position.distance(point) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    #[test]
    fn non_positive_mass_is_static() {
        assert!(Node::new(Vec3::new(0.0f32, 0.0, 0.0), 0.0).is_static());
        assert!(Node::new(Vec3::new(0.0f32, 0.0, 0.0), -2.0).is_static());
        let dynamic = Node::new(Vec3::new(0.0f32, 0.0, 0.0), 0.5);
        assert!(!dynamic.is_static());
        assert_eq!(dynamic.inv_mass(), 2.0);
        assert_eq!(dynamic.mass(), 0.5);
    }

    #[test]
    fn gravity_skips_static_nodes() {
        let mut node = Node::new(Vec3::new(1.0f32, 2.0, 3.0), 0.0);
        node.apply_gravity(Vec3::new(0.0, -9.81, 0.0));
        assert_eq!(node.force(), Vec3::zero());
    }

    #[test]
    fn forces_are_consumed_by_update() {
        let mut node = Node::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0);
        node.add_force(Vec3::new(1.0, 0.0, 0.0));
        node.add_force(Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(node.force(), Vec3::new(1.0, 2.0, 0.0));
        node.update(0.1);
        assert_eq!(node.force(), Vec3::zero());
    }

    #[test]
    fn first_step_uses_default_last_timestep() {
        let mut node = Node::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0);
        node.add_force(Vec3::new(0.0, -2.0, 0.0));
        let dt = 0.1;
        node.update(dt);
        // At rest the velocity term vanishes; acceleration term uses dt0 = 1.
        let expected = -2.0 * dt * (dt + 1.0) / 2.0;
        assert!((node.position().y - expected).abs() < 1e-12);
        assert_eq!(node.last_timestep(), dt);
    }

    #[test]
    fn velocity_rescales_with_changing_timestep() {
        let mut node = Node::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0).with_last_timestep(0.1);
        node.add_force(Vec3::new(10.0, 0.0, 0.0));
        node.update(0.1);
        let x1 = node.position().x;
        assert!((x1 - 0.1).abs() < 1e-12);

        // Halving the step halves the carried displacement.
        node.update(0.05);
        assert!((node.position().x - (x1 + x1 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn zero_timestep_is_identity_for_history() {
        let mut node = Node::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0).with_last_timestep(0.1);
        node.add_force(Vec3::new(0.0, 5.0, 0.0));
        node.update(0.1);
        let pos = node.position();
        let prev = node.prev_position();

        node.add_force(Vec3::new(100.0, 0.0, 0.0));
        node.update(0.0);
        assert_eq!(node.position(), pos);
        assert_eq!(node.prev_position(), prev);
        assert_eq!(node.last_timestep(), 0.1);
        assert_eq!(node.force(), Vec3::zero());

        node.update(0.1);
        assert!(node.position().is_finite());
    }

    #[test]
    fn pin_freezes_position() {
        let mut node = Node::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0);
        node.add_force(Vec3::new(0.0, 1.0, 0.0));
        node.update(0.1);
        node.pin();
        let pinned_at = node.position();
        for _ in 0..10 {
            node.add_force(Vec3::new(50.0, 50.0, 50.0));
            node.update(0.1);
        }
        assert_eq!(node.position(), pinned_at);
    }

    #[test]
    fn contains_respects_radius() {
        let node = Node::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0).with_radius(0.5);
        assert!(node.contains(Vec3::new(0.3, 0.0, 0.0)));
        assert!(!node.contains(Vec3::new(0.5, 0.0, 0.0)));
    }
}
