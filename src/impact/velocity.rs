use crate::math::Vec2;
use crate::objects::PhysicsBody;

/// World-space velocity of the material point of `body` found at `local_point`
/// (body-local frame): `v + w x r`, with `r` the offset from the center of mass
/// rotated into world orientation.
pub fn point_velocity(body: &PhysicsBody, local_point: Vec2) -> Vec2 {
    let offset = (local_point - body.local_center_of_mass).rotate(body.transform.rotation);
    body.linear_velocity + Vec2::angular_cross(body.angular_velocity, offset)
}

/// Magnitude of the difference between two point velocities.
pub fn differential_speed(ours: Vec2, other: Vec2) -> f64 {
    (ours - other).magnitude()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::geometry::world_to_local;
    use crate::objects::{EntityId, MapId};
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    fn body_at(position: Vec2) -> PhysicsBody {
        PhysicsBody::new(EntityId(1), MapId(1), position)
    }

    #[test]
    fn test_point_velocity_linear_only() {
        let body = body_at(Vec2::new(3.0, 3.0)).with_linear_velocity(Vec2::new(4.0, -2.0));
        let v = point_velocity(&body, Vec2::new(10.0, 10.0));
        assert_eq!(v, Vec2::new(4.0, -2.0));
    }

    #[test]
    fn test_point_velocity_spin_about_center() {
        // Spinning at 1 rad/s, a point 2 units right of the CoM moves up at 2 u/s.
        let body = body_at(Vec2::ZERO).with_angular_velocity(1.0);
        let v = point_velocity(&body, Vec2::new(2.0, 0.0));
        assert!(v.x.abs() < EPSILON);
        assert!((v.y - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_point_velocity_uses_world_orientation() {
        // Rotated 90 degrees: local +x points to world +y, so spin pushes it towards world -x.
        let body = body_at(Vec2::ZERO)
            .with_rotation(PI / 2.0)
            .with_angular_velocity(1.0);
        let v = point_velocity(&body, Vec2::new(2.0, 0.0));
        assert!((v.x - -2.0).abs() < EPSILON);
        assert!(v.y.abs() < EPSILON);
    }

    #[test]
    fn test_point_velocity_offset_center_of_mass() {
        // Contact at the center of mass only sees linear velocity.
        let body = body_at(Vec2::new(1.0, 1.0))
            .with_local_center_of_mass(Vec2::new(0.5, 0.0))
            .with_angular_velocity(5.0)
            .with_linear_velocity(Vec2::new(1.0, 0.0));
        let local = world_to_local(body.world_center_of_mass(), &body.transform);
        let v = point_velocity(&body, local);
        assert!((v.x - 1.0).abs() < EPSILON);
        assert!(v.y.abs() < EPSILON);
    }

    #[test]
    fn test_differential_speed_head_on() {
        let speed = differential_speed(Vec2::new(6.0, 0.0), Vec2::new(-6.0, 0.0));
        assert!((speed - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_differential_speed_symmetric() {
        let a = Vec2::new(3.25, -17.5);
        let b = Vec2::new(-0.125, 4.0);
        assert_eq!(differential_speed(a, b), differential_speed(b, a));
    }

    #[test]
    fn test_differential_speed_deterministic() {
        let body = body_at(Vec2::new(1.5, -2.0))
            .with_rotation(0.3)
            .with_angular_velocity(0.7)
            .with_linear_velocity(Vec2::new(9.0, 1.0));
        let local = Vec2::new(4.0, 2.0);
        let first = point_velocity(&body, local);
        for _ in 0..100 {
            let again = point_velocity(&body, local);
            assert_eq!(first.x.to_bits(), again.x.to_bits());
            assert_eq!(first.y.to_bits(), again.y.to_bits());
        }
    }
}
