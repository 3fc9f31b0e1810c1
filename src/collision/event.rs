use crate::math::Vec2;
use crate::objects::PhysicsBody;

/// Collision-start notification delivered by the physics simulation, seen from
/// the side of `ours`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub ours: PhysicsBody,
    pub other: PhysicsBody,
    /// Shared world-space contact point.
    pub world_point: Vec2,
}

impl CollisionEvent {
    pub fn new(ours: PhysicsBody, other: PhysicsBody, world_point: Vec2) -> Self {
        Self {
            ours,
            other,
            world_point,
        }
    }

    /// The same contact as reported to the other participant.
    pub fn swapped(&self) -> Self {
        Self {
            ours: self.other,
            other: self.ours,
            world_point: self.world_point,
        }
    }
}
