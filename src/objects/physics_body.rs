use crate::math::{Transform, Vec2};
use std::fmt;

/// Opaque handle of a simulated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Handle of the map (world space) an entity lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map#{}", self.0)
    }
}

/// Read-only snapshot of a rigid body as handed over by the physics simulation
/// for one collision notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub entity: EntityId,
    /// World placement of the body's local origin.
    pub transform: Transform,
    /// Center of mass in the body's local frame.
    pub local_center_of_mass: Vec2,
    pub linear_velocity: Vec2,
    pub angular_velocity: f64, // Radians per second, counter-clockwise positive
    /// `None` when the body is not attached to any map (nullspace, mid-teleport, ...).
    pub map: Option<MapId>,
}

impl PhysicsBody {
    /// Creates a body at rest at `position` on `map`, center of mass at its origin.
    pub fn new(entity: EntityId, map: MapId, position: Vec2) -> Self {
        Self {
            entity,
            transform: Transform::new(position, 0.0),
            local_center_of_mass: Vec2::ZERO,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            map: Some(map),
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_linear_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn with_local_center_of_mass(mut self, local_com: Vec2) -> Self {
        self.local_center_of_mass = local_com;
        self
    }

    /// Detaches the body from any map.
    pub fn detached(mut self) -> Self {
        self.map = None;
        self
    }

    /// World position of the center of mass.
    pub fn world_center_of_mass(&self) -> Vec2 {
        self.transform.apply(self.local_center_of_mass)
    }
}
