pub mod physics_body;

pub use physics_body::{EntityId, MapId, PhysicsBody};
