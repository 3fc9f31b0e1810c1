//! Impact response for large rigid bodies ("vessels") colliding in a 2D world.
//!
//! A collision-start notification from the physics simulation is classified
//! (both sides vessels? fast enough?), its differential speed at the contact
//! point is mapped onto effect parameters, and the effects are handed to the
//! host's audio and explosion subsystems.

pub mod collision;
pub mod common;
pub mod effects;
pub mod impact;
pub mod math;
pub mod objects;
pub mod world;

// Re-export key types for easier use
pub use collision::{CollisionEvent, ImpactDecision, SkipReason, VesselQuery, VesselTags};
pub use common::{ConfigError, ImpactConfig};
pub use effects::{AudioSink, EffectParameters, EffectSinks, ExplosionSink, GridLookup};
pub use math::vec2::Vec2;
pub use objects::{EntityId, MapId, PhysicsBody};
pub use world::{ImpactOutcome, ImpactSystem};
