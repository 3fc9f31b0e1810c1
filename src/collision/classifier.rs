//! Gates deciding whether a collision is a vessel impact worth reacting to.

use super::event::CollisionEvent;
use crate::impact::{differential_speed, point_velocity, world_to_local};
use crate::math::Vec2;
use crate::objects::{EntityId, MapId};
use std::collections::HashSet;

/// Capability lookup: does this entity take part in impact responses?
pub trait VesselQuery {
    fn is_vessel(&self, entity: EntityId) -> bool;
}

/// Set of entities tagged as vessels.
#[derive(Debug, Clone, Default)]
pub struct VesselTags {
    tagged: HashSet<EntityId>,
}

impl VesselTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags `entity` as a vessel. Returns `false` if it already was one.
    pub fn insert(&mut self, entity: EntityId) -> bool {
        self.tagged.insert(entity)
    }

    pub fn remove(&mut self, entity: EntityId) -> bool {
        self.tagged.remove(&entity)
    }

    pub fn len(&self) -> usize {
        self.tagged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tagged.is_empty()
    }
}

impl FromIterator<EntityId> for VesselTags {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self {
            tagged: iter.into_iter().collect(),
        }
    }
}

impl VesselQuery for VesselTags {
    fn is_vessel(&self, entity: EntityId) -> bool {
        self.tagged.contains(&entity)
    }
}

impl<F> VesselQuery for F
where
    F: Fn(EntityId) -> bool,
{
    fn is_vessel(&self, entity: EntityId) -> bool {
        self(entity)
    }
}

/// Why a collision produced no effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    /// One of the participants lacks the vessel capability.
    NotVessel(EntityId),
    /// One of the participants is not on any map.
    NoWorldContext(EntityId),
    /// Differential speed under the minimum impact velocity.
    BelowThreshold { speed: f64 },
}

/// A collision that passed every gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualifiedImpact {
    pub ours: EntityId,
    pub other: EntityId,
    /// Map of `ours`, where effects are placed.
    pub map: MapId,
    pub world_point: Vec2,
    /// Contact point in the local frame of `ours`.
    pub local_point: Vec2,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpactDecision {
    Skip(SkipReason),
    Qualify(QualifiedImpact),
}

/// "At or above": equality qualifies.
pub fn meets_threshold(speed: f64, minimum_impact_velocity: f64) -> bool {
    speed >= minimum_impact_velocity
}

/// Runs the vessel gate, computes the differential speed at the contact point
/// and applies the threshold gate.
pub fn classify<Q: VesselQuery + ?Sized>(
    event: &CollisionEvent,
    vessels: &Q,
    minimum_impact_velocity: f64,
) -> ImpactDecision {
    for entity in [event.ours.entity, event.other.entity] {
        if !vessels.is_vessel(entity) {
            return ImpactDecision::Skip(SkipReason::NotVessel(entity));
        }
    }

    let Some(map) = event.ours.map else {
        return ImpactDecision::Skip(SkipReason::NoWorldContext(event.ours.entity));
    };
    if event.other.map.is_none() {
        return ImpactDecision::Skip(SkipReason::NoWorldContext(event.other.entity));
    }

    let our_point = world_to_local(event.world_point, &event.ours.transform);
    let other_point = world_to_local(event.world_point, &event.other.transform);

    let our_velocity = point_velocity(&event.ours, our_point);
    let other_velocity = point_velocity(&event.other, other_point);
    let speed = differential_speed(our_velocity, other_velocity);

    // NaN from a misbehaving collaborator fails this comparison and skips.
    if !meets_threshold(speed, minimum_impact_velocity) {
        return ImpactDecision::Skip(SkipReason::BelowThreshold { speed });
    }

    ImpactDecision::Qualify(QualifiedImpact {
        ours: event.ours.entity,
        other: event.other.entity,
        map,
        world_point: event.world_point,
        local_point: our_point,
        speed,
    })
}
