//! Hands qualifying impacts over to the audio and explosion subsystems.

use super::params::{AudioParams, EffectParameters};
use crate::collision::QualifiedImpact;
use crate::common::ImpactConfig;
use crate::math::Vec2;
use crate::objects::{EntityId, MapId};
use tracing::{debug, trace};

/// A position on a specific map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCoordinates {
    pub map: MapId,
    pub position: Vec2,
}

/// Tile of a destructible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    pub x: i32,
    pub y: i32,
}

/// Explosion queued with the explosion subsystem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionRequest<'a> {
    pub location: MapCoordinates,
    pub tile: TileIndex,
    pub kind: &'a str,
    pub total_intensity: f64,
    pub slope: f64,
    pub max_tile_intensity: f64,
    pub cause: EntityId,
    pub max_tile_break: u32,
    /// Ticks the subsystem must wait before detonating.
    pub delay_ticks: u32,
}

/// Plays positional sound cues. Calls are fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, sound_collection: &str, location: MapCoordinates, params: AudioParams);
}

/// Queues explosions. Calls are fire-and-forget.
pub trait ExplosionSink {
    fn queue_explosion(&mut self, request: ExplosionRequest<'_>);
}

/// Resolves world points to tiles of an entity's destructible grid.
pub trait GridLookup {
    /// `None` when `grid` is not a grid or the point is outside it.
    fn tile_at(&self, grid: EntityId, world_point: Vec2) -> Option<TileIndex>;
}

/// Explosion sink for hosts without an explosion subsystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExplosions;

impl ExplosionSink for NoExplosions {
    fn queue_explosion(&mut self, _request: ExplosionRequest<'_>) {}
}

/// Grid lookup for hosts without destructible grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGrids;

impl GridLookup for NoGrids {
    fn tile_at(&self, _grid: EntityId, _world_point: Vec2) -> Option<TileIndex> {
        None
    }
}

/// The collaborators effects are dispatched to.
pub struct EffectSinks<'a> {
    pub audio: &'a mut dyn AudioSink,
    pub explosions: &'a mut dyn ExplosionSink,
    pub grids: &'a dyn GridLookup,
}

impl<'a> EffectSinks<'a> {
    /// Sinks for an audio-only host.
    pub fn audio_only(audio: &'a mut dyn AudioSink, no_explosions: &'a mut NoExplosions) -> Self {
        Self {
            audio,
            explosions: no_explosions,
            grids: &NoGrids,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionOutcome {
    Disabled,
    /// The contact point did not resolve to a tile of our grid.
    NoGrid,
    Queued,
}

/// What the dispatcher actually did for one impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub audio_played: bool,
    pub explosion: ExplosionOutcome,
}

/// Issues the audio cue and, when configured, the explosion for `impact`.
pub fn dispatch_effects(
    impact: &QualifiedImpact,
    effects: &EffectParameters,
    config: &ImpactConfig,
    sinks: &mut EffectSinks<'_>,
) -> DispatchReport {
    let location = MapCoordinates {
        map: impact.map,
        position: impact.world_point,
    };

    let audio_played = match effects.audio {
        Some(params) => {
            sinks.audio.play(&config.impact_sound, location, params);
            true
        }
        None => false,
    };

    let explosion = match effects.explosion {
        None => ExplosionOutcome::Disabled,
        Some(params) => match sinks.grids.tile_at(impact.ours, impact.world_point) {
            None => {
                debug!(
                    "{} has no grid tile under {:?}, skipping impact explosion",
                    impact.ours, impact.world_point
                );
                ExplosionOutcome::NoGrid
            }
            Some(tile) => {
                let request = ExplosionRequest {
                    location,
                    tile,
                    kind: &config.explosion.kind,
                    total_intensity: params.total_intensity,
                    slope: params.slope,
                    max_tile_intensity: params.max_tile_intensity,
                    cause: impact.ours,
                    max_tile_break: params.max_tile_break,
                    delay_ticks: params.delay_ticks,
                };
                trace!("queueing impact explosion {:?}", request);
                sinks.explosions.queue_explosion(request);
                ExplosionOutcome::Queued
            }
        },
    };

    DispatchReport {
        audio_played,
        explosion,
    }
}
