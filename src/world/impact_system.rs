use crate::{
    collision::{classify, CollisionEvent, ImpactDecision, QualifiedImpact, VesselQuery},
    common::{ConfigError, ImpactConfig},
    effects::{dispatch_effects, map_effects, DispatchReport, EffectParameters, EffectSinks},
};
use tracing::debug;

/// A qualifying impact together with the effects it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactOutcome {
    pub impact: QualifiedImpact,
    pub effects: EffectParameters,
}

/// Reacts to collision-start notifications between vessels.
///
/// Holds only read-only configuration and the vessel capability lookup, so one
/// instance can serve any number of independent collisions per tick.
pub struct ImpactSystem<Q> {
    config: ImpactConfig,
    vessels: Q,
}

impl<Q: VesselQuery> ImpactSystem<Q> {
    /// Creates a system after validating `config`.
    pub fn new(config: ImpactConfig, vessels: Q) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, vessels })
    }

    pub fn config(&self) -> &ImpactConfig {
        &self.config
    }

    pub fn vessels(&self) -> &Q {
        &self.vessels
    }

    /// Vessel tags change as entities gain or lose the capability.
    pub fn vessels_mut(&mut self) -> &mut Q {
        &mut self.vessels
    }

    /// Runs both gates without mapping effects.
    pub fn classify(&self, event: &CollisionEvent) -> ImpactDecision {
        classify(event, &self.vessels, self.config.minimum_impact_velocity)
    }

    /// Pure part of the pipeline: `None` for any collision that should not
    /// produce an effect.
    pub fn evaluate_collision(&self, event: &CollisionEvent) -> Option<ImpactOutcome> {
        match self.classify(event) {
            ImpactDecision::Skip(_) => None,
            ImpactDecision::Qualify(impact) => Some(ImpactOutcome {
                impact,
                effects: map_effects(impact.speed, &self.config),
            }),
        }
    }

    /// Evaluates `event` and dispatches its effects. Returns what was dispatched,
    /// or `None` if the collision was filtered out.
    pub fn on_collision_start(
        &self,
        event: &CollisionEvent,
        sinks: &mut EffectSinks<'_>,
    ) -> Option<DispatchReport> {
        let outcome = self.evaluate_collision(event)?;
        let impact = &outcome.impact;

        debug!(
            "{} has hit {} at {} m/s",
            impact.ours, impact.other, impact.speed
        );
        debug!(
            "hit at local {:?}, world {:?} on {}",
            impact.local_point, impact.world_point, impact.map
        );

        Some(dispatch_effects(impact, &outcome.effects, &self.config, sinks))
    }

    /// Handles every collision-start notification of one tick, returning how many
    /// produced effects.
    pub fn on_collisions<'e, I>(&self, events: I, sinks: &mut EffectSinks<'_>) -> usize
    where
        I: IntoIterator<Item = &'e CollisionEvent>,
    {
        events
            .into_iter()
            .filter(|event| self.on_collision_start(event, sinks).is_some())
            .count()
    }
}
