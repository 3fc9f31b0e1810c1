pub mod dispatch;
pub mod params;

pub use dispatch::{
    dispatch_effects, AudioSink, DispatchReport, EffectSinks, ExplosionOutcome, ExplosionRequest,
    ExplosionSink, GridLookup, MapCoordinates, NoExplosions, NoGrids, TileIndex,
};
pub use params::{
    map_effects, AudioParams, EffectParameters, ExplosionCurve, ExplosionParameters,
    QuietImpactPolicy, VolumeCurve,
};
