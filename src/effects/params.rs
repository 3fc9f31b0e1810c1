//! Maps an impact's differential speed onto bounded effect parameters.

use crate::common::ImpactConfig;
use serde::{Deserialize, Serialize};

/// `volume = min(max_volume, coefficient * speed^exponent + offset)`, in decibels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeCurve {
    pub coefficient: f64,
    pub exponent: f64,
    pub offset: f64,
    pub max_volume: f64,
}

impl Default for VolumeCurve {
    fn default() -> Self {
        Self {
            coefficient: 1.0,
            exponent: 0.5,
            offset: -5.0,
            max_volume: 10.0,
        }
    }
}

impl VolumeCurve {
    pub fn volume(&self, speed: f64) -> f64 {
        // sqrt is exact for perfect squares, powf(_, 0.5) is not guaranteed to be
        let scaled = if self.exponent == 0.5 {
            speed.sqrt()
        } else {
            speed.powf(self.exponent)
        };
        (self.coefficient * scaled + self.offset).min(self.max_volume)
    }
}

/// What to do with impacts whose mapped volume comes out negative or very low.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QuietImpactPolicy {
    /// Volume is a decibel gain: negative values just play quieter.
    #[default]
    Attenuate,
    /// Negative volumes are raised to zero.
    ClampToZero,
    /// Volumes below `floor` skip the audio call.
    MuteBelow { floor: f64 },
}

impl QuietImpactPolicy {
    /// Returns the volume to play at, or `None` when the cue should not play.
    pub fn apply(&self, volume: f64) -> Option<f64> {
        match *self {
            QuietImpactPolicy::Attenuate => Some(volume),
            QuietImpactPolicy::ClampToZero => Some(volume.max(0.0)),
            QuietImpactPolicy::MuteBelow { floor } => (volume >= floor).then_some(volume),
        }
    }
}

/// Escalation of severe impacts into explosions. Disabled unless `enabled` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionCurve {
    pub enabled: bool,
    /// Explosion prototype handed to the explosion subsystem.
    pub kind: String,
    pub intensity_per_speed: f64,
    /// Intensity lost per tile away from the epicenter.
    pub slope: f64,
    pub max_intensity_per_speed: f64,
    pub max_tile_break: u32,
    /// Extra tiles broken per unit of speed, added to `max_tile_break`.
    pub max_tile_break_per_speed: f64,
    /// Ticks to wait before detonating; `0` detonates on the current tick.
    pub delay_ticks: u32,
}

impl Default for ExplosionCurve {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: "Default".to_string(),
            intensity_per_speed: 100.0,
            slope: 4.0,
            max_intensity_per_speed: 50.0,
            max_tile_break: 4,
            max_tile_break_per_speed: 0.0,
            delay_ticks: 1,
        }
    }
}

impl ExplosionCurve {
    /// Explosion sized for `speed`, or `None` while the extension is disabled.
    pub fn parameters(&self, speed: f64) -> Option<ExplosionParameters> {
        if !self.enabled {
            return None;
        }
        let extra_tiles = (self.max_tile_break_per_speed * speed).floor().max(0.0);
        Some(ExplosionParameters {
            total_intensity: self.intensity_per_speed * speed,
            slope: self.slope,
            max_tile_intensity: self.max_intensity_per_speed * speed,
            // Saturating float-to-int cast caps absurd values at u32::MAX.
            max_tile_break: self.max_tile_break.saturating_add(extra_tiles as u32),
            delay_ticks: self.delay_ticks,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioParams {
    pub volume: f64,
    pub variation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionParameters {
    pub total_intensity: f64,
    pub slope: f64,
    pub max_tile_intensity: f64,
    pub max_tile_break: u32,
    pub delay_ticks: u32,
}

/// Everything the dispatcher needs for one qualifying impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParameters {
    /// Volume straight off the curve, before the quiet-impact policy.
    pub raw_volume: f64,
    /// `None` when the quiet-impact policy muted the cue.
    pub audio: Option<AudioParams>,
    pub explosion: Option<ExplosionParameters>,
}

/// Pure mapping from differential speed to effect parameters.
pub fn map_effects(speed: f64, config: &ImpactConfig) -> EffectParameters {
    let raw_volume = config.volume_curve.volume(speed);
    let audio = config
        .quiet_policy
        .apply(raw_volume)
        .map(|volume| AudioParams {
            volume,
            variation: config.variation,
        });

    EffectParameters {
        raw_volume,
        audio,
        explosion: config.explosion.parameters(speed),
    }
}
