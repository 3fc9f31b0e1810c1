//! Tunables of the impact response.

use crate::effects::params::{ExplosionCurve, QuietImpactPolicy, VolumeCurve};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host audio system's default pitch variation.
pub const DEFAULT_VARIATION: f64 = 0.125;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse impact config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("minimum impact velocity must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
    #[error("volume curve `{field}` must be finite and non-decreasing, got {value}")]
    InvalidVolumeCurve { field: &'static str, value: f64 },
    #[error("explosion curve field `{field}` must be finite and non-negative, got {value}")]
    InvalidExplosionCurve { field: &'static str, value: f64 },
    #[error("audio variation must be finite and non-negative, got {0}")]
    InvalidVariation(f64),
    #[error("sound collection id must not be empty")]
    EmptySoundCollection,
    #[error("mute floor must be finite, got {0}")]
    InvalidMuteFloor(f64),
    #[error("explosion kind must not be empty")]
    EmptyExplosionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Differential speed, in distance units per second, an impact must reach.
    pub minimum_impact_velocity: f64,
    pub impact_sound: String,
    pub volume_curve: VolumeCurve,
    pub variation: f64,
    pub quiet_policy: QuietImpactPolicy,
    pub explosion: ExplosionCurve,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            minimum_impact_velocity: 10.0,
            impact_sound: "ShuttleImpactSound".to_string(),
            volume_curve: VolumeCurve::default(),
            variation: DEFAULT_VARIATION,
            quiet_policy: QuietImpactPolicy::default(),
            explosion: ExplosionCurve::default(),
        }
    }
}

impl ImpactConfig {
    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ImpactConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.minimum_impact_velocity;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        let curve = &self.volume_curve;
        for (field, value) in [
            ("coefficient", curve.coefficient),
            ("exponent", curve.exponent),
            ("offset", curve.offset),
            ("max_volume", curve.max_volume),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidVolumeCurve { field, value });
            }
        }
        // A negative scale or power makes harder hits quieter.
        for (field, value) in [
            ("coefficient", curve.coefficient),
            ("exponent", curve.exponent),
        ] {
            if value < 0.0 {
                return Err(ConfigError::InvalidVolumeCurve { field, value });
            }
        }
        if let QuietImpactPolicy::MuteBelow { floor } = self.quiet_policy {
            if !floor.is_finite() {
                return Err(ConfigError::InvalidMuteFloor(floor));
            }
        }

        if !self.variation.is_finite() || self.variation < 0.0 {
            return Err(ConfigError::InvalidVariation(self.variation));
        }
        if self.impact_sound.is_empty() {
            return Err(ConfigError::EmptySoundCollection);
        }

        let explosion = &self.explosion;
        for (field, value) in [
            ("intensity_per_speed", explosion.intensity_per_speed),
            ("slope", explosion.slope),
            ("max_intensity_per_speed", explosion.max_intensity_per_speed),
            ("max_tile_break_per_speed", explosion.max_tile_break_per_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidExplosionCurve { field, value });
            }
        }
        if explosion.kind.is_empty() {
            return Err(ConfigError::EmptyExplosionKind);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_configuration() {
        let config = ImpactConfig::default();
        assert_eq!(config.minimum_impact_velocity, 10.0);
        assert_eq!(config.impact_sound, "ShuttleImpactSound");
        assert_eq!(config.volume_curve, VolumeCurve::default());
        assert_eq!(config.variation, 0.125);
        assert_eq!(config.quiet_policy, QuietImpactPolicy::Attenuate);
        assert!(!config.explosion.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_document() {
        let config = ImpactConfig::from_json_str(
            r#"{
                "minimum_impact_velocity": 4.5,
                "quiet_policy": { "mode": "mute_below", "floor": -2.0 },
                "explosion": { "enabled": true, "delay_ticks": 0 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.minimum_impact_velocity, 4.5);
        assert_eq!(config.quiet_policy, QuietImpactPolicy::MuteBelow { floor: -2.0 });
        assert!(config.explosion.enabled);
        assert_eq!(config.explosion.delay_ticks, 0);
        // Untouched fields keep their defaults.
        assert_eq!(config.explosion.intensity_per_speed, 100.0);
        assert_eq!(config.volume_curve.max_volume, 10.0);
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(ImpactConfig::from_json_str("{}").unwrap(), ImpactConfig::default());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ImpactConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_negative_threshold() {
        let err =
            ImpactConfig::from_json_str(r#"{ "minimum_impact_velocity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(v) if v == -1.0));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ImpactConfig::default();
        config.volume_curve.offset = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidVolumeCurve { field: "offset", .. })
        ));

        let mut config = ImpactConfig::default();
        config.variation = -0.1;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidVariation(_))));

        let mut config = ImpactConfig::default();
        config.impact_sound.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptySoundCollection)));

        let mut config = ImpactConfig::default();
        config.explosion.slope = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidExplosionCurve { field: "slope", .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_negative_volume_coefficient() {
        let json = r#"{ "volume_curve": { "coefficient": -1.0 } }"#;
        let err = ImpactConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidVolumeCurve { field: "coefficient", value } if value == -1.0
        ));
    }

    #[test]
    fn test_from_json_rejects_negative_volume_exponent() {
        let json = r#"{ "volume_curve": { "exponent": -0.5 } }"#;
        let err = ImpactConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidVolumeCurve { field: "exponent", value } if value == -0.5
        ));
    }

    #[test]
    fn test_accepted_volume_curves_never_decrease() {
        let config = ImpactConfig::from_json_str(
            r#"{ "volume_curve": { "coefficient": 0.5, "exponent": 1.0, "offset": -8.0 } }"#,
        )
        .unwrap();
        let mut previous = config.volume_curve.volume(config.minimum_impact_velocity);
        for step in 1..200 {
            let v = config.minimum_impact_velocity + step as f64 * 5.0;
            let current = config.volume_curve.volume(v);
            assert!(current >= previous, "volume decreased at v={}", v);
            previous = current;
        }
    }

    #[test]
    fn test_validate_rejects_nan_mute_floor() {
        let config = ImpactConfig {
            quiet_policy: QuietImpactPolicy::MuteBelow { floor: f64::NAN },
            ..ImpactConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMuteFloor(_))));
    }

    #[test]
    fn test_validate_rejects_empty_explosion_kind() {
        let mut config = ImpactConfig::default();
        config.explosion.kind.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyExplosionKind)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidThreshold(-3.0).to_string(),
            "minimum impact velocity must be finite and non-negative, got -3"
        );
    }
}
