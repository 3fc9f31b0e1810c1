pub mod config;

pub use config::{ConfigError, ImpactConfig, DEFAULT_VARIATION};
