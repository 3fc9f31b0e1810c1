pub mod impact_system;

pub use impact_system::{ImpactOutcome, ImpactSystem};
