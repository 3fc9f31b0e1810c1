pub mod classifier;
pub mod event;

// Re-export key types
pub use classifier::{
    classify, meets_threshold, ImpactDecision, QualifiedImpact, SkipReason, VesselQuery,
    VesselTags,
};
pub use event::CollisionEvent;
