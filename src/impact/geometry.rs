//! World-to-body coordinate conversion.

use crate::math::{Transform, Vec2};

/// Expresses `world_point` in the local frame of a body placed at `transform`.
pub fn world_to_local(world_point: Vec2, transform: &Transform) -> Vec2 {
    transform.inv_world_matrix().transform_point(world_point)
}
