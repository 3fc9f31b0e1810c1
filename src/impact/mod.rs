pub mod geometry;
pub mod velocity;

pub use geometry::world_to_local;
pub use velocity::{differential_speed, point_velocity};
