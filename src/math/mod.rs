pub mod transform;
pub mod vec2;

pub use transform::{Affine2, Transform};
pub use vec2::Vec2;
