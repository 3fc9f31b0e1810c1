use super::vec2::Vec2;

/// A body's placement in the world: rotation about its origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64, // Angle in radians
}

/// A 2x3 affine matrix acting on points as `x_axis * p.x + y_axis * p.y + translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub x_axis: Vec2,
    pub y_axis: Vec2,
    pub translation: Vec2,
}

impl Transform {
    /// Creates a new transform.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Local-to-world matrix.
    pub fn world_matrix(&self) -> Affine2 {
        let (sin_a, cos_a) = self.rotation.sin_cos();
        Affine2 {
            x_axis: Vec2::new(cos_a, sin_a),
            y_axis: Vec2::new(-sin_a, cos_a),
            translation: self.position,
        }
    }

    /// World-to-local matrix. A rigid transform is always invertible, so this is
    /// built in closed form (transpose of the rotation, rotated negative translation).
    pub fn inv_world_matrix(&self) -> Affine2 {
        let (sin_a, cos_a) = self.rotation.sin_cos();
        let x_axis = Vec2::new(cos_a, -sin_a);
        let y_axis = Vec2::new(sin_a, cos_a);
        let p = self.position;
        Affine2 {
            x_axis,
            y_axis,
            translation: -(x_axis * p.x + y_axis * p.y),
        }
    }

    /// Applies the transform (rotation then translation) to a point.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.world_matrix().transform_point(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.x_axis * point.x + self.y_axis * point.y + self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a.x - b.x).abs() < EPSILON, "x mismatch: {:?} vs {:?}", a, b);
        assert!((a.y - b.y).abs() < EPSILON, "y mismatch: {:?} vs {:?}", a, b);
    }

    #[test]
    fn test_transform_identity() {
        let t = Transform::identity();
        let p = Vec2::new(5.0, -3.0);
        assert_close(t.apply(p), p);
        assert_close(t.inv_world_matrix().transform_point(p), p);
    }

    #[test]
    fn test_transform_apply_combined() {
        // Rotate (1,0) by 90 degrees to (0,1), then translate by (10,5).
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 2.0);
        assert_close(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(10.0, 6.0));
    }

    #[test]
    fn test_inv_world_matrix_translation() {
        let t = Transform::new(Vec2::new(10.0, 5.0), 0.0);
        let local = t.inv_world_matrix().transform_point(Vec2::new(11.0, 7.0));
        assert_close(local, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_inv_world_matrix_rotation_90_deg() {
        let t = Transform::new(Vec2::ZERO, PI / 2.0);
        let inv = t.inv_world_matrix();
        assert_close(inv.transform_point(Vec2::new(0.0, 1.0)), Vec2::new(1.0, 0.0));
        assert_close(inv.transform_point(Vec2::new(-1.0, 0.0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_inv_world_matrix_round_trip() {
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 4.0);
        let p_local = Vec2::new(1.0, 1.0);
        let p_world = t.apply(p_local);
        assert_close(t.inv_world_matrix().transform_point(p_world), p_local);
    }

    #[test]
    fn test_inv_world_matrix_undoes_world_matrix_on_a_grid() {
        let t = Transform::new(Vec2::new(-3.5, 12.0), 1.234);
        let inv = t.inv_world_matrix();
        for ix in -3..=3 {
            for iy in -3..=3 {
                let p = Vec2::new(ix as f64 * 1.5, iy as f64 * -2.25);
                assert_close(inv.transform_point(t.apply(p)), p);
                assert_close(t.apply(inv.transform_point(p)), p);
            }
        }
    }
}
