use crate::geometry::{RotationMatrix, Vec3};

/// Axis-angle descriptor carried alongside a transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub angle: f32,
    pub axis: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub scale: Vec3,
    pub rotation: Rotation,
}

impl Transform {
    pub fn new(translation: Vec3, scale: Vec3, rotation: Rotation) -> Self {
        Transform {
            translation,
            scale,
            rotation,
        }
    }

    pub fn at(translation: Vec3) -> Self {
        Transform {
            translation,
            ..Default::default()
        }
    }

    /// Column-major model matrix: scale, then `rotation`, then translation.
    pub fn model_matrix(&self, rotation: &RotationMatrix) -> [[f32; 4]; 4] {
        let [c0, c1, c2, _] = rotation.to_homogeneous();
        let s = self.scale;
        let t = self.translation;
        [
            [s.x * c0[0], s.x * c0[1], s.x * c0[2], 0.0],
            [s.y * c1[0], s.y * c1[1], s.y * c1[2], 0.0],
            [s.z * c2[0], s.z * c2[1], s.z * c2[2], 0.0],
            [t.x, t.y, t.z, 1.0],
        ]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new(Vec3::ZERO, Vec3::ONE, Rotation::default())
    }
}
