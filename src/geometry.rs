use std::ops::{Add, Mul};

pub use euler::EulerAngles;
pub use quaternion::{slerp, Quaternion, SLERP_EPSILON};
pub use rotation_matrix::RotationMatrix;
pub use transform::{Rotation, Transform};
pub use vec3::Vec3;

mod euler;
mod quaternion;
mod rotation_matrix;
mod transform;
mod vec3;

/// Values that can be blended between two keyframes.
pub trait Interpolable {
    fn linear_interpolation(self, other: Self, alpha: f32) -> Self;
}

/// `a * (1 - t) + b * t`, for scalars and vectors alike.
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    a * (1.0 - t) + b * t
}

impl Interpolable for f32 {
    fn linear_interpolation(self, other: Self, alpha: f32) -> Self {
        lerp(self, other, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lerp_scalar_midpoint() {
        assert_abs_diff_eq!(lerp(2.0_f32, 6.0, 0.5), 4.0);
        assert_abs_diff_eq!(2.0_f32.linear_interpolation(6.0, 0.25), 3.0);
    }

    #[test]
    fn lerp_vector_midpoint() {
        let mid = lerp(Vec3::new(0.0, 2.0, -4.0), Vec3::new(10.0, 4.0, 4.0), 0.5);
        assert_abs_diff_eq!(mid.x, 5.0);
        assert_abs_diff_eq!(mid.y, 3.0);
        assert_abs_diff_eq!(mid.z, 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-3.0, 0.5, 8.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
}
