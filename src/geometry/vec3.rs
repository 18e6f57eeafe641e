use std::f32::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::geometry::{lerp, Interpolable};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Divides by the length, so a zero vector yields NaN components.
    pub fn normalize(self) -> Self {
        let norm = self.length();
        Vec3 {
            x: self.x / norm,
            y: self.y / norm,
            z: self.z / norm,
        }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle between two directions, in degrees.
    pub fn angle_between(self, other: Self) -> f32 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Heading of the direction projected on the XZ plane, in radians within `[0, 2π)`.
    /// Zero points along +X and the angle grows towards -Z.
    pub fn xz_heading(self) -> f32 {
        let unit = self.normalize();
        let first_quadrant = unit.x.abs().clamp(0.0, 1.0).acos();
        let x = unit.x;
        let z = -unit.z;
        let heading = if x >= 0.0 && z >= 0.0 {
            first_quadrant
        } else if x <= 0.0 && z >= 0.0 {
            PI - first_quadrant
        } else if x <= 0.0 && z <= 0.0 {
            PI + first_quadrant
        } else {
            TAU - first_quadrant
        };
        if heading >= TAU {
            heading - TAU
        } else {
            heading
        }
    }
}

impl Interpolable for Vec3 {
    fn linear_interpolation(self, other: Self, alpha: f32) -> Self {
        lerp(self, other, alpha)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, other: f32) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn length_and_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert_abs_diff_eq!(v.length(), 5.0);
        let n = v.normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(n.z, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn normalize_zero_is_nan() {
        assert!(Vec3::ZERO.normalize().x.is_nan());
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let z = Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn angle_between_in_degrees() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(a.angle_between(Vec3::new(0.0, 2.0, 0.0)), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(a.angle_between(Vec3::new(-5.0, 0.0, 0.0)), 180.0, epsilon = 1e-4);
        // rounding would push the cosine just above 1
        assert_abs_diff_eq!(
            Vec3::new(0.1, 0.2, 0.3).angle_between(Vec3::new(0.1, 0.2, 0.3)),
            0.0,
            epsilon = 5e-2
        );
    }

    #[test]
    fn xz_heading_quadrants() {
        assert_abs_diff_eq!(Vec3::new(1.0, 0.0, 0.0).xz_heading(), 0.0);
        assert_abs_diff_eq!(Vec3::new(0.0, 0.0, -1.0).xz_heading(), FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3::new(-1.0, 0.0, 0.0).xz_heading(), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(
            Vec3::new(0.0, 0.0, 1.0).xz_heading(),
            3.0 * FRAC_PI_2,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Vec3::new(1.0, 0.0, 1.0).xz_heading(),
            TAU - PI / 4.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn operators() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::ONE;
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::new(2.0, 0.0, 0.0);
        assert_eq!(v, Vec3::new(0.0, 3.0, 4.0));
        assert_eq!(-v * 2.0, Vec3::new(0.0, -6.0, -8.0));
        assert_eq!(v * Vec3::new(1.0, 2.0, 0.5), Vec3::new(0.0, 6.0, 2.0));
    }
}
