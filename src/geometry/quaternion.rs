use std::ops::{Add, Mul, Neg};

use crate::geometry::{EulerAngles, Interpolable, RotationMatrix};

/// Below this angle the sine weights of a slerp are replaced by linear ones.
pub const SLERP_EPSILON: f32 = 1e-6;

/// Rotation quaternion stored as scalar part `w` followed by the vector part.
///
/// Nothing renormalizes after a product, so long chains of compositions drift away
/// from unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    pub fn from_euler_angles(angles: EulerAngles) -> Self {
        angles.to_quaternion()
    }

    pub fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Self {
        self * (1.0 / self.length())
    }

    pub fn rotation_matrix(self) -> RotationMatrix {
        RotationMatrix::from(self)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Spherical interpolation from `from` to `to` along the shorter arc.
///
/// `to` is negated when the two quaternions lie in opposite hemispheres, and the arc
/// angle is taken from the corrected dot product. The result is not renormalized.
pub fn slerp(from: Quaternion, to: Quaternion, t: f32) -> Quaternion {
    let d = from.dot(to);
    let target = if d < 0.0 { to * -1.0 } else { to };
    // rounding can push |d| past 1 for unit inputs
    let angle = d.abs().min(1.0).acos();
    let (from_weight, to_weight) = if angle > SLERP_EPSILON {
        let norm = angle.sin();
        (
            ((1.0 - t) * angle).sin() / norm,
            (t * angle).sin() / norm,
        )
    } else {
        // avoid dividing by a very small number
        (1.0 - t, t)
    };
    from * from_weight + target * to_weight
}

impl Interpolable for Quaternion {
    fn linear_interpolation(self, other: Self, alpha: f32) -> Self {
        slerp(self, other, alpha)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            w: self.w + other.w,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

/// Hamilton product, `self` applied after `other` when used on vectors.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y + self.y * other.w + self.z * other.x - self.x * other.z,
            z: self.w * other.z + self.z * other.w + self.x * other.y - self.y * other.x,
        }
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, other: f32) -> Self {
        Self {
            w: self.w * other,
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}
