use crate::geometry::Quaternion;

/// Orientation as three angles in degrees: `alpha` rolls about X, `beta` about Y and
/// `gamma` about Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl EulerAngles {
    pub const fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Composes the three half-angle axis quaternions in roll, yaw, pitch order.
    pub fn to_quaternion(self) -> Quaternion {
        let alpha = self.alpha.to_radians() / 2.0;
        let beta = self.beta.to_radians() / 2.0;
        let gamma = self.gamma.to_radians() / 2.0;

        let roll = Quaternion::new(alpha.cos(), alpha.sin(), 0.0, 0.0);
        let yaw = Quaternion::new(beta.cos(), 0.0, beta.sin(), 0.0);
        let pitch = Quaternion::new(gamma.cos(), 0.0, 0.0, gamma.sin());

        roll * yaw * pitch
    }

    /// Adds `delta` degrees to each angle, keeping every angle inside `(-360, 360)`.
    pub fn wrapped_add(self, delta: EulerAngles) -> Self {
        Self {
            alpha: wrap_degrees(self.alpha, delta.alpha),
            beta: wrap_degrees(self.beta, delta.beta),
            gamma: wrap_degrees(self.gamma, delta.gamma),
        }
    }
}

impl From<EulerAngles> for Quaternion {
    fn from(angles: EulerAngles) -> Self {
        angles.to_quaternion()
    }
}

fn wrap_degrees(angle: f32, delta: f32) -> f32 {
    let angle = angle + delta;
    if delta > 0.0 && angle >= 360.0 {
        angle - 360.0
    } else if delta < 0.0 && angle <= -360.0 {
        angle + 360.0
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_1_SQRT_2;

    #[test]
    fn zero_angles_give_identity() {
        assert_eq!(EulerAngles::default().to_quaternion(), Quaternion::IDENTITY);
    }

    #[test]
    fn single_axis_rotations() {
        let q = EulerAngles::new(0.0, 90.0, 0.0).to_quaternion();
        assert_abs_diff_eq!(q.w, FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_abs_diff_eq!(q.x, 0.0);
        assert_abs_diff_eq!(q.y, FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_abs_diff_eq!(q.z, 0.0);

        let q = Quaternion::from(EulerAngles::new(180.0, 0.0, 0.0));
        assert_abs_diff_eq!(q.w, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(q.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn composition_order_is_roll_yaw_pitch() {
        let angles = EulerAngles::new(30.0, 45.0, 60.0);
        let roll = EulerAngles::new(30.0, 0.0, 0.0).to_quaternion();
        let yaw = EulerAngles::new(0.0, 45.0, 0.0).to_quaternion();
        let pitch = EulerAngles::new(0.0, 0.0, 60.0).to_quaternion();

        let expected = roll * yaw * pitch;
        let q = angles.to_quaternion();
        assert_abs_diff_eq!(q.w, expected.w, epsilon = 1e-6);
        assert_abs_diff_eq!(q.x, expected.x, epsilon = 1e-6);
        assert_abs_diff_eq!(q.y, expected.y, epsilon = 1e-6);
        assert_abs_diff_eq!(q.z, expected.z, epsilon = 1e-6);

        let reversed = pitch * yaw * roll;
        assert!((q.x - reversed.x).abs() > 1e-3 || (q.z - reversed.z).abs() > 1e-3);
    }

    #[test]
    fn wrapping_stays_inside_open_range() {
        let up = EulerAngles::new(355.0, 0.0, 0.0).wrapped_add(EulerAngles::new(5.0, 0.0, 0.0));
        assert_abs_diff_eq!(up.alpha, 0.0);

        let down =
            EulerAngles::new(0.0, -355.0, 0.0).wrapped_add(EulerAngles::new(0.0, -5.0, 0.0));
        assert_abs_diff_eq!(down.beta, 0.0);

        let plain = EulerAngles::new(10.0, 20.0, 30.0).wrapped_add(EulerAngles::new(5.0, -5.0, 0.0));
        assert_eq!(plain, EulerAngles::new(15.0, 15.0, 30.0));
    }
}
