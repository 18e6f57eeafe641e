use crate::geometry::{Quaternion, Vec3};

/// Pure rotation stored as a column-major 4×4 matrix. The last row and column are
/// always `(0, 0, 0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix {
    columns: [f32; 16],
}

impl RotationMatrix {
    pub const IDENTITY: Self = Self {
        columns: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub fn column_major(&self) -> [f32; 16] {
        self.columns
    }

    /// Element at `row`, `column`.
    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.columns[column * 4 + row]
    }

    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.columns;
        Vec3 {
            x: m[0] * v.x + m[4] * v.y + m[8] * v.z,
            y: m[1] * v.x + m[5] * v.y + m[9] * v.z,
            z: m[2] * v.x + m[6] * v.y + m[10] * v.z,
        }
    }

    pub fn to_homogeneous(&self) -> [[f32; 4]; 4] {
        let m = &self.columns;
        [
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ]
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Quaternion> for RotationMatrix {
    fn from(r: Quaternion) -> Self {
        let ww = r.w * r.w;
        let xx = r.x * r.x;
        let yy = r.y * r.y;
        let zz = r.z * r.z;
        let wx = r.w * r.x;
        let wy = r.w * r.y;
        let wz = r.w * r.z;
        let xy = r.x * r.y;
        let xz = r.x * r.z;
        let yz = r.y * r.z;
        Self {
            columns: [
                ww + xx - yy - zz,
                2.0 * (xy + wz),
                2.0 * (xz - wy),
                0.0,
                2.0 * (xy - wz),
                ww - xx + yy - zz,
                2.0 * (yz + wx),
                0.0,
                2.0 * (xz + wy),
                2.0 * (yz - wx),
                ww - xx - yy + zz,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EulerAngles;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn identity_quaternion_gives_identity_matrix() {
        assert_eq!(Quaternion::IDENTITY.rotation_matrix(), RotationMatrix::IDENTITY);
    }

    #[test]
    fn quarter_turns_about_each_axis() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        let about_z = EulerAngles::new(0.0, 0.0, 90.0).to_quaternion().rotation_matrix();
        assert_vec_eq(about_z.transform_vector(x), y);

        let about_x = EulerAngles::new(90.0, 0.0, 0.0).to_quaternion().rotation_matrix();
        assert_vec_eq(about_x.transform_vector(y), z);

        let about_y = EulerAngles::new(0.0, 90.0, 0.0).to_quaternion().rotation_matrix();
        assert_vec_eq(about_y.transform_vector(z), x);
    }

    #[test]
    fn affine_part_stays_identity() {
        let m = EulerAngles::new(12.0, -70.0, 200.0)
            .to_quaternion()
            .rotation_matrix();
        for i in 0..3 {
            assert_eq!(m.get(3, i), 0.0);
            assert_eq!(m.get(i, 3), 0.0);
        }
        assert_eq!(m.get(3, 3), 1.0);
    }

    #[test]
    fn columns_are_orthonormal() {
        let h = EulerAngles::new(33.0, 71.0, -15.0)
            .to_quaternion()
            .rotation_matrix()
            .to_homogeneous();
        let col = |i: usize| Vec3::new(h[i][0], h[i][1], h[i][2]);
        for i in 0..3 {
            assert_abs_diff_eq!(col(i).length(), 1.0, epsilon = 1e-5);
            for j in (i + 1)..3 {
                assert_abs_diff_eq!(col(i).dot(col(j)), 0.0, epsilon = 1e-5);
            }
        }
    }
}
