//! Rigid-body transforms and quaternion component orders
//!
//! Calibration files store quaternions scalar-first (`[w, x, y, z]`) while the
//! rotation construction works scalar-last (`[x, y, z, w]`). The two orders are
//! distinct types so a reorder can only happen through a named conversion.

use std::ops::Mul;

use nalgebra::{Matrix3, Matrix4, Rotation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Quaternion in scalar-first order, as stored in calibration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuaternionWxyz {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Quaternion in scalar-last order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuaternionXyzw {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl QuaternionWxyz {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Read `[w, x, y, z]`
    pub fn from_array([w, x, y, z]: [f64; 4]) -> Self {
        Self { w, x, y, z }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Move the scalar component to the end
    pub fn to_xyzw(self) -> QuaternionXyzw {
        QuaternionXyzw {
            x: self.x,
            y: self.y,
            z: self.z,
            w: self.w,
        }
    }
}

impl QuaternionXyzw {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Read `[x, y, z, w]`
    pub fn from_array([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Move the scalar component to the front
    pub fn to_wxyz(self) -> QuaternionWxyz {
        QuaternionWxyz {
            w: self.w,
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }
}

/// 4x4 homogeneous transform: rotation block top-left, translation column
/// top-right, bottom row `[0, 0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Embed `rotation` and `translation` into a 4x4 identity.
    ///
    /// `rotation` is expected to be orthonormal; it is not re-checked here.
    pub fn from_parts(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Self {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
        Self { matrix }
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix4<f64> {
        self.matrix
    }

    pub fn rotation(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Recover the rotation as a unit quaternion in file order.
    ///
    /// `q` and `-q` encode the same rotation; the returned sign is whatever
    /// the matrix decomposition yields.
    pub fn to_quaternion_wxyz(&self) -> QuaternionWxyz {
        let rotation = Rotation3::from_matrix_unchecked(self.rotation());
        let coords = UnitQuaternion::from_rotation_matrix(&rotation)
            .into_inner()
            .coords;
        QuaternionXyzw::new(coords[0], coords[1], coords[2], coords[3]).to_wxyz()
    }

    /// Rigid inverse: `[R^T | -R^T t]`
    pub fn inverse(&self) -> Self {
        let rt = self.rotation().transpose();
        let t = -(rt * self.translation());
        Self::from_parts(&rt, &t)
    }

    /// Matrix as row-major nested arrays
    pub fn rows(&self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.matrix[(r, c)];
            }
        }
        rows
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_moves_scalar() {
        let q = QuaternionWxyz::from_array([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(q.to_xyzw().to_array(), [0.2, 0.3, 0.4, 0.1]);
        assert_eq!(q.to_xyzw().to_wxyz(), q);
    }

    #[test]
    fn test_from_parts_layout() {
        let t = Transform::from_parts(&Matrix3::identity(), &Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(
            t.rows(),
            [
                [1.0, 0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0, 2.0],
                [0.0, 0.0, 1.0, 3.0],
                [0.0, 0.0, 0.0, 1.0],
            ]
        );
        assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.rotation(), Matrix3::identity());
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        #[rustfmt::skip]
        let rz = Matrix3::new(
            0.0, -1.0, 0.0,
            1.0,  0.0, 0.0,
            0.0,  0.0, 1.0,
        );
        let t = Transform::from_parts(&rz, &Vector3::new(0.5, -1.0, 2.0));
        let product = t * t.inverse();
        assert!((product.into_matrix() - Matrix4::identity()).norm() < 1e-12);
    }
}
