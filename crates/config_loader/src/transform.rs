//! Quaternion to homogeneous transform construction

use contracts::{QuaternionWxyz, QuaternionXyzw, Transform};
use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3, Vector4};

/// Quaternions with a norm at or below this cannot be normalized
const MIN_QUATERNION_NORM: f64 = 1e-12;

/// Rotation matrix of a scalar-last quaternion.
///
/// The quaternion is normalized first. Returns `None` for a zero-norm or
/// non-finite quaternion.
pub fn rotation_from_xyzw(q: QuaternionXyzw) -> Option<Matrix3<f64>> {
    if !q.to_array().iter().all(|c| c.is_finite()) {
        return None;
    }

    // nalgebra stores quaternion coordinates as [i, j, k, w]
    let raw = Quaternion::from(Vector4::new(q.x, q.y, q.z, q.w));
    UnitQuaternion::try_new(raw, MIN_QUATERNION_NORM)
        .map(|unit| unit.to_rotation_matrix().into_inner())
}

/// Homogeneous transform from a position and a file-order quaternion
pub fn build_transform(position: [f64; 3], rotation: QuaternionWxyz) -> Option<Transform> {
    let rotation = rotation_from_xyzw(rotation.to_xyzw())?;
    Some(Transform::from_parts(&rotation, &Vector3::from(position)))
}
