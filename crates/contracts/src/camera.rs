//! CameraIntrinsics - pinhole camera model output
//!
//! Camera matrix layout is fixed: `[[fx, 0, cx], [0, fy, cy], [0, 0, 1]]`.
//! Distortion follows the OpenCV order `[k1, k2, p1, p2, k3]`.

use nalgebra::{Matrix3, Vector5};
use serde::{Deserialize, Serialize};

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub height: u32,
    pub width: u32,
}

impl ImageSize {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// `(height, width)`, the order image buffers are indexed in
    pub fn as_tuple(&self) -> (u32, u32) {
        (self.height, self.width)
    }
}

/// Camera intrinsic calibration
#[derive(Debug, Clone, PartialEq)]
pub struct CameraIntrinsics {
    /// Intrinsic matrix K (3x3)
    pub camera_matrix: Matrix3<f64>,

    /// Distortion coefficients `[k1, k2, p1, p2, k3]`
    pub distortion: Vector5<f64>,

    /// Image size (height, width)
    pub image_size: ImageSize,
}

impl CameraIntrinsics {
    /// Build intrinsics from raw pinhole and radial-tangential parameters.
    ///
    /// Distortion arguments are taken in OpenCV order.
    pub fn new(
        fx: f64,
        fy: f64,
        cx: f64,
        cy: f64,
        distortion: [f64; 5],
        image_size: ImageSize,
    ) -> Self {
        #[rustfmt::skip]
        let camera_matrix = Matrix3::new(
            fx,  0.0, cx,
            0.0, fy,  cy,
            0.0, 0.0, 1.0,
        );

        Self {
            camera_matrix,
            distortion: Vector5::from(distortion),
            image_size,
        }
    }

    #[inline]
    pub fn fx(&self) -> f64 {
        self.camera_matrix[(0, 0)]
    }

    #[inline]
    pub fn fy(&self) -> f64 {
        self.camera_matrix[(1, 1)]
    }

    #[inline]
    pub fn cx(&self) -> f64 {
        self.camera_matrix[(0, 2)]
    }

    #[inline]
    pub fn cy(&self) -> f64 {
        self.camera_matrix[(1, 2)]
    }

    /// Camera matrix as row-major nested arrays
    pub fn camera_matrix_rows(&self) -> [[f64; 3]; 3] {
        let k = &self.camera_matrix;
        [
            [k[(0, 0)], k[(0, 1)], k[(0, 2)]],
            [k[(1, 0)], k[(1, 1)], k[(1, 2)]],
            [k[(2, 0)], k[(2, 1)], k[(2, 2)]],
        ]
    }
}
