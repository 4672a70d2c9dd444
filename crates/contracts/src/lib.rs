//! # Contracts
//!
//! Frozen interface contracts, defining the calibration data structures shared
//! between the loader, the CLI and downstream consumers.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Conventions
//! - Lengths in meters, pixel coordinates in pixels
//! - Quaternions are stored scalar-first in files; see [`QuaternionWxyz`]

mod camera;
mod error;
mod topics;
mod transform;

pub use camera::*;
pub use error::*;
pub use topics::*;
pub use transform::*;
