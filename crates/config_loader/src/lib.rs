//! # Config Loader
//!
//! Calibration configuration loading for the vision pipeline.
//!
//! Responsibilities:
//! - Parse YAML calibration files
//! - Check required keys are present
//! - Build camera intrinsics, topic sets and homogeneous transforms
//!
//! Every call reads the file afresh; nothing is cached between calls.
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let path = Path::new("calibration.yaml");
//! let intrinsics = ConfigLoader::load_camera_intrinsics(path).unwrap();
//! let t_imu_cam = ConfigLoader::load_transform(path, "T_imu_cam").unwrap();
//! println!("fx = {}, t = {:?}", intrinsics.fx(), t_imu_cam.translation());
//! ```

mod document;
mod parser;
mod transform;
mod validator;

pub use contracts::{
    CameraIntrinsics, ConfigError, ImageSize, QuaternionWxyz, QuaternionXyzw, Result, TopicSet,
    Transform,
};
pub use document::{ConfigDocument, ParameterMap, TOPICS_KEY};
pub use serde_yaml::Value;
pub use transform::{build_transform, rotation_from_xyzw};
pub use validator::{CAMERA_FIELDS, CAMERA_KEY, TRANSFORM_FIELDS};

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Configuration loader
///
/// Provides static methods to load calibration data from files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// True iff `path` is an existing regular file
    pub fn file_exists(path: &Path) -> bool {
        path.is_file()
    }

    /// Read and parse a YAML document
    ///
    /// # Errors
    /// - File not found / read failure
    /// - Parse failure, or a top level that is not a mapping
    pub fn load_document(path: &Path) -> Result<ConfigDocument> {
        let content = Self::read_file(path)?;
        let document = ConfigDocument::from_yaml_str(&content)?.with_source(path);
        debug!(path = %path.display(), keys = document.len(), "config document loaded");
        Ok(document)
    }

    /// Load camera matrix, distortion coefficients and image size
    ///
    /// # Errors
    /// - [`ConfigError::MissingKey`] if the `camera` block or a field is absent
    /// - [`ConfigError::InvalidData`] if a field is not numeric
    pub fn load_camera_intrinsics(path: &Path) -> Result<CameraIntrinsics> {
        Self::load_document(path)?.camera_intrinsics()
    }

    /// Load image / tf / event topic names; missing entries are `None`
    pub fn load_topic_names(path: &Path) -> Result<TopicSet> {
        Self::load_document(path)?.topic_names()
    }

    /// Load one top-level value; `None` if the key is absent
    pub fn load_parameter(path: &Path, key: &str) -> Result<Option<Value>> {
        Ok(Self::load_document(path)?.parameter(key).cloned())
    }

    /// Load several top-level values, keyed by the requested names
    pub fn load_parameters<S: AsRef<str>>(path: &Path, keys: &[S]) -> Result<ParameterMap> {
        Ok(Self::load_document(path)?.parameters(keys))
    }

    /// Load one top-level value and deserialize it as `T`
    pub fn load_parameter_as<T: DeserializeOwned>(path: &Path, key: &str) -> Result<Option<T>> {
        Self::load_document(path)?.parameter_as(key)
    }

    /// Load the homogeneous transform stored under `key`
    ///
    /// # Errors
    /// - [`ConfigError::MissingKey`] if `key` is absent
    /// - [`ConfigError::InvalidData`] if the entry lacks `Position` / `Rotation`
    ///   or holds malformed values
    pub fn load_transform(path: &Path, key: &str) -> Result<Transform> {
        Self::load_document(path)?.transform(key)
    }
}

impl ConfigLoader {
    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))
    }
}
