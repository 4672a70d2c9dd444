//! ConfigDocument - parsed calibration file
//!
//! Holds the top-level YAML mapping and turns its sections into typed values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use contracts::{
    CameraIntrinsics, ConfigError, ImageSize, QuaternionWxyz, Result, TopicSet, Transform,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::{parser, transform, validator};

/// Top-level key of the topic block
pub const TOPICS_KEY: &str = "topics";

/// Requested key -> value, `None` where the document lacks the key
pub type ParameterMap = BTreeMap<String, Option<Value>>;

/// Intrinsics block as written in the file
#[derive(Debug, Deserialize)]
struct CameraSection {
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    k1: f64,
    k2: f64,
    k3: f64,
    p1: f64,
    p2: f64,
    image_width: u32,
    image_height: u32,
}

impl From<CameraSection> for CameraIntrinsics {
    fn from(s: CameraSection) -> Self {
        CameraIntrinsics::new(
            s.fx,
            s.fy,
            s.cx,
            s.cy,
            [s.k1, s.k2, s.p1, s.p2, s.k3],
            ImageSize::new(s.image_height, s.image_width),
        )
    }
}

/// Transform entry as written in the file; `Rotation` is `[w, x, y, z]`
#[derive(Debug, Deserialize)]
struct TransformEntry {
    #[serde(rename = "Position")]
    position: Vec<f64>,
    #[serde(rename = "Rotation")]
    rotation: Vec<f64>,
}

/// Parsed calibration document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    source: Option<PathBuf>,
    root: Mapping,
}

impl ConfigDocument {
    /// Parse a document from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(Self::from_mapping(parser::parse_yaml(content)?))
    }

    pub fn from_mapping(root: Mapping) -> Self {
        Self { source: None, root }
    }

    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// File the document was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Top-level string keys, in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().filter_map(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Camera matrix, distortion and image size from the `camera` block
    pub fn camera_intrinsics(&self) -> Result<CameraIntrinsics> {
        let camera = validator::validate_camera(&self.root)?;
        let section: CameraSection = serde_yaml::from_value(Value::Mapping(camera.clone()))
            .map_err(|e| ConfigError::invalid_data(validator::CAMERA_KEY, e.to_string()))?;

        debug!(
            fx = section.fx,
            fy = section.fy,
            width = section.image_width,
            height = section.image_height,
            "camera intrinsics loaded"
        );
        Ok(section.into())
    }

    /// Topic names from the `topics` block; absent entries are `None`
    pub fn topic_names(&self) -> Result<TopicSet> {
        let topics = match self.get(TOPICS_KEY) {
            None | Some(Value::Null) => TopicSet::default(),
            Some(value) => serde_yaml::from_value(value.clone())
                .map_err(|e| ConfigError::invalid_data(TOPICS_KEY, e.to_string()))?,
        };

        debug!(
            image = ?topics.image,
            tf = ?topics.tf,
            event = ?topics.event,
            "topic names loaded"
        );
        Ok(topics)
    }

    /// Raw value of one top-level key
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        let value = self.get(key);
        if value.is_none() {
            warn!(key, "parameter not found");
        }
        value
    }

    /// Raw values of several top-level keys.
    ///
    /// Every requested key is present in the result.
    pub fn parameters<S: AsRef<str>>(&self, keys: &[S]) -> ParameterMap {
        keys.iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_string(), self.parameter(key).cloned())
            })
            .collect()
    }

    /// Typed value of one top-level key
    pub fn parameter_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.parameter(key)
            .map(|value| {
                serde_yaml::from_value(value.clone())
                    .map_err(|e| ConfigError::invalid_data(key, e.to_string()))
            })
            .transpose()
    }

    /// Homogeneous transform stored under `key`
    pub fn transform(&self, key: &str) -> Result<Transform> {
        let entry = self.get(key).ok_or_else(|| ConfigError::missing_key(key))?;
        let entry = validator::validate_transform_entry(key, entry)?;

        let TransformEntry { position, rotation } =
            serde_yaml::from_value(Value::Mapping(entry.clone()))
                .map_err(|e| ConfigError::invalid_data(key, e.to_string()))?;

        let position: [f64; 3] = position.try_into().map_err(|v: Vec<f64>| {
            ConfigError::invalid_data(
                key,
                format!("'Position' must have 3 elements, got {}", v.len()),
            )
        })?;
        if let Some(bad) = position.iter().find(|c| !c.is_finite()) {
            return Err(ConfigError::invalid_data(
                key,
                format!("'Position' components must be finite, got {bad}"),
            ));
        }
        let rotation: [f64; 4] = rotation.try_into().map_err(|v: Vec<f64>| {
            ConfigError::invalid_data(
                key,
                format!("'Rotation' must have 4 elements [w, x, y, z], got {}", v.len()),
            )
        })?;

        let quaternion = QuaternionWxyz::from_array(rotation);
        let transform = transform::build_transform(position, quaternion).ok_or_else(|| {
            ConfigError::invalid_data(
                key,
                format!("'Rotation' {rotation:?} is not a valid rotation quaternion"),
            )
        })?;

        debug!(key, ?position, ?rotation, "transform loaded");
        Ok(transform)
    }
}
