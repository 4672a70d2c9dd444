//! Presence checks
//!
//! Rules:
//! - the `camera` block exists and carries every intrinsic field
//! - a transform entry is a mapping with both `Position` and `Rotation`
//!
//! Types are not checked here; the typed sections reject bad values.

use contracts::{ConfigError, Result};
use serde_yaml::{Mapping, Value};

use crate::parser::value_kind;

/// Top-level key of the intrinsics block
pub const CAMERA_KEY: &str = "camera";

/// Fields required inside the intrinsics block
pub const CAMERA_FIELDS: [&str; 11] = [
    "fx",
    "fy",
    "cx",
    "cy",
    "k1",
    "k2",
    "k3",
    "p1",
    "p2",
    "image_width",
    "image_height",
];

/// Fields required inside a transform entry
pub const TRANSFORM_FIELDS: [&str; 2] = ["Position", "Rotation"];

/// Check the camera block, returning it on success.
///
/// Reports the first missing field as a dotted key (`camera.k3`).
pub fn validate_camera(root: &Mapping) -> Result<&Mapping> {
    let camera = root
        .get(CAMERA_KEY)
        .ok_or_else(|| ConfigError::missing_key(CAMERA_KEY))?;

    let camera = camera.as_mapping().ok_or_else(|| {
        ConfigError::invalid_data(
            CAMERA_KEY,
            format!("expected a mapping, got {}", value_kind(camera)),
        )
    })?;

    if let Some(field) = first_missing(camera, &CAMERA_FIELDS) {
        return Err(ConfigError::missing_key(format!("{CAMERA_KEY}.{field}")));
    }

    Ok(camera)
}

/// Check a transform entry stored under `key`, returning it on success
pub fn validate_transform_entry<'a>(key: &str, entry: &'a Value) -> Result<&'a Mapping> {
    let entry = entry.as_mapping().ok_or_else(|| {
        ConfigError::invalid_data(
            key,
            format!(
                "does not contain valid transformation data: expected a mapping, got {}",
                value_kind(entry)
            ),
        )
    })?;

    if let Some(field) = first_missing(entry, &TRANSFORM_FIELDS) {
        return Err(ConfigError::invalid_data(
            key,
            format!("does not contain valid transformation data: missing '{field}'"),
        ));
    }

    Ok(entry)
}

fn first_missing<'k>(section: &Mapping, fields: &[&'k str]) -> Option<&'k str> {
    fields
        .iter()
        .copied()
        .find(|field| !section.contains_key(*field))
}
