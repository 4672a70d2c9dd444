//! # Integration Tests
//!
//! End-to-end tests against calibration files on disk.
//!
//! Covers:
//! - Contract snapshot tests
//! - File-based loading of every section type
//! - Error taxonomy seen by callers

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        let _ = contracts::TopicSet::default();
        let _ = contracts::Transform::identity();
    }
}

#[cfg(test)]
mod fixtures {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// EuRoC-style stereo + IMU calibration
    pub const CALIBRATION_YAML: &str = r#"
camera:
  fx: 458.654
  fy: 457.296
  cx: 367.215
  cy: 248.375
  k1: -0.28340811
  k2: 0.07395907
  k3: 0.0
  p1: 0.00019359
  p2: 1.76187114e-05
  image_width: 752
  image_height: 480

topics:
  image: /cam0/image_raw
  tf: /tf
  event: /dvs/events

frame_rate: 20
world_frame: map
imu_noise:
  gyro: 1.6968e-04
  accel: 2.0e-3

T_imu_cam:
  Position: [1.0, 2.0, 3.0]
  Rotation: [1.0, 0.0, 0.0, 0.0]

T_base_imu:
  Position: [0.0, 0.0, 0.5]
  Rotation: [0.7071067811865476, 0.0, 0.0, 0.7071067811865476]

T_broken:
  Position: [0.0, 0.0, 0.0]
"#;

    pub fn write_yaml(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("calibration")
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }
}

#[cfg(test)]
mod loader_tests {
    use super::fixtures::{write_yaml, CALIBRATION_YAML};
    use approx::assert_relative_eq;
    use config_loader::{ConfigError, ConfigLoader, Value};
    use nalgebra::{Matrix3, Matrix4, Vector3};
    use std::path::Path;

    #[test]
    fn test_file_exists_before_load() {
        let file = write_yaml(CALIBRATION_YAML);
        assert!(ConfigLoader::file_exists(file.path()));

        let missing = file.path().with_extension("missing.yaml");
        assert!(!ConfigLoader::file_exists(&missing));
        let err = ConfigLoader::load_document(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_camera_intrinsics_from_file() {
        let file = write_yaml(CALIBRATION_YAML);
        let intr = ConfigLoader::load_camera_intrinsics(file.path()).unwrap();

        #[rustfmt::skip]
        let expected = Matrix3::new(
            458.654, 0.0,     367.215,
            0.0,     457.296, 248.375,
            0.0,     0.0,     1.0,
        );
        assert_eq!(intr.camera_matrix, expected);
        assert_eq!(
            intr.distortion.as_slice(),
            &[-0.28340811, 0.07395907, 0.00019359, 1.76187114e-05, 0.0]
        );
        assert_eq!(intr.image_size.as_tuple(), (480, 752));
    }

    #[test]
    fn test_camera_missing_field_names_key() {
        let content = CALIBRATION_YAML.replace("  p2: 1.76187114e-05\n", "");
        let file = write_yaml(&content);
        let err = ConfigLoader::load_camera_intrinsics(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { ref key } if key == "camera.p2"));
    }

    #[test]
    fn test_topics_from_file() {
        let file = write_yaml(CALIBRATION_YAML);
        let topics = ConfigLoader::load_topic_names(file.path()).unwrap();
        assert_eq!(topics.image.as_deref(), Some("/cam0/image_raw"));
        assert_eq!(topics.tf.as_deref(), Some("/tf"));
        assert_eq!(topics.event.as_deref(), Some("/dvs/events"));
    }

    #[test]
    fn test_topics_only_image() {
        let file = write_yaml("topics:\n  image: /camera/color\n");
        let topics = ConfigLoader::load_topic_names(file.path()).unwrap();
        assert_eq!(topics.image.as_deref(), Some("/camera/color"));
        assert_eq!(topics.tf, None);
        assert_eq!(topics.event, None);
    }

    #[test]
    fn test_topics_block_absent() {
        let file = write_yaml("frame_rate: 30\n");
        let topics = ConfigLoader::load_topic_names(file.path()).unwrap();
        assert!(topics.is_empty());
    }

    #[test]
    fn test_single_parameter_is_bare_value() {
        let file = write_yaml(CALIBRATION_YAML);
        let value = ConfigLoader::load_parameter(file.path(), "world_frame").unwrap();
        assert_eq!(value, Some(Value::String("map".into())));

        let absent = ConfigLoader::load_parameter(file.path(), "nope").unwrap();
        assert_eq!(absent, None);
    }

    #[test]
    fn test_multiple_parameters_are_a_map() {
        let file = write_yaml(CALIBRATION_YAML);
        let params =
            ConfigLoader::load_parameters(file.path(), &["frame_rate", "imu_noise", "nope"])
                .unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(params["frame_rate"].as_ref().and_then(Value::as_u64), Some(20));
        let noise = params["imu_noise"].as_ref().unwrap();
        assert_eq!(noise.get("accel").and_then(Value::as_f64), Some(2.0e-3));
        assert_eq!(params["nope"], None);
    }

    #[test]
    fn test_typed_parameter() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct ImuNoise {
            gyro: f64,
            accel: f64,
        }

        let file = write_yaml(CALIBRATION_YAML);
        let noise: ImuNoise = ConfigLoader::load_parameter_as(file.path(), "imu_noise")
            .unwrap()
            .unwrap();
        assert_eq!(
            noise,
            ImuNoise {
                gyro: 1.6968e-04,
                accel: 2.0e-3
            }
        );
    }

    #[test]
    fn test_identity_transform() {
        let file = write_yaml(CALIBRATION_YAML);
        let t = ConfigLoader::load_transform(file.path(), "T_imu_cam").unwrap();

        #[rustfmt::skip]
        let expected = Matrix4::new(
            1.0, 0.0, 0.0, 1.0,
            0.0, 1.0, 0.0, 2.0,
            0.0, 0.0, 1.0, 3.0,
            0.0, 0.0, 0.0, 1.0,
        );
        assert_relative_eq!(*t.matrix(), expected);
    }

    #[test]
    fn test_quarter_turn_transform_uses_scalar_first_rotation() {
        let file = write_yaml(CALIBRATION_YAML);
        let t = ConfigLoader::load_transform(file.path(), "T_base_imu").unwrap();

        // 90 degrees about z: x axis goes to y
        assert_relative_eq!(t.rotation() * Vector3::x(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(t.rotation() * Vector3::z(), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(t.translation(), Vector3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_transform_errors() {
        let file = write_yaml(CALIBRATION_YAML);

        let err = ConfigLoader::load_transform(file.path(), "T_missing").unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { .. }));

        let err = ConfigLoader::load_transform(file.path(), "T_broken").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidData { ref key, .. } if key == "T_broken"));
    }

    #[test]
    fn test_transform_round_trip() {
        let file = write_yaml(
            "T_a:\n  Position: [0.3, -0.1, 2.0]\n  Rotation: [0.5, 0.5, -0.5, 0.5]\n",
        );
        let t = ConfigLoader::load_transform(file.path(), "T_a").unwrap();
        let q = t.to_quaternion_wxyz();
        let sign = q.w.signum();
        assert_relative_eq!(sign * q.w, 0.5, epsilon = 1e-9);
        assert_relative_eq!(sign * q.x, 0.5, epsilon = 1e-9);
        assert_relative_eq!(sign * q.y, -0.5, epsilon = 1e-9);
        assert_relative_eq!(sign * q.z, 0.5, epsilon = 1e-9);

        let identity = t * t.inverse();
        assert_relative_eq!(*identity.matrix(), Matrix4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let file = write_yaml("camera:\n  fx: [1.0\n  fy: 2.0\n");
        let err = ConfigLoader::load_camera_intrinsics(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_directory_is_not_loadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!ConfigLoader::file_exists(dir.path()));
        assert!(ConfigLoader::load_document(Path::new(dir.path())).is_err());
    }
}
