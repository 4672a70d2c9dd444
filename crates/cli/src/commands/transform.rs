//! `transform` command implementation.

use anyhow::{Context, Result};
use config_loader::{ConfigLoader, Transform};
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::cli::TransformArgs;

/// Transform for JSON output
#[derive(Serialize)]
struct TransformInfo {
    key: String,
    inverse: bool,
    matrix: [[f64; 4]; 4],
    translation: [f64; 3],
    /// `[w, x, y, z]`
    rotation: [f64; 4],
}

impl TransformInfo {
    fn new(key: &str, inverse: bool, transform: &Transform) -> Self {
        let t = transform.translation();
        Self {
            key: key.to_string(),
            inverse,
            matrix: transform.rows(),
            translation: [t.x, t.y, t.z],
            rotation: transform.to_quaternion_wxyz().to_array(),
        }
    }
}

/// Execute the `transform` command
pub fn run_transform(args: &TransformArgs) -> Result<()> {
    let config = &args.output.config;
    info!(config = %config.display(), key = %args.key, "Loading transform");

    let mut transform = ConfigLoader::load_transform(config, &args.key).with_context(|| {
        format!(
            "Failed to load transform '{}' from {}",
            args.key,
            config.display()
        )
    })?;
    if args.inverse {
        transform = transform.inverse();
    }

    let info = TransformInfo::new(&args.key, args.inverse, &transform);
    if args.output.json {
        print_json(&info)?;
    } else {
        print_transform(&info);
    }

    Ok(())
}

fn print_transform(info: &TransformInfo) {
    let label = if info.inverse { " (inverse)" } else { "" };
    println!("{}{}:", info.key, label);
    for row in &info.matrix {
        println!(
            "  [{:>10.6} {:>10.6} {:>10.6} {:>10.6}]",
            row[0], row[1], row[2], row[3]
        );
    }
    let [w, x, y, z] = info.rotation;
    println!("\n  translation: {:?}", info.translation);
    println!("  rotation [w, x, y, z]: [{w:.6}, {x:.6}, {y:.6}, {z:.6}]");
}
