//! `intrinsics` command implementation.

use anyhow::{Context, Result};
use config_loader::{CameraIntrinsics, ConfigLoader, ImageSize};
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::cli::OutputArgs;

/// Intrinsics for JSON output
#[derive(Serialize)]
struct IntrinsicsInfo {
    camera_matrix: [[f64; 3]; 3],
    /// `[k1, k2, p1, p2, k3]`
    distortion: Vec<f64>,
    image_size: ImageSize,
}

impl From<&CameraIntrinsics> for IntrinsicsInfo {
    fn from(intr: &CameraIntrinsics) -> Self {
        Self {
            camera_matrix: intr.camera_matrix_rows(),
            distortion: intr.distortion.iter().copied().collect(),
            image_size: intr.image_size,
        }
    }
}

/// Execute the `intrinsics` command
pub fn run_intrinsics(args: &OutputArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading camera intrinsics");

    let intrinsics = ConfigLoader::load_camera_intrinsics(&args.config).with_context(|| {
        format!(
            "Failed to load camera intrinsics from {}",
            args.config.display()
        )
    })?;

    if args.json {
        print_json(&IntrinsicsInfo::from(&intrinsics))?;
    } else {
        print_intrinsics(&intrinsics);
    }

    Ok(())
}

fn print_intrinsics(intr: &CameraIntrinsics) {
    println!("Camera matrix:");
    for row in intr.camera_matrix_rows() {
        println!("  [{:>12.4} {:>12.4} {:>12.4}]", row[0], row[1], row[2]);
    }

    let d = &intr.distortion;
    println!("\nDistortion (k1, k2, p1, p2, k3):");
    println!(
        "  [{:.6e}, {:.6e}, {:.6e}, {:.6e}, {:.6e}]",
        d[0], d[1], d[2], d[3], d[4]
    );

    println!(
        "\nImage size (height x width): {} x {}",
        intr.image_size.height, intr.image_size.width
    );
}
