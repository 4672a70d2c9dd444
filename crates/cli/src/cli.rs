//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// calib-config - inspect camera calibration and sensor transform files
#[derive(Parser, Debug)]
#[command(
    name = "calib-config",
    author,
    version,
    about = "Inspect camera calibration and sensor transform YAML files",
    long_about = "Reads camera intrinsics, ROS topic names, free-form parameters and \n\
                  rigid-body transforms from a calibration YAML file and prints them."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "CALIB_CONFIG_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "CALIB_CONFIG_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the file exists and parses, and list its sections
    Check(OutputArgs),

    /// Print camera matrix, distortion coefficients and image size
    Intrinsics(OutputArgs),

    /// Print image / tf / event topic names
    Topics(OutputArgs),

    /// Print top-level parameter values
    Param(ParamArgs),

    /// Print a 4x4 homogeneous transform
    Transform(TransformArgs),
}

/// Arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Path to calibration file
    #[arg(
        short,
        long,
        default_value = "calibration.yaml",
        env = "CALIB_CONFIG_FILE"
    )]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `param` command
#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Top-level keys to print
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,
}

/// Arguments for the `transform` command
#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Key of the transform entry (e.g. T_imu_cam)
    #[arg(short, long)]
    pub key: String,

    /// Print the inverse transform instead
    #[arg(long)]
    pub inverse: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
