//! `check` command implementation.

use anyhow::Result;
use config_loader::{ConfigDocument, ConfigLoader, CAMERA_KEY, TOPICS_KEY, TRANSFORM_FIELDS};
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::cli::OutputArgs;

/// Check result for JSON output
#[derive(Serialize)]
struct CheckResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<DocumentSummary>,
}

#[derive(Serialize)]
struct DocumentSummary {
    keys: Vec<String>,
    has_camera: bool,
    has_topics: bool,
    transforms: Vec<String>,
}

/// Execute the `check` command
pub fn run_check(args: &OutputArgs) -> Result<()> {
    info!(config = %args.config.display(), "Checking calibration file");

    let result = check_config(args);

    if args.json {
        print_json(&result)?;
    } else {
        print_check_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Calibration file check failed")
    }
}

fn check_config(args: &OutputArgs) -> CheckResult {
    let config_path = args.config.display().to_string();

    if !ConfigLoader::file_exists(&args.config) {
        return CheckResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            summary: None,
        };
    }

    match ConfigLoader::load_document(&args.config) {
        Ok(document) => CheckResult {
            valid: true,
            config_path,
            error: None,
            summary: Some(summarize(&document)),
        },
        Err(e) => CheckResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            summary: None,
        },
    }
}

fn summarize(document: &ConfigDocument) -> DocumentSummary {
    let transforms = document
        .root()
        .iter()
        .filter(|(_, value)| {
            value.as_mapping().is_some_and(|entry| {
                TRANSFORM_FIELDS
                    .iter()
                    .all(|field| entry.contains_key(*field))
            })
        })
        .filter_map(|(key, _)| key.as_str().map(str::to_owned))
        .collect();

    DocumentSummary {
        keys: document.keys().map(str::to_owned).collect(),
        has_camera: document.contains_key(CAMERA_KEY),
        has_topics: document.contains_key(TOPICS_KEY),
        transforms,
    }
}

fn print_check_result(result: &CheckResult) {
    if result.valid {
        println!("✓ Calibration file is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Keys: {}", summary.keys.join(", "));
            println!("  Camera block: {}", yes_no(summary.has_camera));
            println!("  Topics block: {}", yes_no(summary.has_topics));
            if summary.transforms.is_empty() {
                println!("  Transforms: none");
            } else {
                println!("  Transforms: {}", summary.transforms.join(", "));
            }
        }
    } else {
        println!("✗ Calibration file is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
