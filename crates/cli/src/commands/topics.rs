//! `topics` command implementation.

use anyhow::{Context, Result};
use config_loader::ConfigLoader;
use tracing::{info, warn};

use super::print_json;
use crate::cli::OutputArgs;

/// Execute the `topics` command
pub fn run_topics(args: &OutputArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading topic names");

    let topics = ConfigLoader::load_topic_names(&args.config)
        .with_context(|| format!("Failed to load topics from {}", args.config.display()))?;

    if topics.is_empty() {
        warn!("No topics configured");
    }

    if args.json {
        print_json(&topics)?;
    } else {
        for (name, topic) in topics.entries() {
            println!("{:<6} {}", name, topic.unwrap_or("<unset>"));
        }
    }

    Ok(())
}
