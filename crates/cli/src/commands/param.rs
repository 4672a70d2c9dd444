//! `param` command implementation.

use anyhow::{Context, Result};
use config_loader::{ConfigLoader, ParameterMap, Value};
use tracing::info;

use super::print_json;
use crate::cli::ParamArgs;

/// Execute the `param` command
///
/// A single key prints its bare value; several keys print a key -> value map.
pub fn run_param(args: &ParamArgs) -> Result<()> {
    let config = &args.output.config;
    info!(config = %config.display(), keys = ?args.keys, "Loading parameters");

    if let [key] = args.keys.as_slice() {
        let value = ConfigLoader::load_parameter(config, key)
            .with_context(|| format!("Failed to load parameter from {}", config.display()))?;
        let value = value.unwrap_or(Value::Null);

        if args.output.json {
            print_json(&value)?;
        } else {
            print!("{}", serde_yaml::to_string(&value)?);
        }
        return Ok(());
    }

    let params: ParameterMap = ConfigLoader::load_parameters(config, &args.keys)
        .with_context(|| format!("Failed to load parameters from {}", config.display()))?;

    if args.output.json {
        print_json(&params)?;
    } else {
        print!("{}", serde_yaml::to_string(&params)?);
    }

    Ok(())
}
