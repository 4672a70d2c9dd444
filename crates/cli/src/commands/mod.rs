//! Command implementations.

mod check;
mod intrinsics;
mod param;
mod topics;
mod transform;

pub use check::run_check;
pub use intrinsics::run_intrinsics;
pub use param::run_param;
pub use topics::run_topics;
pub use transform::run_transform;

use anyhow::Result;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
