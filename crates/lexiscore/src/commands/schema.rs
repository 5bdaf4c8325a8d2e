//! Schema command implementation

use clap::Args;
use lexiscore_core::MetricsRecord;
use tracing::{debug, instrument};

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema for one output row.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    let schema = schemars::schema_for!(MetricsRecord);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
