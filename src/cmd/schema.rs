//! Schema command - print the JSON Schema of `convert --format=json` output

use crate::engine::ConversionResult;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = schema_for!(ConversionResult);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
