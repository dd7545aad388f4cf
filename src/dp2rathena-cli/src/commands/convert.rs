//! Offline conversion of saved Divine Pride JSON

use anyhow::{bail, Context, Result};
use dp2rathena::RawRecord;
use serde_json::Value;
use std::path::Path;

use crate::file_io::{read_input, write_output};

/// Handle `convert`
pub fn handle(input: &Path, output: Option<&Path>) -> Result<()> {
    let bytes = read_input(Some(input))?;
    let records = parse_records(&bytes)?;

    let document = dp2rathena::convert_all(&records).context("Conversion failed")?;
    write_output(output, &document.to_yaml()?)?;

    tracing::info!(items = document.len(), "converted");
    Ok(())
}

/// Parse one item object or an array of them
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_slice(bytes).context("Input is not valid JSON")?;

    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                RawRecord::from_value(item)
                    .with_context(|| format!("Record {} is not an item object", index))
            })
            .collect::<Result<Vec<_>>>()?,
        other => vec![RawRecord::from_value(other).context("Input is not an item object")?],
    };

    if records.is_empty() {
        bail!("No item records in input");
    }

    Ok(records)
}
