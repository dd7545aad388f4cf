//! Record to document conversion

use once_cell::sync::Lazy;
use serde_yaml::Mapping;

use crate::document::Document;
use crate::error::Result;
use crate::record::RawRecord;
use crate::schema::{item_schema, Schema};

static ITEM_SCHEMA: Lazy<Schema> = Lazy::new(item_schema);

/// Map one catalog record to an rAthena item entry
pub fn convert_item(record: &RawRecord) -> Result<Mapping> {
    let span = tracing::debug_span!("convert_item", id = record.id());
    let _enter = span.enter();

    let item = ITEM_SCHEMA.apply(record)?;
    tracing::debug!(fields = item.len(), "converted item");
    Ok(item)
}

/// Convert one record into a single-item document
pub fn convert(record: &RawRecord) -> Result<Document> {
    Ok(Document::new(convert_item(record)?))
}

/// Convert several records into one document, failing on the first bad record
pub fn convert_all(records: &[RawRecord]) -> Result<Document> {
    let items = records
        .iter()
        .map(convert_item)
        .collect::<Result<Vec<_>>>()?;
    Ok(Document::from_items(items))
}

/// Convert one record straight to `item_db.yml` text
pub fn to_item_yml(record: &RawRecord) -> Result<String> {
    convert(record)?.to_yaml()
}
