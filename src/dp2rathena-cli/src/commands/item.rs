//! Fetch-and-convert command

use anyhow::{Context, Result};
use dp2rathena::Document;
use std::path::Path;

use crate::api::{CatalogClient, ItemSource};
use crate::config::Config;
use crate::file_io::write_output;

/// Handle `item`
///
/// # Arguments
/// * `ids` - Divine Pride item ids, converted into one document in order
/// * `output` - Output file, stdout if None
/// * `api_key` - Key from the flag or environment; falls back to the config
pub fn handle(ids: &[u32], output: Option<&Path>, api_key: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key(api_key)?;
    let client = CatalogClient::new(config.base_url(), api_key);

    let document = fetch_and_convert(&client, ids)?;
    write_output(output, &document.to_yaml()?)
}

/// Fetch every id and convert, stopping at the first failure
pub fn fetch_and_convert(source: &impl ItemSource, ids: &[u32]) -> Result<Document> {
    let mut items = Vec::with_capacity(ids.len());
    for &id in ids {
        let record = source.fetch_item(id)?;
        let item = dp2rathena::convert_item(&record)
            .with_context(|| format!("Failed to convert item {}", id))?;
        items.push(item);
    }
    Ok(Document::from_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use dp2rathena::RawRecord;
    use serde_json::json;
    use serde_yaml::Value;
    use std::collections::HashMap;

    struct Fixtures(HashMap<u32, serde_json::Value>);

    impl ItemSource for Fixtures {
        fn fetch_item(&self, id: u32) -> Result<RawRecord> {
            let value = self
                .0
                .get(&id)
                .cloned()
                .ok_or_else(|| anyhow!("Divine Pride returned HTTP 404 for item {}", id))?;
            Ok(RawRecord::from_value(value)?)
        }
    }

    fn fixtures() -> Fixtures {
        Fixtures(HashMap::from([
            (
                501,
                json!({ "id": 501, "name": "Red Potion", "itemTypeId": 3, "itemSubTypeId": 769 }),
            ),
            (
                1201,
                json!({ "id": 1201, "name": "Knife [3]", "itemTypeId": 1, "itemSubTypeId": 256 }),
            ),
            (
                9999,
                json!({ "id": 9999, "name": "Bogus", "itemTypeId": 999, "itemSubTypeId": 0 }),
            ),
        ]))
    }

    #[test]
    fn test_items_share_one_document() -> Result<()> {
        let doc = fetch_and_convert(&fixtures(), &[1201, 501])?;
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.body[0]["Id"], Value::from(1201));
        assert_eq!(doc.body[1]["Id"], Value::from(501));
        Ok(())
    }

    #[test]
    fn test_fetch_failure_stops() {
        let err = fetch_and_convert(&fixtures(), &[501, 404]).unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_conversion_failure_names_the_item() {
        let err = fetch_and_convert(&fixtures(), &[9999]).unwrap_err();
        assert_eq!(err.to_string(), "Failed to convert item 9999");
        assert!(format!("{:#}", err).contains("Unrecognised itemTypeId: 999"));
    }
}
