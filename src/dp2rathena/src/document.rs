//! rAthena `item_db` document envelope

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::Result;

/// Document kind rAthena expects in `Header.Type`
pub const DOCUMENT_TYPE: &str = "ITEM_DB";

/// `item_db` schema version this converter writes
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    #[serde(rename = "Type")]
    pub kind: String,
    pub version: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            kind: DOCUMENT_TYPE.to_string(),
            version: DOCUMENT_VERSION,
        }
    }
}

/// `{Header: {Type, Version}, Body: [item, ...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    pub header: Header,
    pub body: Vec<Mapping>,
}

impl Document {
    /// Wrap a single item
    pub fn new(item: Mapping) -> Self {
        Self::from_items(vec![item])
    }

    pub fn from_items(items: Vec<Mapping>) -> Self {
        Self {
            header: Header::default(),
            body: items,
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The document as an ordered YAML tree
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_yaml::to_value(self)?)
    }

    /// Render as YAML text, keeping field order
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> Mapping {
        let mut m = Mapping::new();
        m.insert("Id".into(), id.into());
        m.insert("AegisName".into(), "Knife".into());
        m
    }

    #[test]
    fn test_single_item_envelope() {
        let doc = Document::new(item(1201));
        let value = doc.to_value().unwrap();

        let top: Vec<_> = value
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(top, vec!["Header", "Body"]);

        assert_eq!(value["Header"]["Type"], Value::from("ITEM_DB"));
        assert_eq!(value["Header"]["Version"], Value::from(1));
        assert_eq!(value["Body"].as_sequence().map(Vec::len), Some(1));
        assert_eq!(value["Body"][0]["Id"], Value::from(1201));
    }

    #[test]
    fn test_multi_item_document() {
        let doc = Document::from_items(vec![item(1201), item(1202)]);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.header, Header::default());
    }

    #[test]
    fn test_yaml_keeps_item_field_order() {
        let yaml = Document::new(item(1201)).to_yaml().unwrap();
        let id = yaml.find("Id:").unwrap();
        let aegis = yaml.find("AegisName:").unwrap();
        assert!(yaml.starts_with("Header:"));
        assert!(id < aegis);
    }

    #[test]
    fn test_yaml_round_trips_through_serde() {
        let doc = Document::new(item(1201));
        let parsed: Document = serde_yaml::from_str(&doc.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }
}
