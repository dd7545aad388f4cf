//! # dp2rathena
//!
//! Divine Pride to rAthena item database converter.
//!
//! This library provides functionality to:
//! - Decode Divine Pride item records (type codes, job bitmasks, trade flags)
//! - Map them onto rAthena's `item_db` schema in canonical field order
//! - Wrap the result in an `item_db.yml` document and render it as YAML
//!
//! Values the catalog cannot pin down are written as review markers
//! (`Healing/Usable/DelayConsume/Cash`, `TODO: 2`) for a human to resolve
//! before the file is used.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read_to_string("501.json")?;
//! let record = dp2rathena::RawRecord::from_json(&json)?;
//!
//! let document = dp2rathena::convert(&record)?;
//! print!("{}", document.to_yaml()?);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod document;
pub mod error;
pub mod record;
pub mod reference;
pub mod resolve;
pub mod schema;

// Re-export commonly used items
#[doc(inline)]
pub use convert::{convert, convert_all, convert_item, to_item_yml};
#[doc(inline)]
pub use document::{Document, Header, DOCUMENT_TYPE, DOCUMENT_VERSION};
#[doc(inline)]
pub use error::{ConvertError, Result};
#[doc(inline)]
pub use record::RawRecord;
#[doc(inline)]
pub use reference::JobPermission;
#[doc(inline)]
pub use schema::{item_schema, Resolved, Schema, SchemaNode};
