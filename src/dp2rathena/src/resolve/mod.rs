//! Derived-value resolvers
//!
//! One function per derived rAthena field. Every resolver sees the whole
//! record because several depend on combinations of catalog fields, and
//! returns `Ok(None)` when the field should be left out of the output.
//!
//! Where the catalog cannot tell which rAthena value is right, resolvers
//! emit a review marker instead of guessing: a slash-joined list of
//! candidates or a `TODO:` placeholder.

pub mod category;
pub mod jobs;
pub mod trade;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;

use crate::error::Result;
use crate::record::RawRecord;
use crate::schema::Resolved;

/// Trailing slot count, e.g. `"Ring [1]"`
static SLOT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\[[1-9]\]$").expect("slot suffix pattern"));

/// Display name without the slot-count suffix
///
/// rAthena stores slots in their own field.
pub fn name(record: &RawRecord) -> Result<Resolved> {
    Ok(record
        .str("name")?
        .map(|name| Value::from(strip_slot_suffix(name))))
}

pub fn strip_slot_suffix(name: &str) -> &str {
    match SLOT_SUFFIX.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}

/// Weight in rAthena units (1 catalog weight = 10 rAthena weight)
pub fn weight(record: &RawRecord) -> Result<Resolved> {
    Ok(record.number("weight")?.map(|w| Value::from(scale_weight(w))))
}

/// Scale a catalog weight, clamping corrupt negative values to 0
pub fn scale_weight(weight: f64) -> i64 {
    if weight < 0.0 {
        return 0;
    }
    (weight * 10.0).trunc() as i64
}

/// Always omitted: rAthena derives the sell price from `Buy`
pub fn sell(_record: &RawRecord) -> Result<Resolved> {
    Ok(None)
}

/// Equip locations need a human: the catalog's `locationId` encoding is not
/// mapped yet
pub fn locations(record: &RawRecord) -> Result<Resolved> {
    Ok(record.int("locationId")?.map(|location| {
        tracing::warn!(location, "locationId left for review");
        Value::from(todo_marker(location))
    }))
}

/// Placeholder for a value with no reliable mapping
pub fn todo_marker(value: impl std::fmt::Display) -> String {
    format!("TODO: {}", value)
}
