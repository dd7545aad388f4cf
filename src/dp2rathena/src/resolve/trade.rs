//! Trade restriction resolution
//!
//! The catalog's `itemMoveInfo` says what a player MAY do with an item
//! (`drop: true`); rAthena's `Trade` says what they may NOT (`NoDrop: true`).
//! A flag explicitly set to `false` is a restriction. A flag set to `true`
//! or missing altogether is not.

use serde_yaml::Value;

use crate::error::Result;
use crate::record::RawRecord;
use crate::schema::{Schema, SchemaNode};

/// Group level rAthena writes for `Trade.Override` by default
pub const TRADE_OVERRIDE: i64 = 100;

/// One catalog permission and the rAthena restriction it inverts into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeFlag {
    pub source: &'static str,
    pub target: &'static str,
}

impl TradeFlag {
    const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }

    /// True when `itemMoveInfo` explicitly forbids this action
    pub fn is_restricted(&self, moves: &RawRecord) -> Result<bool> {
        Ok(moves.flag(self.source)? == Some(false))
    }
}

/// Trade flags in rAthena field order
pub const TRADE_FLAGS: &[TradeFlag] = &[
    TradeFlag::new("drop", "NoDrop"),
    TradeFlag::new("trade", "NoTrade"),
    TradeFlag::new("sell", "NoSell"),
    TradeFlag::new("cart", "NoCart"),
    TradeFlag::new("store", "NoStorage"),
    TradeFlag::new("guildStore", "NoGuildStorage"),
    TradeFlag::new("mail", "NoMail"),
    TradeFlag::new("auction", "NoAuction"),
];

/// Guard: emit `Trade` only when at least one action is restricted
pub fn has_restrictions(moves: &RawRecord) -> Result<bool> {
    for flag in TRADE_FLAGS {
        if flag.is_restricted(moves)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `Trade` sub-schema, applied to `itemMoveInfo`
pub fn trade_schema() -> Schema {
    TRADE_FLAGS.iter().fold(
        Schema::new().literal("Override", TRADE_OVERRIDE),
        |schema, &flag| {
            schema.resolver(flag.target, move |moves: &RawRecord| {
                Ok(flag
                    .is_restricted(moves)?
                    .then_some(Value::Bool(true)))
            })
        },
    )
}

/// `Trade` node: the trade sub-schema applied to `itemMoveInfo`, emitted
/// only when something is restricted
pub fn trade_node() -> SchemaNode {
    SchemaNode::Nested {
        schema: trade_schema(),
        scope: Some("itemMoveInfo"),
        guard: Some(has_restrictions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_yaml::Mapping;

    fn trade(moves: serde_json::Value) -> Option<Value> {
        let record = RawRecord::from_value(json!({ "itemMoveInfo": moves })).unwrap();
        trade_node().resolve(&record).unwrap()
    }

    #[test]
    fn test_single_restriction() {
        let mut expected = Mapping::new();
        expected.insert("Override".into(), 100.into());
        expected.insert("NoDrop".into(), true.into());

        assert_eq!(trade(json!({ "drop": false })), Some(Value::Mapping(expected)));
    }

    #[test]
    fn test_no_flags_is_absent() {
        assert_eq!(trade(json!({})), None);
        assert_eq!(trade_node().resolve(&RawRecord::default()).unwrap(), None);
    }

    #[test]
    fn test_permitted_actions_are_not_restrictions() {
        let all_allowed = json!({
            "drop": true, "trade": true, "sell": true, "cart": true,
            "store": true, "guildStore": true, "mail": true, "auction": true
        });
        assert_eq!(trade(all_allowed), None);
    }

    #[test]
    fn test_restrictions_keep_field_order() {
        let out = trade(json!({ "auction": false, "drop": true, "store": 0, "trade": false }))
            .unwrap();
        let keys: Vec<_> = out
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["Override", "NoTrade", "NoStorage", "NoAuction"]);
    }

    #[test]
    fn test_malformed_flag_is_an_error() {
        let record =
            RawRecord::from_value(json!({ "itemMoveInfo": { "drop": "never" } })).unwrap();
        assert!(trade_node().resolve(&record).is_err());
    }

    #[test]
    fn test_schema_targets() {
        let targets: Vec<_> = trade_schema().targets().collect();
        assert_eq!(targets.len(), TRADE_FLAGS.len() + 1);
        assert_eq!(targets[0], "Override");
        assert_eq!(targets[6], "NoGuildStorage");
    }
}
