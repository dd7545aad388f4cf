//! Declarative field mapping
//!
//! A [`Schema`] is an ordered list of target fields, each bound to a
//! [`SchemaNode`] saying where its value comes from. [`Schema::apply`] walks
//! the list against one record and builds an ordered YAML mapping:
//!
//! - `Alias` copies a catalog field, dropping the zero sentinel
//! - `Resolver` calls a derived-value function
//! - `Nested` recurses into another schema, optionally scoped to a nested
//!   object and gated by a predicate
//! - `Literal` copies a constant
//!
//! A node that resolves to `None` leaves no key behind, which is distinct
//! from a YAML `null`. Output keys keep the schema's declaration order.

use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::record::{is_zero_sentinel, RawRecord};
use crate::resolve::{self, category, jobs, trade};

/// Outcome of resolving one field: `None` omits the field
pub type Resolved = Option<Value>;

/// Derived-value function for one target field
pub type Resolver = Box<dyn Fn(&RawRecord) -> Result<Resolved> + Send + Sync>;

/// Predicate deciding whether a nested schema is emitted at all
pub type Guard = fn(&RawRecord) -> Result<bool>;

/// Where a target field's value comes from
pub enum SchemaNode {
    /// Copy the named catalog field
    Alias(&'static str),
    Resolver(Resolver),
    Nested {
        schema: Schema,
        /// Apply `schema` to this nested object instead of the record itself
        scope: Option<&'static str>,
        /// Omit the whole mapping when this returns false
        guard: Option<Guard>,
    },
    Literal(Value),
}

impl SchemaNode {
    /// Resolve this node against a record
    pub fn resolve(&self, record: &RawRecord) -> Result<Resolved> {
        match self {
            Self::Alias(source) => match record.get(source) {
                Some(value) if !is_zero_sentinel(value) => Ok(Some(serde_yaml::to_value(value)?)),
                _ => Ok(None),
            },
            Self::Resolver(resolver) => resolver(record),
            Self::Nested {
                schema,
                scope,
                guard,
            } => {
                let scoped;
                let target = match scope {
                    Some(field) => match record.sub_record(*field)? {
                        Some(sub) => {
                            scoped = sub;
                            &scoped
                        }
                        None => return Ok(None),
                    },
                    None => record,
                };

                if let Some(guard) = guard {
                    if !guard(target)? {
                        return Ok(None);
                    }
                }

                Ok(Some(Value::Mapping(schema.apply(target)?)))
            }
            Self::Literal(value) => Ok(Some(value.clone())),
        }
    }
}

impl std::fmt::Debug for SchemaNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alias(source) => f.debug_tuple("Alias").field(source).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
            Self::Nested { schema, scope, .. } => f
                .debug_struct("Nested")
                .field("schema", schema)
                .field("scope", scope)
                .finish_non_exhaustive(),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
        }
    }
}

/// Ordered list of target fields
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<(&'static str, SchemaNode)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field bound to an arbitrary node
    pub fn field(mut self, target: &'static str, node: SchemaNode) -> Self {
        self.fields.push((target, node));
        self
    }

    pub fn alias(self, target: &'static str, source: &'static str) -> Self {
        self.field(target, SchemaNode::Alias(source))
    }

    pub fn resolver<F>(self, target: &'static str, resolver: F) -> Self
    where
        F: Fn(&RawRecord) -> Result<Resolved> + Send + Sync + 'static,
    {
        self.field(target, SchemaNode::Resolver(Box::new(resolver)))
    }

    pub fn nested(self, target: &'static str, schema: Schema) -> Self {
        self.field(
            target,
            SchemaNode::Nested {
                schema,
                scope: None,
                guard: None,
            },
        )
    }

    pub fn literal(self, target: &'static str, value: impl Into<Value>) -> Self {
        self.field(target, SchemaNode::Literal(value.into()))
    }

    /// Target field names in declaration order
    pub fn targets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(target, _)| *target)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the output mapping for one record
    ///
    /// The first failing node aborts the whole mapping; no partial output
    /// escapes.
    pub fn apply(&self, record: &RawRecord) -> Result<Mapping> {
        let mut out = Mapping::new();
        for (target, node) in &self.fields {
            match node.resolve(record)? {
                Some(value) => {
                    tracing::debug!(field = *target, "resolved");
                    out.insert(Value::String((*target).to_string()), value);
                }
                None => tracing::trace!(field = *target, "omitted"),
            }
        }
        Ok(out)
    }
}

/// The rAthena `item_db` entry schema, in rAthena's canonical field order
pub fn item_schema() -> Schema {
    Schema::new()
        .alias("Id", "id")
        .alias("AegisName", "aegisName")
        .resolver("Name", resolve::name)
        .resolver("Type", category::item_type)
        .resolver("SubType", category::item_subtype)
        .alias("Buy", "price")
        .resolver("Sell", resolve::sell)
        .resolver("Weight", resolve::weight)
        .alias("Attack", "attack")
        .alias("MagicAttack", "matk")
        .alias("Defense", "defense")
        .alias("Range", "range")
        .alias("Slots", "slots")
        .resolver("Jobs", jobs::jobs)
        .resolver("Classes", jobs::classes)
        .resolver("Gender", jobs::gender)
        .resolver("Locations", resolve::locations)
        .resolver("WeaponLevel", category::weapon_level)
        .alias("EquipLevelMin", "requiredLevel")
        .alias("EquipLevelMax", "limitLevel")
        .alias("Refineable", "refinable")
        .field("Trade", trade::trade_node())
}
