//! Free-form `[meta]` mapping consumed by the head rule engine.
//!
//! Unlike the typed `[build]` section, `[meta]` carries whatever keys the
//! operator wrote, in file order. Absence of a key means the derived head
//! elements are omitted; no schema is enforced and no value is validated.

use serde::{Deserialize, Serialize};
use toml::{Table, Value};

/// Order-preserving view over the `[meta]` table.
///
/// All accessors are read-only; the rule engine never mutates the mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta(Table);

impl Meta {
    pub fn new(table: Table) -> Self {
        Self(table)
    }

    /// Whether the key is present at all (any value kind).
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Scalar value rendered verbatim: strings unquoted, numbers, booleans
    /// and datetimes via their display form. Tables and arrays yield `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        scalar(self.0.get(key)?)
    }

    /// First present key among `keys`, rendered as a scalar.
    ///
    /// Implements the fallback-chain composition rule (e.g. `preview`
    /// falling back to `icon`).
    pub fn first_of(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get_str(key))
    }

    /// Scalar entries in file order, for template variable contexts.
    pub fn scalar_entries(&self) -> impl Iterator<Item = (&str, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| Some((key.as_str(), scalar(value)?)))
    }

    /// Sub-mapping value (e.g. `viewport`), in insertion order.
    pub fn get_table(&self, key: &str) -> Option<&Table> {
        match self.0.get(key)? {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Render a scalar TOML value verbatim; tables and arrays yield `None`.
pub fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(n) => Some(n.to_string()),
        Value::Float(n) => Some(n.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(d) => Some(d.to_string()),
        Value::Table(_) | Value::Array(_) => None,
    }
}
