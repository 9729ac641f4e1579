//! Ordering of dbt model YAML documents.
//!
//! A model file is a mapping of plain configuration keys plus two reserved
//! collections:
//!
//! ```yaml
//! version: 2
//! sources:
//!   - name: shop
//!     tables:
//!       - name: orders
//!       - name: customers
//! models:
//!   - name: stg_orders
//! ```
//!
//! Plain keys are emitted first in alphabetical order, then `sources` (sorted
//! by `name`, each source's `tables` sorted by `name` too and moved to the end
//! of its source), then `models` (sorted by `name`).

use std::cmp::Ordering;

use serde_yaml::{Mapping, Number, Value};
use tracing::debug;

use crate::detect::SortOutcome;
use crate::error::{Error, Result, kind_of};

/// Names of the reserved collections and the field they are ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayout {
    /// Emitted right after the plain keys. Its entries may carry a nested collection.
    pub primary: String,
    /// Key of the nested collection inside `primary` entries.
    pub nested: String,
    /// Emitted last.
    pub secondary: String,
    /// Field every collection entry is ordered by.
    pub sort_key: String,
}

impl Default for ConfigLayout {
    fn default() -> Self {
        Self {
            primary: "sources".to_string(),
            nested: "tables".to_string(),
            secondary: "models".to_string(),
            sort_key: "name".to_string(),
        }
    }
}

/// Reorders a model document.
///
/// Entries sharing a name keep their relative order. Reserved keys that are
/// absent stay absent.
///
/// # Errors
/// Fails on the first collection entry without a sort field, on sort fields
/// that are not scalars or whose kinds differ within one collection, on a
/// reserved key that does not hold a sequence, and on non-string top-level keys.
pub fn sort_config(mut document: Mapping, layout: &ConfigLayout) -> Result<Mapping> {
    let primary = document.remove(layout.primary.as_str());
    let secondary = document.remove(layout.secondary.as_str());

    let mut plain = Vec::with_capacity(document.len());
    for (key, value) in document {
        match key {
            Value::String(key) => plain.push((key, value)),
            other => return Err(Error::NonStringKey { found: kind_of(&other) }),
        }
    }
    plain.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut sorted: Mapping = plain
        .into_iter()
        .map(|(key, value)| (Value::String(key), value))
        .collect();

    if let Some(value) = primary {
        let mut entries = into_entries(value, &layout.primary)?;
        sort_nested(&mut entries, layout)?;
        let entries = sort_by_name(entries, &layout.primary, &layout.sort_key)?;
        sorted.insert(Value::String(layout.primary.clone()), Value::Sequence(entries));
    }

    if let Some(value) = secondary {
        let entries = into_entries(value, &layout.secondary)?;
        let entries = sort_by_name(entries, &layout.secondary, &layout.sort_key)?;
        sorted.insert(Value::String(layout.secondary.clone()), Value::Sequence(entries));
    }

    Ok(sorted)
}

/// Sorts a model document given as YAML text.
///
/// Whether a rewrite is needed is decided by comparing the serialized form of
/// the parsed input against that of the sorted document, so formatting-only
/// differences in the file never trigger a write. When the order does change,
/// `content` is the YAML dump of the sorted document.
///
/// Empty documents are returned unchanged.
///
/// # Example
/// ```
/// use docsort_core::{ConfigLayout, sort_config_text};
///
/// let text = "models:\n- name: z\n- name: a\nowner: x\n";
/// let outcome = sort_config_text(text, &ConfigLayout::default()).unwrap();
/// assert!(outcome.changed);
/// assert!(outcome.content.starts_with("owner: x\n"));
/// ```
pub fn sort_config_text(text: &str, layout: &ConfigLayout) -> Result<SortOutcome> {
    if text.trim().is_empty() {
        return Ok(SortOutcome::unchanged(text));
    }

    let document = match serde_yaml::from_str::<Value>(text)? {
        Value::Null => return Ok(SortOutcome::unchanged(text)),
        Value::Mapping(mapping) => mapping,
        other => return Err(Error::NotAMapping { found: kind_of(&other) }),
    };

    let before = serde_yaml::to_string(&document)?;
    let sorted = sort_config(document, layout)?;
    let after = serde_yaml::to_string(&sorted)?;

    if before == after {
        debug!("YAML document already sorted");
        Ok(SortOutcome::unchanged(text))
    } else {
        Ok(SortOutcome {
            content: after,
            changed: true,
        })
    }
}

fn into_entries(value: Value, collection: &str) -> Result<Vec<Value>> {
    match value {
        Value::Sequence(entries) => Ok(entries),
        other => Err(Error::NotASequence {
            collection: collection.to_string(),
            found: kind_of(&other),
        }),
    }
}

/// Scalar a collection entry is ordered by.
#[derive(Debug)]
enum SortKey {
    Number(Number),
    Text(String),
}

impl SortKey {
    fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::Text(_) => "a string",
        }
    }

    /// Keys of different kinds are rejected before sorting, so they compare equal here.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => compare_numbers(a, b),
            _ => Ordering::Equal,
        }
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a.cmp(&b);
    }
    let a = a.as_f64().unwrap_or(f64::NAN);
    let b = b.as_f64().unwrap_or(f64::NAN);
    a.total_cmp(&b)
}

fn entry_key(entry: &Value, collection: &str, index: usize, sort_key: &str) -> Result<SortKey> {
    let mapping = entry.as_mapping().ok_or_else(|| Error::NotAnEntry {
        collection: collection.to_string(),
        index,
    })?;

    match mapping.get(sort_key) {
        Some(Value::String(name)) => Ok(SortKey::Text(name.clone())),
        Some(Value::Number(number)) => Ok(SortKey::Number(number.clone())),
        Some(Value::Bool(flag)) => Ok(SortKey::Number(Number::from(u64::from(*flag)))),
        Some(other) => Err(Error::UnorderableSortKey {
            collection: collection.to_string(),
            index,
            field: sort_key.to_string(),
            found: kind_of(other),
        }),
        None => Err(Error::MissingSortKey {
            collection: collection.to_string(),
            index,
            field: sort_key.to_string(),
        }),
    }
}

/// Stable sort of collection entries by their sort field.
///
/// All entries of one collection must carry the same kind of key: strings
/// compare as strings, numbers (booleans count as 0 and 1) as numbers.
fn sort_by_name(entries: Vec<Value>, collection: &str, sort_key: &str) -> Result<Vec<Value>> {
    let mut keyed: Vec<(SortKey, Value)> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let key = entry_key(&entry, collection, index, sort_key)?;
        if let Some((first, _)) = keyed.first() {
            if first.kind() != key.kind() {
                return Err(Error::MixedSortKeys {
                    collection: collection.to_string(),
                    index,
                    field: sort_key.to_string(),
                    expected: first.kind(),
                    found: key.kind(),
                });
            }
        }
        keyed.push((key, entry));
    }
    keyed.sort_by(|(a, _), (b, _)| a.compare(b));
    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

/// Sorts the nested collection of every primary entry that has one.
fn sort_nested(entries: &mut [Value], layout: &ConfigLayout) -> Result<()> {
    for (index, entry) in entries.iter_mut().enumerate() {
        let mapping = entry.as_mapping_mut().ok_or_else(|| Error::NotAnEntry {
            collection: layout.primary.clone(),
            index,
        })?;

        // Re-inserted, so the nested collection ends up as the entry's last key.
        if let Some(value) = mapping.shift_remove(layout.nested.as_str()) {
            let collection = format!("{}[{}].{}", layout.primary, index, layout.nested);
            let children = into_entries(value, &collection)?;
            let children = sort_by_name(children, &collection, &layout.sort_key)?;
            mapping.insert(Value::String(layout.nested.clone()), Value::Sequence(children));
        }
    }

    Ok(())
}
