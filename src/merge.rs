//! Merge key resolution
//!
//! Splices YAML merge keys (`<<`) into their parent mappings so the rendered
//! document contains only concrete entries. Resolution walks the tree bottom-up
//! so a merge source that itself contains a `<<` entry is flattened before it
//! is spliced.
//!
//! Ordering follows YAML 1.1 merge semantics as implemented by the common
//! loaders: keys contributed by a `<<` entry appear at the position of that
//! entry, explicit keys in the same mapping win over merged keys, and when a
//! merge value is a sequence of mappings the earlier mappings win.
//!
//! ```text
//! base: &base {a: 1, b: 2}
//! derived:
//!   <<: *base
//!   c: 3
//! ```
//!
//! resolves to `derived: {a: 1, b: 2, c: 3}`.

use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

use crate::error::{DeanchorError, Result};

/// The YAML 1.1 merge key
const MERGE_KEY: &str = "<<";

/// Resolve every merge key in the tree
///
/// `source` names the document in error diagnostics.
pub fn resolve(value: Value, source: &str) -> Result<Value> {
    match value {
        Value::Mapping(mapping) => resolve_mapping(mapping, source).map(Value::Mapping),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| resolve(item, source))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            let value = resolve(value, source)?;
            Ok(Value::Tagged(Box::new(TaggedValue { tag, value })))
        }
        scalar => Ok(scalar),
    }
}

/// Check whether the tree contains any unresolved merge keys
pub fn contains_merge_keys(value: &Value) -> bool {
    match value {
        Value::Mapping(mapping) => mapping
            .iter()
            .any(|(key, value)| is_merge_key(key) || contains_merge_keys(value)),
        Value::Sequence(items) => items.iter().any(contains_merge_keys),
        Value::Tagged(tagged) => contains_merge_keys(&tagged.value),
        _ => false,
    }
}

fn resolve_mapping(mapping: Mapping, source: &str) -> Result<Mapping> {
    let mut resolved = Mapping::new();

    for (key, value) in mapping {
        let value = resolve(value, source)?;
        if is_merge_key(&key) {
            splice(&mut resolved, value, source)?;
        } else {
            // Replacing an already-merged key keeps its position, so an
            // explicit entry after `<<` overrides without reordering.
            resolved.insert(key, value);
        }
    }

    Ok(resolved)
}

/// Splice a merge value into the target mapping
///
/// Keys already present in the target win: they were either explicit entries
/// earlier in the mapping or came from an earlier merge source.
fn splice(target: &mut Mapping, merge_value: Value, source: &str) -> Result<()> {
    match merge_value {
        Value::Mapping(entries) => {
            splice_entries(target, entries);
            Ok(())
        }
        Value::Sequence(items) => {
            for item in items {
                match item {
                    Value::Mapping(entries) => splice_entries(target, entries),
                    other => {
                        return Err(DeanchorError::InvalidMergeValue {
                            path: source.to_string(),
                            found: value_kind(&other).to_string(),
                        });
                    }
                }
            }
            Ok(())
        }
        other => Err(DeanchorError::InvalidMergeValue {
            path: source.to_string(),
            found: value_kind(&other).to_string(),
        }),
    }
}

fn splice_entries(target: &mut Mapping, entries: Mapping) {
    for (key, value) in entries {
        if !target.contains_key(&key) {
            target.insert(key, value);
        }
    }
}

fn is_merge_key(key: &Value) -> bool {
    matches!(key, Value::String(s) if s == MERGE_KEY)
}

/// Human-readable value kind for error messages
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
