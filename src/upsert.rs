//! Field-level upsert rules.
//!
//! Each helper mutates the exact subtree it is handed and reports whether the
//! document changed. Conflicts are never errors; they become warnings.
use serde_json::{Map, Value};

/// What to do when a field already holds a different value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnConflict {
    /// Keep the existing value and record a skip warning.
    Skip,
    /// Replace the existing value and record an overwrite warning.
    Overwrite,
}

impl OnConflict {
    pub fn from_force(force: bool) -> Self {
        if force {
            OnConflict::Overwrite
        } else {
            OnConflict::Skip
        }
    }
}

/// Set `map[key]` to the string `value`.
///
/// Missing and null entries are set silently. `parent` is the dotted path of
/// `map`, used to name the field in warnings.
pub fn upsert_scalar(
    map: &mut Map<String, Value>,
    parent: &str,
    key: &str,
    value: &str,
    on_conflict: OnConflict,
    warnings: &mut Vec<String>,
) -> bool {
    let field = format!("{parent}.{key}");
    let existing = match map.get(key) {
        None | Some(Value::Null) => {
            map.insert(key.to_string(), Value::from(value));
            tracing::debug!(field = field.as_str(), value, "set");
            return true;
        }
        Some(existing) => existing,
    };
    if existing.as_str() == Some(value) {
        return false;
    }
    let desired = Value::from(value);
    match on_conflict {
        OnConflict::Skip => {
            warnings.push(format!(
                "Skipped {field} (already set to {existing}); rerun with --force to set {desired}"
            ));
            tracing::debug!(field = field.as_str(), %existing, "kept conflicting value");
            false
        }
        OnConflict::Overwrite => {
            warnings.push(format!("Overwrote {field}: {existing} -> {desired}"));
            tracing::debug!(field = field.as_str(), %existing, value, "overwrote");
            map.insert(key.to_string(), desired);
            true
        }
    }
}

/// Append `item` to `items` unless an equal string is already present.
pub fn upsert_unique(items: &mut Vec<Value>, item: &str) -> bool {
    if items.iter().any(|existing| existing.as_str() == Some(item)) {
        return false;
    }
    items.push(Value::from(item));
    true
}
