//! Loading, shape checks, and rendering for `package.json` documents.
//!
//! The manifest stays a loosely typed `serde_json::Value` tree. Every access
//! point checks the shape it needs and reports a `Schema` error before any
//! mutation happens, so a bad document never reaches the write step.
use crate::error::{PatchError, PatchResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"  ";

/// JSON type name used in schema errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn read_manifest(path: &Path) -> PatchResult<Value> {
    let text = fs::read_to_string(path).map_err(|source| PatchError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| PatchError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a manifest with 2-space indentation and a trailing newline.
///
/// Non-ASCII text is written as-is; key order follows the in-memory map.
pub fn render_manifest(manifest: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    manifest
        .serialize(&mut ser)
        .expect("serialize manifest JSON");
    let mut text = String::from_utf8(buf).expect("serde_json emits UTF-8");
    text.push('\n');
    text
}

pub fn write_manifest(path: &Path, manifest: &Value) -> PatchResult<usize> {
    let text = render_manifest(manifest);
    fs::write(path, text.as_bytes()).map_err(|source| PatchError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.len())
}

/// Borrow the document root as an object.
pub fn root_object(manifest: &mut Value) -> PatchResult<&mut Map<String, Value>> {
    let actual = json_type_name(manifest);
    match manifest {
        Value::Object(map) => Ok(map),
        _ => Err(PatchError::schema("<root>", "an object", actual)),
    }
}

/// Borrow `parent[key]` as an object, inserting `{}` when it is missing or null.
///
/// Returns whether the entry was created.
pub fn ensure_object<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
    field: &str,
) -> PatchResult<(&'a mut Map<String, Value>, bool)> {
    let slot = parent.entry(key).or_insert(Value::Null);
    let created = slot.is_null();
    if created {
        *slot = Value::Object(Map::new());
    }
    let actual = json_type_name(slot);
    match slot {
        Value::Object(map) => Ok((map, created)),
        _ => Err(PatchError::schema(field, "an object", actual)),
    }
}

/// Borrow `parent[key]` as an array, inserting `[]` when it is missing or null.
///
/// Returns whether the entry was created.
pub fn ensure_array<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
    field: &str,
) -> PatchResult<(&'a mut Vec<Value>, bool)> {
    let slot = parent.entry(key).or_insert(Value::Null);
    let created = slot.is_null();
    if created {
        *slot = Value::Array(Vec::new());
    }
    let actual = json_type_name(slot);
    match slot {
        Value::Array(items) => Ok((items, created)),
        _ => Err(PatchError::schema(field, "an array", actual)),
    }
}

/// Borrow `parent[key]` as an object when present; `None` when missing or null.
pub fn optional_object<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
    field: &str,
) -> PatchResult<Option<&'a mut Map<String, Value>>> {
    match parent.get_mut(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(PatchError::schema(field, "an object", json_type_name(other))),
    }
}
