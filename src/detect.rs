//! Next.js project detection.
use regex::Regex;
use serde_json::{Map, Value};

pub const DEPENDENCY_SECTIONS: [&str; 4] = [
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
];

/// Whether `manifest` looks like a project built with the `marker` CLI.
///
/// A dependency section naming the marker wins; otherwise any string script
/// that invokes the marker as a standalone word counts.
pub fn detect_framework(manifest: &Map<String, Value>, marker: &str) -> bool {
    let declared = DEPENDENCY_SECTIONS.iter().any(|section| {
        manifest
            .get(*section)
            .and_then(Value::as_object)
            .is_some_and(|deps| deps.contains_key(marker))
    });
    if declared {
        tracing::debug!(marker, "framework declared as dependency");
        return true;
    }

    let Some(scripts) = manifest.get("scripts").and_then(Value::as_object) else {
        return false;
    };
    let invocation = Regex::new(&format!(r"(?:^|\s){}(?:\s|$)", regex::escape(marker)))
        .expect("regex for framework invocation");
    let invoked = scripts
        .values()
        .filter_map(Value::as_str)
        .any(|command| invocation.is_match(command));
    if invoked {
        tracing::debug!(marker, "framework invoked from scripts");
    }
    invoked
}
