//! The manifest patcher.
//!
//! `patch_document` applies the build rules to an in-memory manifest;
//! `patch_file` wraps it with the read and the conditional write. Every shape
//! check runs before the write, so a failing patch never touches the file.
use crate::detect::detect_framework;
use crate::error::{PatchError, PatchResult};
use crate::manifest::{
    ensure_array, ensure_object, optional_object, read_manifest, root_object, write_manifest,
};
use crate::upsert::{upsert_scalar, upsert_unique, OnConflict};
use serde_json::Value;
use std::path::Path;

/// Values installed into the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    /// Dependency name and CLI word that mark a Next.js project.
    pub framework_marker: String,
    pub prebuild: String,
    pub prebuild_framework: String,
    pub postbuild: String,
    pub pkg_script: String,
    pub pkg_asset: String,
    pub pkg_target: String,
    pub pkg_output_path: String,
}

impl Default for Recommendations {
    fn default() -> Self {
        Recommendations {
            framework_marker: "next".to_string(),
            prebuild: "rimraf dist".to_string(),
            prebuild_framework: "rimraf dist .next".to_string(),
            postbuild: "tsc-alias".to_string(),
            pkg_script: "dist/app/**/*.js".to_string(),
            pkg_asset: "node_modules/axios/**/*".to_string(),
            pkg_target: "node24-linux-x64".to_string(),
            pkg_output_path: "./dist-pkg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Overwrite existing values that differ from the recommendations.
    pub force: bool,
    /// `Some` skips detection and uses the given answer.
    pub framework: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchOutcome {
    pub changed: bool,
    pub warnings: Vec<String>,
}

/// Apply the build rules to `manifest` in place.
pub fn patch_document(
    manifest: &mut Value,
    options: PatchOptions,
    recommendations: &Recommendations,
) -> PatchResult<PatchOutcome> {
    let root = root_object(manifest)?;
    let mut outcome = PatchOutcome::default();
    let on_conflict = OnConflict::from_force(options.force);

    // `scripts` must be an object before detection reads it.
    let (_, created) = ensure_object(root, "scripts", "scripts")?;
    outcome.changed |= created;

    let is_framework = match options.framework {
        Some(value) => value,
        None => detect_framework(root, &recommendations.framework_marker),
    };
    tracing::debug!(is_framework, overridden = options.framework.is_some(), "framework");
    let prebuild = if is_framework {
        &recommendations.prebuild_framework
    } else {
        &recommendations.prebuild
    };

    let (scripts, _) = ensure_object(root, "scripts", "scripts")?;
    outcome.changed |= upsert_scalar(
        scripts,
        "scripts",
        "prebuild",
        prebuild,
        on_conflict,
        &mut outcome.warnings,
    );
    outcome.changed |= upsert_scalar(
        scripts,
        "scripts",
        "postbuild",
        &recommendations.postbuild,
        on_conflict,
        &mut outcome.warnings,
    );

    if let Some(pkg) = optional_object(root, "pkg", "pkg")? {
        let lists = [
            ("scripts", &recommendations.pkg_script),
            ("assets", &recommendations.pkg_asset),
            ("targets", &recommendations.pkg_target),
        ];
        for (key, item) in lists {
            let (items, created) = ensure_array(pkg, key, &format!("pkg.{key}"))?;
            outcome.changed |= created;
            outcome.changed |= upsert_unique(items, item);
        }
        // The output path is owned by this tool and ignores --force.
        outcome.changed |= upsert_scalar(
            pkg,
            "pkg",
            "outputPath",
            &recommendations.pkg_output_path,
            OnConflict::Overwrite,
            &mut outcome.warnings,
        );
    }

    Ok(outcome)
}

/// Patch the manifest at `path`, rewriting it only when something changed.
pub fn patch_file(
    path: &Path,
    options: PatchOptions,
    recommendations: &Recommendations,
) -> PatchResult<PatchOutcome> {
    if !path.exists() {
        return Err(PatchError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut manifest = read_manifest(path)?;
    let outcome = patch_document(&mut manifest, options, recommendations)?;
    if outcome.changed {
        let bytes = write_manifest(path, &manifest)?;
        tracing::info!(
            path = %path.display(),
            bytes,
            warnings = outcome.warnings.len(),
            "manifest updated"
        );
    } else {
        tracing::info!(path = %path.display(), "manifest unchanged");
    }
    Ok(outcome)
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
