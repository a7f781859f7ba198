//! Error types for manifest patching.
//!
//! Errors split by how the CLI reports them:
//! - missing target file (exit code 2)
//! - everything else: unreadable, malformed, or wrongly shaped manifests (exit code 1)
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    /// The manifest path does not exist; checked before any read.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The manifest is not valid JSON.
    #[error("parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field exists but has the wrong JSON shape.
    #[error("expected \"{field}\" to be {expected}, got {actual}")]
    Schema {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    pub fn schema(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        PatchError::Schema {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Returns the process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            PatchError::FileNotFound { .. } => 2,
            PatchError::Parse { .. } | PatchError::Schema { .. } | PatchError::Io { .. } => 1,
        }
    }
}

pub type PatchResult<T> = Result<T, PatchError>;
