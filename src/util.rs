use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolve `path` against the current directory without touching the filesystem.
///
/// Unlike `canonicalize`, this works for paths that do not exist yet.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("resolve current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::absolute_path;
    use std::path::Path;

    #[test]
    fn absolute_paths_pass_through() {
        let path = Path::new("/srv/app/package.json");
        assert_eq!(absolute_path(path).expect("resolve"), path);
    }

    #[test]
    fn relative_paths_join_current_dir() {
        let resolved = absolute_path(Path::new("package.json")).expect("resolve");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("package.json"));
    }
}
