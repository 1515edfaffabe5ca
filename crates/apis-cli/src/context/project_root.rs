use std::path::{Path, PathBuf};

use anyhow::Context;

/// Directory holding project state: `apis.db` and `config.toml`.
pub const PROJECT_DIR: &str = ".apis";

/// Walk upwards from `start` until a `.apis` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the project root from `--project` or the current directory.
///
/// `--project` may name the root itself or its `.apis` directory. Without it,
/// the nearest ancestor holding `.apis` wins.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == PROJECT_DIR)
        {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.apis' directory has no parent");
        }

        if explicit.join(PROJECT_DIR).is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': no .apis directory found. Run 'apis init' first.",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    find_project_root(&start)
        .context("not an apis project (no .apis directory found). Run 'apis init' first.")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::{PROJECT_DIR, find_project_root, resolve_project_root};

    #[test]
    fn finds_project_root_in_current_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(PROJECT_DIR)).expect(".apis should create");

        let found = find_project_root(temp.path());
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn finds_project_root_in_parent_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(PROJECT_DIR)).expect(".apis should create");
        std::fs::create_dir_all(temp.path().join("a/b/c")).expect("nested dirs should create");

        let found = find_project_root(&temp.path().join("a/b/c"));
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn returns_none_when_not_found() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir_all(temp.path().join("a/b/c")).expect("nested dirs should create");

        assert!(find_project_root(&temp.path().join("a/b/c")).is_none());
    }

    #[test]
    fn explicit_project_accepts_state_dir() {
        let temp = TempDir::new().expect("tempdir should create");
        let state = temp.path().join(PROJECT_DIR);
        std::fs::create_dir(&state).expect(".apis should create");

        let root = resolve_project_root(state.to_str()).expect("should resolve");
        assert_eq!(root, temp.path());
        let root = resolve_project_root(temp.path().to_str()).expect("should resolve");
        assert_eq!(root, temp.path());
    }

    #[test]
    fn explicit_project_without_state_dir_fails() {
        let temp = TempDir::new().expect("tempdir should create");
        let err = resolve_project_root(temp.path().to_str()).expect_err("should fail");
        assert!(err.to_string().contains("apis init"));
    }
}
