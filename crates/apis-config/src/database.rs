//! Local database location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file path. Empty means `<project>/.apis/apis.db`. Relative
    /// paths resolve against the project root.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// Resolve the database file for a project rooted at `project_root`.
    #[must_use]
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        if self.path.is_empty() {
            return project_root.join(".apis").join("apis.db");
        }
        let path = PathBuf::from(&self.path);
        if path.is_absolute() {
            path
        } else {
            project_root.join(path)
        }
    }
}
