use std::path::Path;

use anyhow::Context;
use apis_config::ApisConfig;

/// Load `.env` from the project root, then the layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<ApisConfig> {
    load_project_dotenv(project_root)?;
    ApisConfig::load_for_project(project_root).context("failed to load apis configuration")
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if !env_path.exists() {
        return Ok(());
    }

    dotenvy::from_path(&env_path)
        .with_context(|| format!("failed to load {}", env_path.display()))?;
    tracing::debug!(path = %env_path.display(), "loaded project .env");
    Ok(())
}
