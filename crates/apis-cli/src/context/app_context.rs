use std::path::PathBuf;

use anyhow::Context;
use apis_config::ApisConfig;
use apis_db::service::ApisService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ApisService,
    pub config: ApisConfig,
    /// Owner of the tasks this invocation reads and writes.
    pub user_id: String,
}

impl AppContext {
    /// Open the project database and resolve the acting user.
    pub async fn init(project_root: PathBuf, config: ApisConfig) -> anyhow::Result<Self> {
        let db_path = config.database.resolve(&project_root);
        let db_path_str = db_path.to_string_lossy();

        let service = ApisService::new_local(&db_path_str)
            .await
            .with_context(|| format!("failed to open database at {}", db_path.display()))?
            .with_dedup_policy(config.advisor.dedup);

        let user_id = if let Some(id) = config.general.user_id() {
            service
                .get_user(id)
                .await
                .with_context(|| format!("configured general.user_id '{id}' does not exist"))?
                .id
        } else {
            service
                .ensure_user(&config.general.user_email, None)
                .await
                .context("failed to resolve the acting user")?
                .id
        };

        tracing::debug!(
            root = %project_root.display(),
            db = %db_path.display(),
            %user_id,
            "application context ready"
        );

        Ok(Self {
            service,
            config,
            user_id,
        })
    }
}
