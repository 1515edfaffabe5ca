use std::path::PathBuf;

use anyhow::Context;
use apis_core::responses::InitResponse;
use apis_db::service::ApisService;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::PROJECT_DIR;
use crate::output::output;

/// Handle `apis init`.
///
/// Creates `<root>/.apis`, opens (and migrates) the database, and ensures the
/// acting user exists. Running it again on an initialized project is a no-op
/// that reports `created: false`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match args.path.as_deref().or(flags.project.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let response = init_project(root, args.email.as_deref(), args.name.as_deref()).await?;
    output(&response, flags.format)
}

async fn init_project(
    root: PathBuf,
    email: Option<&str>,
    name: Option<&str>,
) -> anyhow::Result<InitResponse> {
    let state_dir = root.join(PROJECT_DIR);
    let created = !state_dir.is_dir();
    std::fs::create_dir_all(&state_dir)
        .with_context(|| format!("failed to create {}", state_dir.display()))?;

    let config = bootstrap::load_config(&root)?;
    let db_path = config.database.resolve(&root);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let service = ApisService::new_local(&db_path.to_string_lossy())
        .await
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    let email = email.unwrap_or(&config.general.user_email);
    let user = service
        .ensure_user(email, name)
        .await
        .with_context(|| format!("failed to create user {email}"))?;

    if created {
        tracing::info!(root = %root.display(), user_id = %user.id, "project initialized");
    } else {
        tracing::warn!(root = %root.display(), "project already initialized");
    }

    Ok(InitResponse {
        project_root: root.display().to_string(),
        database_path: db_path.display().to_string(),
        user_id: user.id,
        created,
    })
}
