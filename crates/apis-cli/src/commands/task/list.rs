use apis_core::entities::Task;
use apis_core::enums::TaskStatus;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Which slice of tasks `apis task list` shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    All,
    Status(TaskStatus),
    Hive(String),
    Apiary(String),
    Open,
    Overdue,
    Upcoming(u32),
}

impl View {
    /// Clap rejects conflicting flags, so at most one view applies here.
    pub fn from_flags(
        status: Option<&str>,
        hive: Option<&str>,
        apiary: Option<&str>,
        open: bool,
        overdue: bool,
        upcoming: Option<u32>,
    ) -> anyhow::Result<Self> {
        if let Some(status) = status {
            return Ok(Self::Status(parse_enum(status, "status")?));
        }
        if let Some(hive) = hive {
            return Ok(Self::Hive(hive.to_string()));
        }
        if let Some(apiary) = apiary {
            return Ok(Self::Apiary(apiary.to_string()));
        }
        if open {
            return Ok(Self::Open);
        }
        if overdue {
            return Ok(Self::Overdue);
        }
        Ok(upcoming.map_or(Self::All, Self::Upcoming))
    }
}

pub async fn run(
    view: View,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let user = ctx.user_id.as_str();
    let now = Utc::now();

    let mut tasks: Vec<Task> = match view {
        View::All => ctx.service.list_tasks_for_user(user, limit).await?,
        View::Status(status) => ctx.service.list_tasks_by_status(user, status).await?,
        View::Hive(hive_id) => ctx.service.list_tasks_for_hive(&hive_id).await?,
        View::Apiary(apiary_id) => ctx.service.list_tasks_for_apiary(&apiary_id).await?,
        View::Open => ctx.service.list_open_tasks(user).await?,
        View::Overdue => ctx.service.list_overdue_tasks(user, now).await?,
        View::Upcoming(days) => ctx.service.list_upcoming_tasks(user, days, now).await?,
    };

    // Hive and apiary views span owners; keep only the acting user's tasks.
    tasks.retain(|task| task.user_id == user);
    tasks.truncate(usize::try_from(limit)?);

    output(&tasks, flags.format)
}

#[cfg(test)]
mod tests {
    use apis_core::enums::TaskStatus;

    use super::View;

    #[test]
    fn no_flags_lists_everything() {
        let view = View::from_flags(None, None, None, false, false, None).unwrap();
        assert_eq!(view, View::All);
    }

    #[test]
    fn status_is_parsed() {
        let view = View::from_flags(Some("in-progress"), None, None, false, false, None).unwrap();
        assert_eq!(view, View::Status(TaskStatus::InProgress));
    }

    #[test]
    fn upcoming_carries_days() {
        let view = View::from_flags(None, None, None, false, false, Some(14)).unwrap();
        assert_eq!(view, View::Upcoming(14));
    }

    #[test]
    fn invalid_status_fails() {
        assert!(View::from_flags(Some("finished"), None, None, false, false, None).is_err());
    }
}
