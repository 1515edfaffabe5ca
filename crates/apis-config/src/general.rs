//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_user_email() -> String {
    "beekeeper@localhost".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Acting user id. Empty means "the user created by `apis init`".
    #[serde(default)]
    pub user_id: String,

    /// Email of the user `apis init` ensures exists.
    #[serde(default = "default_user_email")]
    pub user_email: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            user_id: String::new(),
            user_email: default_user_email(),
        }
    }
}

impl GeneralConfig {
    /// The configured user id, if one is set.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        Some(self.user_id.as_str()).filter(|id| !id.is_empty())
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::invalid(
                "general.default_limit",
                "must be at least 1",
            ));
        }
        if !self.user_email.contains('@') {
            return Err(ConfigError::invalid(
                "general.user_email",
                format!("'{}' is not an email address", self.user_email),
            ));
        }
        Ok(())
    }
}
