//! Advisor pass settings.

use apis_core::enums::DedupPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdvisorConfig {
    /// Duplicate handling between advisor runs (`"none"` or `"same_day"`).
    #[serde(default)]
    pub dedup: DedupPolicy,
}
