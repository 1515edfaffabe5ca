//! Recommendation update builder.

use apis_core::enums::{Priority, RecommendationType};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecommendationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_type: Option<RecommendationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

pub struct RecommendationUpdateBuilder(RecommendationUpdate);

impl RecommendationUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(RecommendationUpdate::default())
    }

    #[must_use]
    pub fn recommendation_type(mut self, recommendation_type: RecommendationType) -> Self {
        self.0.recommendation_type = Some(recommendation_type);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn build(self) -> RecommendationUpdate {
        self.0
    }
}

impl Default for RecommendationUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
