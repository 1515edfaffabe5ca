//! Apiary update builder.

use apis_core::enums::ApiaryStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiaryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApiaryStatus>,
}

pub struct ApiaryUpdateBuilder(ApiaryUpdate);

impl ApiaryUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ApiaryUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.0.latitude = Some(latitude);
        self.0.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn status(mut self, status: ApiaryStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> ApiaryUpdate {
        self.0
    }
}

impl Default for ApiaryUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
