//! Hive update builder.

use apis_core::enums::{ColonyStrength, HiveStatus, HiveTemperament, HoneyStores, QueenStatus};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct HiveUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apiary_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HiveStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colony_strength: Option<ColonyStrength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queen_status: Option<QueenStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperament: Option<HiveTemperament>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honey_stores: Option<HoneyStores>,
}

pub struct HiveUpdateBuilder(HiveUpdate);

impl HiveUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(HiveUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn apiary_id(mut self, apiary_id: impl Into<String>) -> Self {
        self.0.apiary_id = Some(apiary_id.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: HiveStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.0.image_url = Some(image_url);
        self
    }

    #[must_use]
    pub fn colony_strength(mut self, strength: ColonyStrength) -> Self {
        self.0.colony_strength = Some(strength);
        self
    }

    #[must_use]
    pub fn queen_status(mut self, queen_status: QueenStatus) -> Self {
        self.0.queen_status = Some(queen_status);
        self
    }

    #[must_use]
    pub fn temperament(mut self, temperament: HiveTemperament) -> Self {
        self.0.temperament = Some(temperament);
        self
    }

    #[must_use]
    pub fn honey_stores(mut self, honey_stores: HoneyStores) -> Self {
        self.0.honey_stores = Some(honey_stores);
        self
    }

    #[must_use]
    pub fn build(self) -> HiveUpdate {
        self.0
    }
}

impl Default for HiveUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
