//! Recommendation feature types and result sets

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the four recommendation domains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    SelfCare,
    Agriculture,
    WaterConservationStorage,
    StagnantWater,
}

impl FeatureType {
    pub const ALL: [FeatureType; 4] = [
        FeatureType::SelfCare,
        FeatureType::Agriculture,
        FeatureType::WaterConservationStorage,
        FeatureType::StagnantWater,
    ];

    /// Wire key, e.g. `water_conservation_storage`
    pub fn key(&self) -> &'static str {
        match self {
            FeatureType::SelfCare => "self_care",
            FeatureType::Agriculture => "agriculture",
            FeatureType::WaterConservationStorage => "water_conservation_storage",
            FeatureType::StagnantWater => "stagnant_water",
        }
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A feature key outside the fixed set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown feature type: {0}")]
pub struct UnknownFeatureType(pub String);

impl FromStr for FeatureType {
    type Err = UnknownFeatureType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureType::ALL
            .into_iter()
            .find(|feature| feature.key() == s)
            .ok_or_else(|| UnknownFeatureType(s.to_string()))
    }
}

/// Recommendation text per feature type, as returned to clients
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationSet {
    #[serde(rename = "selfCare")]
    pub self_care: String,
    pub agriculture: String,
    #[serde(rename = "waterConservationAndStorage")]
    pub water_conservation_storage: String,
    #[serde(rename = "stagnantWaterManagement")]
    pub stagnant_water: String,
}

impl RecommendationSet {
    pub fn get(&self, feature: FeatureType) -> &str {
        match feature {
            FeatureType::SelfCare => &self.self_care,
            FeatureType::Agriculture => &self.agriculture,
            FeatureType::WaterConservationStorage => &self.water_conservation_storage,
            FeatureType::StagnantWater => &self.stagnant_water,
        }
    }

    pub fn set(&mut self, feature: FeatureType, text: String) {
        match feature {
            FeatureType::SelfCare => self.self_care = text,
            FeatureType::Agriculture => self.agriculture = text,
            FeatureType::WaterConservationStorage => self.water_conservation_storage = text,
            FeatureType::StagnantWater => self.stagnant_water = text,
        }
    }
}
