//! Prompt construction for recommendation requests
//!
//! Every prompt is the base instruction followed by exactly one clause, picked
//! from the (feature, category) pair by [`PromptClause::select`].

use shared::{FeatureType, RainfallCategory, UnknownFeatureType};

/// Returned instead of a prompt when the feature key is not recognised
pub const INVALID_FEATURE_MESSAGE: &str = "Invalid feature type requested.";

/// Instruction shared by every prompt
pub fn base_instruction(language: &str) -> String {
    format!(
        "You are an AI assistant specialized in providing actionable advice related to rainfall. \
         Provide concise recommendations in {language}."
    )
}

/// The feature-specific part of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptClause {
    /// Self-care for dry, possibly hot weather
    DryWeatherSelfCare,
    /// Self-care scaled to the expected rainfall
    RainfallSelfCare,
    /// Irrigation, crop selection and drought management
    DroughtAgriculture,
    /// Crop management and irrigation for the expected rainfall
    RainfallAgriculture,
    /// Harvesting, use and safe storage duration of rainwater
    RainwaterHarvesting,
    /// Household and community water conservation
    GeneralConservation,
    /// Conservation plus basic rainwater collection
    ConservationAndCollection,
    /// Mosquito breeding and waterborne disease prevention
    StagnantWaterMitigation,
    /// Small puddles after light rain
    MinorPuddleManagement,
    /// Clean surroundings, stagnation from other sources
    CleanEnvironment,
}

impl PromptClause {
    pub fn select(feature: FeatureType, category: RainfallCategory) -> Self {
        use FeatureType::*;
        use RainfallCategory::*;

        match (feature, category) {
            (SelfCare, NoRain) => PromptClause::DryWeatherSelfCare,
            (SelfCare, Light | Normal | Heavy) => PromptClause::RainfallSelfCare,

            (Agriculture, NoRain) => PromptClause::DroughtAgriculture,
            (Agriculture, Light | Normal | Heavy) => PromptClause::RainfallAgriculture,

            (WaterConservationStorage, Heavy) => PromptClause::RainwaterHarvesting,
            (WaterConservationStorage, NoRain) => PromptClause::GeneralConservation,
            (WaterConservationStorage, Light | Normal) => PromptClause::ConservationAndCollection,

            (StagnantWater, Heavy | Normal) => PromptClause::StagnantWaterMitigation,
            (StagnantWater, Light) => PromptClause::MinorPuddleManagement,
            (StagnantWater, NoRain) => PromptClause::CleanEnvironment,
        }
    }

    pub fn render(&self, category: RainfallCategory, amount: f64) -> String {
        match self {
            PromptClause::DryWeatherSelfCare => {
                "There is no rain predicted. Provide self-care recommendations suitable for dry, \
                 possibly hot, weather conditions."
                    .to_string()
            }
            PromptClause::RainfallSelfCare => format!(
                "Based on a {category} rainfall of approximately {amount}mm, what self-care \
                 recommendations (e.g., clothing, health precautions, travel advice, daily \
                 activities) would you give?"
            ),
            PromptClause::DroughtAgriculture => {
                "There is no rain predicted. Provide agriculture recommendations for dry weather, \
                 focusing on irrigation, crop selection, or drought management."
                    .to_string()
            }
            PromptClause::RainfallAgriculture => format!(
                "Based on a {category} rainfall of approximately {amount}mm, what agriculture \
                 recommendations (e.g., crop management, irrigation needs, pest/disease \
                 prevention, planting schedules) would you give?"
            ),
            PromptClause::RainwaterHarvesting => format!(
                "There is a prediction of heavy rainfall (approximately {amount}mm). Provide \
                 recommendations on how to effectively save rainwater (harvesting methods), how \
                 to use the collected water, and for how many days one can safely store \
                 collected rainwater without attracting insects, assuming basic domestic \
                 collection methods (e.g., in clean covered barrels/tanks)."
            ),
            PromptClause::GeneralConservation => {
                "There is no rain predicted. Provide recommendations on general household and \
                 community water conservation practices."
                    .to_string()
            }
            PromptClause::ConservationAndCollection => format!(
                "Based on a {category} rainfall of approximately {amount}mm, provide \
                 recommendations for general water conservation and basic rainwater collection \
                 strategies."
            ),
            PromptClause::StagnantWaterMitigation => format!(
                "Due to predicted {category} rainfall (approximately {amount}mm), there is a \
                 significant risk of stagnant water. Provide recommendations on how to deal with \
                 stagnant water effectively to prevent health hazards like mosquito breeding and \
                 waterborne diseases."
            ),
            PromptClause::MinorPuddleManagement => format!(
                "Due to predicted light rainfall (approximately {amount}mm), there might be \
                 minor puddles. Provide recommendations on how to manage small stagnant water \
                 issues."
            ),
            PromptClause::CleanEnvironment => {
                "There is no rain predicted. Provide general recommendations on maintaining a \
                 clean environment and preventing water stagnation from other sources."
                    .to_string()
            }
        }
    }
}

/// Build the full prompt for one feature
pub fn build_prompt(
    feature: FeatureType,
    category: RainfallCategory,
    amount: f64,
    language: &str,
) -> String {
    let clause = PromptClause::select(feature, category).render(category, amount);
    format!("{} {}", base_instruction(language), clause)
}

/// Build a prompt from a wire feature key such as `stagnant_water`
pub fn build_prompt_for_key(
    feature_key: &str,
    category: RainfallCategory,
    amount: f64,
    language: &str,
) -> Result<String, UnknownFeatureType> {
    let feature: FeatureType = feature_key.parse()?;
    Ok(build_prompt(feature, category, amount, language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_clause_table() {
        use FeatureType::*;
        use RainfallCategory::*;

        let expected = [
            (SelfCare, NoRain, PromptClause::DryWeatherSelfCare),
            (SelfCare, Light, PromptClause::RainfallSelfCare),
            (SelfCare, Normal, PromptClause::RainfallSelfCare),
            (SelfCare, Heavy, PromptClause::RainfallSelfCare),
            (Agriculture, NoRain, PromptClause::DroughtAgriculture),
            (Agriculture, Light, PromptClause::RainfallAgriculture),
            (Agriculture, Normal, PromptClause::RainfallAgriculture),
            (Agriculture, Heavy, PromptClause::RainfallAgriculture),
            (WaterConservationStorage, NoRain, PromptClause::GeneralConservation),
            (WaterConservationStorage, Light, PromptClause::ConservationAndCollection),
            (WaterConservationStorage, Normal, PromptClause::ConservationAndCollection),
            (WaterConservationStorage, Heavy, PromptClause::RainwaterHarvesting),
            (StagnantWater, NoRain, PromptClause::CleanEnvironment),
            (StagnantWater, Light, PromptClause::MinorPuddleManagement),
            (StagnantWater, Normal, PromptClause::StagnantWaterMitigation),
            (StagnantWater, Heavy, PromptClause::StagnantWaterMitigation),
        ];

        for (feature, category, clause) in expected {
            assert_eq!(
                PromptClause::select(feature, category),
                clause,
                "{feature} / {category}"
            );
        }
    }

    #[test]
    fn test_every_clause_is_reachable() {
        let reached: HashSet<PromptClause> = FeatureType::ALL
            .into_iter()
            .flat_map(|f| RainfallCategory::ALL.into_iter().map(move |c| PromptClause::select(f, c)))
            .collect();
        assert_eq!(reached.len(), 10);
    }

    #[test]
    fn test_all_prompts_start_with_base_instruction() {
        for feature in FeatureType::ALL {
            for category in RainfallCategory::ALL {
                let prompt = build_prompt(feature, category, 42.5, "hi");
                assert!(prompt.starts_with(&base_instruction("hi")));
                assert!(prompt.len() > base_instruction("hi").len() + 1);
            }
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        for feature in FeatureType::ALL {
            for category in RainfallCategory::ALL {
                assert_eq!(
                    build_prompt(feature, category, 63.25, "en"),
                    build_prompt(feature, category, 63.25, "en")
                );
            }
        }
    }

    #[test]
    fn test_base_instruction_names_language() {
        assert!(base_instruction("Tamil").ends_with("Provide concise recommendations in Tamil."));
    }

    #[test]
    fn test_amount_rendering() {
        let prompt = build_prompt(FeatureType::SelfCare, RainfallCategory::Heavy, 120.0, "en");
        assert!(prompt.contains("Based on a heavy rainfall of approximately 120mm"));

        let prompt = build_prompt(FeatureType::Agriculture, RainfallCategory::Light, 12.5, "en");
        assert!(prompt.contains("approximately 12.5mm"));
    }

    #[test]
    fn test_heavy_water_conservation_asks_for_storage_days() {
        let prompt = build_prompt(
            FeatureType::WaterConservationStorage,
            RainfallCategory::Heavy,
            150.0,
            "en",
        );
        assert!(prompt.contains("heavy rainfall (approximately 150mm)"));
        assert!(prompt.contains("how many days one can safely store"));
    }

    #[test]
    fn test_no_rain_prompts_omit_amount() {
        for feature in FeatureType::ALL {
            let prompt = build_prompt(feature, RainfallCategory::NoRain, -5.0, "en");
            assert!(prompt.contains("There is no rain predicted."));
            assert!(!prompt.contains("-5"));
        }
    }

    #[test]
    fn test_stagnant_water_normal_and_heavy_share_clause() {
        let normal = build_prompt(FeatureType::StagnantWater, RainfallCategory::Normal, 50.0, "en");
        let heavy = build_prompt(FeatureType::StagnantWater, RainfallCategory::Heavy, 150.0, "en");
        assert!(normal.contains("Due to predicted normal rainfall (approximately 50mm)"));
        assert!(heavy.contains("Due to predicted heavy rainfall (approximately 150mm)"));
        assert!(normal.contains("mosquito breeding"));
        assert!(heavy.contains("mosquito breeding"));
    }

    #[test]
    fn test_build_prompt_for_key() {
        let prompt = build_prompt_for_key("stagnant_water", RainfallCategory::Light, 5.0, "en").unwrap();
        assert!(prompt.contains("minor puddles"));

        let err = build_prompt_for_key("flood_insurance", RainfallCategory::Light, 5.0, "en").unwrap_err();
        assert_eq!(err.0, "flood_insurance");
    }
}
