//! Recommendation fetching
//!
//! Each feature gets its own prompt and its own model call. A failed call is
//! logged and replaced by a fallback message for that feature only; the four
//! calls of a request run concurrently and never fail as a group.

use std::sync::Arc;

use shared::{FeatureType, RainfallCategory, RecommendationSet};

use crate::external::TextGenerator;
use crate::services::prompt::{build_prompt, build_prompt_for_key, INVALID_FEATURE_MESSAGE};

/// Text returned to the client when the model call for a feature fails
pub fn fallback_message(feature_key: &str) -> String {
    format!(
        "Sorry, I couldn't fetch recommendations for {} at the moment. \
         Please ensure your API key is valid and try again later.",
        feature_key
    )
}

/// Recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    generator: Arc<dyn TextGenerator>,
}

impl RecommendationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Fetch recommendations for one feature
    pub async fn recommend(
        &self,
        feature: FeatureType,
        category: RainfallCategory,
        amount: f64,
        language: &str,
    ) -> String {
        let prompt = build_prompt(feature, category, amount, language);
        self.fetch(feature.key(), category, amount, language, &prompt)
            .await
    }

    /// Fetch recommendations for a feature given by its wire key.
    ///
    /// Unknown keys short-circuit to [`INVALID_FEATURE_MESSAGE`] without
    /// calling the model.
    pub async fn recommend_by_key(
        &self,
        feature_key: &str,
        category: RainfallCategory,
        amount: f64,
        language: &str,
    ) -> String {
        match build_prompt_for_key(feature_key, category, amount, language) {
            Ok(prompt) => {
                self.fetch(feature_key, category, amount, language, &prompt)
                    .await
            }
            Err(e) => {
                tracing::warn!("{}", e);
                INVALID_FEATURE_MESSAGE.to_string()
            }
        }
    }

    async fn fetch(
        &self,
        feature_key: &str,
        category: RainfallCategory,
        amount: f64,
        language: &str,
        prompt: &str,
    ) -> String {
        tracing::info!(
            "Fetching {} in {} for {} rain ({}mm)",
            feature_key,
            language,
            category,
            amount
        );

        match self.generator.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(feature = feature_key, error = %e, "Failed to generate recommendations");
                fallback_message(feature_key)
            }
        }
    }

    /// Fetch all four features concurrently
    pub async fn recommend_all(
        &self,
        category: RainfallCategory,
        amount: f64,
        language: &str,
    ) -> RecommendationSet {
        let (self_care, agriculture, water_conservation_storage, stagnant_water) = tokio::join!(
            self.recommend(FeatureType::SelfCare, category, amount, language),
            self.recommend(FeatureType::Agriculture, category, amount, language),
            self.recommend(FeatureType::WaterConservationStorage, category, amount, language),
            self.recommend(FeatureType::StagnantWater, category, amount, language),
        );

        RecommendationSet {
            self_care,
            agriculture,
            water_conservation_storage,
            stagnant_water,
        }
    }
}
