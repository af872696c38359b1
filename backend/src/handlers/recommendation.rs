//! HTTP handlers for prediction and recommendation endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{
    resolve_language, validate_month, validate_rainfall_amount, validate_subdivision,
    PredictionInput, PredictionResult, RainfallCategory, RecommendationSet,
};

use crate::error::{AppError, AppResult};
use crate::AppState;

const PREDICT_FIELDS_REQUIRED: &str =
    "Subdivision (string), year (number), and month (number 1-12) are required.";
const RAINFALL_AMOUNT_REQUIRED: &str = "rainfallAmount (number) is required.";

/// Body of `POST /predict-and-recommend`
#[derive(Debug, Deserialize)]
pub struct PredictAndRecommendRequest {
    pub subdivision: Option<String>,
    pub year: Option<i32>,
    pub month: Option<i64>,
    pub language: Option<String>,
}

/// Prediction parameters echoed back with the resolved language
#[derive(Debug, Serialize)]
pub struct PredictionInputEcho {
    #[serde(flatten)]
    pub input: PredictionInput,
    pub language: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictAndRecommendResponse {
    pub prediction_input: PredictionInputEcho,
    pub predicted_rainfall: PredictionResult,
    pub recommendations: RecommendationSet,
}

/// Body of `POST /get-recommendations`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecommendationsRequest {
    pub rainfall_amount: Option<f64>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InputRainfall {
    pub amount: f64,
    pub category: RainfallCategory,
    pub language: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecommendationsResponse {
    pub input_rainfall: InputRainfall,
    pub recommendations: RecommendationSet,
}

impl PredictAndRecommendRequest {
    fn into_input(self) -> AppResult<(PredictionInput, String)> {
        let (subdivision, year, month) = match (self.subdivision, self.year, self.month) {
            (Some(subdivision), Some(year), Some(month)) => (subdivision, year, month),
            _ => return Err(AppError::ValidationError(PREDICT_FIELDS_REQUIRED.to_string())),
        };

        validate_subdivision(&subdivision)
            .map_err(|msg| AppError::validation("subdivision", msg))?;
        validate_month(month).map_err(|msg| AppError::validation("month", msg))?;

        let language = resolve_language(self.language.as_deref());
        let input = PredictionInput {
            subdivision,
            year,
            month: month as u32,
        };
        Ok((input, language))
    }
}

/// Simulate rainfall for a subdivision and month, then fetch recommendations
pub async fn predict_and_recommend(
    State(state): State<AppState>,
    payload: Result<Json<PredictAndRecommendRequest>, JsonRejection>,
) -> AppResult<Json<PredictAndRecommendResponse>> {
    let Json(request) = payload?;
    let (input, language) = request.into_input()?;

    let predicted_rainfall = PredictionResult::from(state.predictor.predict(&input).await?);

    let recommendations = state
        .recommendations
        .recommend_all(predicted_rainfall.category, predicted_rainfall.amount, &language)
        .await;

    Ok(Json(PredictAndRecommendResponse {
        prediction_input: PredictionInputEcho { input, language },
        predicted_rainfall,
        recommendations,
    }))
}

/// Fetch recommendations for a caller-supplied rainfall amount
pub async fn get_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<GetRecommendationsRequest>, JsonRejection>,
) -> AppResult<Json<GetRecommendationsResponse>> {
    let Json(request) = payload?;

    let amount = request
        .rainfall_amount
        .ok_or_else(|| AppError::validation("rainfallAmount", RAINFALL_AMOUNT_REQUIRED))?;
    validate_rainfall_amount(amount).map_err(|msg| AppError::validation("rainfallAmount", msg))?;

    let category = RainfallCategory::from_amount(amount);
    let language = resolve_language(request.language.as_deref());

    let recommendations = state
        .recommendations
        .recommend_all(category, amount, &language)
        .await;

    Ok(Json(GetRecommendationsResponse {
        input_rainfall: InputRainfall {
            amount,
            category,
            language,
        },
        recommendations,
    }))
}
