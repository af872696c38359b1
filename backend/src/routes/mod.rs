//! Route definitions for the Rainfall Advisor

use axum::{routing::post, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/predict-and-recommend", post(handlers::predict_and_recommend))
        .route("/get-recommendations", post(handlers::get_recommendations))
}
