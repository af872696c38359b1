//! Rainfall Advisor - Backend
//!
//! Simulates a rainfall prediction and asks a generative model for self-care,
//! agriculture, water conservation and stagnant-water recommendations.

use axum::{routing::get, Router};
use std::{path::Path, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::TextGenerator;
use services::{RainfallPredictor, RecommendationService};

/// Welcome text served at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to the Rainfall Prediction LLM Backend! \
     Use /predict-and-recommend or /get-recommendations endpoints.";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub recommendations: RecommendationService,
    pub predictor: Arc<dyn RainfallPredictor>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, predictor: Arc<dyn RainfallPredictor>) -> Self {
        Self {
            recommendations: RecommendationService::new(generator),
            predictor,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState, static_dir: Option<&Path>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .merge(routes::api_routes());

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    WELCOME_MESSAGE
}
