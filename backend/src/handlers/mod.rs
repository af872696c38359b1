//! HTTP handlers for the Rainfall Advisor

pub mod health;
pub mod recommendation;

pub use health::health_check;
pub use recommendation::{get_recommendations, predict_and_recommend};
