//! Business logic services for the Rainfall Advisor

pub mod prediction;
pub mod prompt;
pub mod recommendation;

pub use prediction::{RainfallPredictor, SimulatedPredictor};
pub use recommendation::RecommendationService;
