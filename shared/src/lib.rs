//! Shared types and models for the Rainfall Advisor
//!
//! Rainfall categories, prediction records, recommendation feature types and
//! input validation used by the backend and its tests.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
