//! Domain models for the Rainfall Advisor

mod rainfall;
mod recommendation;

pub use rainfall::*;
pub use recommendation::*;
