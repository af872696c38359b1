//! Rainfall prediction
//!
//! The only predictor today is a seasonal simulator: it draws a random amount
//! from a month-dependent range and nudges it for a couple of well-known
//! subdivisions. It stands in for a real forecasting model, which can be
//! plugged in through [`RainfallPredictor`].

use axum::async_trait;
use rand::Rng;
use shared::{round_to_hundredths, PredictionInput, RainfallEstimate};

use crate::error::AppResult;

/// Produces a rainfall estimate for a subdivision and month
#[async_trait]
pub trait RainfallPredictor: Send + Sync {
    async fn predict(&self, input: &PredictionInput) -> AppResult<RainfallEstimate>;
}

/// Seasonal bucket a month falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// June to September
    Monsoon,
    /// October to February
    Dry,
    /// March to May
    Transitional,
}

impl Season {
    pub fn for_month(month: u32) -> Self {
        match month {
            6..=9 => Season::Monsoon,
            10..=12 | 1 | 2 => Season::Dry,
            _ => Season::Transitional,
        }
    }
}

/// Millimetres removed for Rajasthan subdivisions, floored at zero
pub const RAJASTHAN_ADJUSTMENT_MM: f64 = 50.0;
/// Millimetres added for Kerala subdivisions
pub const KERALA_ADJUSTMENT_MM: f64 = 30.0;

/// Draw a simulated rainfall estimate.
///
/// `will_rain` is decided by the seasonal draw, before the regional
/// adjustments are applied.
pub fn simulate_rainfall<R: Rng + ?Sized>(
    rng: &mut R,
    subdivision: &str,
    month: u32,
) -> RainfallEstimate {
    let (base, will_rain) = match Season::for_month(month) {
        Season::Monsoon => (rng.gen_range(70u32..270), true),
        Season::Dry => {
            let amount = rng.gen_range(0u32..30);
            (amount, amount > 0)
        }
        Season::Transitional => {
            let amount = rng.gen_range(10u32..70);
            (amount, amount > 0)
        }
    };

    let mut amount = f64::from(base);
    let region = subdivision.to_lowercase();
    if region.contains("rajasthan") {
        amount = (amount - RAJASTHAN_ADJUSTMENT_MM).max(0.0);
    }
    if region.contains("kerala") {
        amount += KERALA_ADJUSTMENT_MM;
    }

    RainfallEstimate {
        amount: round_to_hundredths(amount),
        will_rain,
    }
}

/// Random seasonal simulator backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPredictor;

#[async_trait]
impl RainfallPredictor for SimulatedPredictor {
    async fn predict(&self, input: &PredictionInput) -> AppResult<RainfallEstimate> {
        let estimate = simulate_rainfall(&mut rand::thread_rng(), &input.subdivision, input.month);

        tracing::debug!(
            subdivision = %input.subdivision,
            year = input.year,
            month = input.month,
            amount = estimate.amount,
            will_rain = estimate.will_rain,
            "Simulated rainfall prediction"
        );

        Ok(estimate)
    }
}
