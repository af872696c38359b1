//! Rainfall prediction models

use serde::{Deserialize, Serialize};

/// Amounts above this count as rain
pub const LIGHT_RAIN_MIN_MM: f64 = 0.0;
/// Amounts at or above this are normal rainfall
pub const NORMAL_RAIN_MIN_MM: f64 = 20.0;
/// Amounts at or above this are heavy rainfall
pub const HEAVY_RAIN_MIN_MM: f64 = 100.0;

/// Ordinal rainfall bucket derived from an amount in millimetres
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RainfallCategory {
    /// amount <= 0
    NoRain,
    /// 0 < amount < 20
    Light,
    /// 20 <= amount < 100
    Normal,
    /// amount >= 100
    Heavy,
}

impl RainfallCategory {
    pub const ALL: [RainfallCategory; 4] = [
        RainfallCategory::NoRain,
        RainfallCategory::Light,
        RainfallCategory::Normal,
        RainfallCategory::Heavy,
    ];

    /// Classify a rainfall amount. NaN is treated as no rain.
    pub fn from_amount(amount: f64) -> Self {
        if amount >= HEAVY_RAIN_MIN_MM {
            RainfallCategory::Heavy
        } else if amount >= NORMAL_RAIN_MIN_MM {
            RainfallCategory::Normal
        } else if amount > LIGHT_RAIN_MIN_MM {
            RainfallCategory::Light
        } else {
            RainfallCategory::NoRain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RainfallCategory::NoRain => "no_rain",
            RainfallCategory::Light => "light",
            RainfallCategory::Normal => "normal",
            RainfallCategory::Heavy => "heavy",
        }
    }
}

impl std::fmt::Display for RainfallCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for a rainfall prediction request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionInput {
    pub subdivision: String,
    pub year: i32,
    pub month: u32,
}

/// Raw output of a rainfall predictor, before classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RainfallEstimate {
    /// Millimetres, non-negative, rounded to two decimals
    pub amount: f64,
    pub will_rain: bool,
}

/// A classified rainfall prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub amount: f64,
    pub category: RainfallCategory,
    pub will_rain: bool,
}

impl From<RainfallEstimate> for PredictionResult {
    fn from(estimate: RainfallEstimate) -> Self {
        PredictionResult {
            amount: estimate.amount,
            category: RainfallCategory::from_amount(estimate.amount),
            will_rain: estimate.will_rain,
        }
    }
}

/// Round to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(RainfallCategory::from_amount(0.0), RainfallCategory::NoRain);
        assert_eq!(RainfallCategory::from_amount(19.99), RainfallCategory::Light);
        assert_eq!(RainfallCategory::from_amount(20.0), RainfallCategory::Normal);
        assert_eq!(RainfallCategory::from_amount(99.99), RainfallCategory::Normal);
        assert_eq!(RainfallCategory::from_amount(100.0), RainfallCategory::Heavy);
    }

    #[test]
    fn test_negative_and_nan_are_no_rain() {
        assert_eq!(RainfallCategory::from_amount(-5.0), RainfallCategory::NoRain);
        assert_eq!(RainfallCategory::from_amount(-0.0), RainfallCategory::NoRain);
        assert_eq!(RainfallCategory::from_amount(f64::NAN), RainfallCategory::NoRain);
    }

    #[test]
    fn test_smallest_positive_amount_is_light() {
        assert_eq!(RainfallCategory::from_amount(0.01), RainfallCategory::Light);
        assert_eq!(RainfallCategory::from_amount(f64::MIN_POSITIVE), RainfallCategory::Light);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&RainfallCategory::NoRain).unwrap();
        assert_eq!(json, "\"no_rain\"");

        for category in RainfallCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.to_string());
        }
    }

    #[test]
    fn test_prediction_result_from_estimate() {
        let result = PredictionResult::from(RainfallEstimate {
            amount: 130.0,
            will_rain: true,
        });
        assert_eq!(result.category, RainfallCategory::Heavy);
        assert!(result.will_rain);

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["willRain"], true);
        assert_eq!(json["category"], "heavy");
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(12.345_6), 12.35);
        assert_eq!(round_to_hundredths(70.0), 70.0);
        assert_eq!(round_to_hundredths(0.004), 0.0);
    }

    proptest! {
        #[test]
        fn prop_non_positive_is_no_rain(amount in -1.0e6f64..=0.0) {
            prop_assert_eq!(RainfallCategory::from_amount(amount), RainfallCategory::NoRain);
        }

        #[test]
        fn prop_category_matches_thresholds(amount in -1.0e3f64..1.0e4) {
            let expected = if amount <= 0.0 {
                RainfallCategory::NoRain
            } else if amount < 20.0 {
                RainfallCategory::Light
            } else if amount < 100.0 {
                RainfallCategory::Normal
            } else {
                RainfallCategory::Heavy
            };
            prop_assert_eq!(RainfallCategory::from_amount(amount), expected);
        }

        #[test]
        fn prop_category_is_monotonic(a in -500.0f64..500.0, b in -500.0f64..500.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RainfallCategory::from_amount(lo) <= RainfallCategory::from_amount(hi));
        }
    }
}
