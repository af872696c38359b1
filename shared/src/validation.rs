//! Validation utilities for rainfall requests

/// Validate that a subdivision name is present
pub fn validate_subdivision(subdivision: &str) -> Result<(), &'static str> {
    if subdivision.trim().is_empty() {
        return Err("Subdivision must not be empty");
    }
    Ok(())
}

/// Validate that a month number is in 1..=12
pub fn validate_month(month: i64) -> Result<(), &'static str> {
    if !(1..=12).contains(&month) {
        return Err("Month must be an integer between 1 and 12.");
    }
    Ok(())
}

/// Validate a rainfall amount supplied by a client
pub fn validate_rainfall_amount(amount: f64) -> Result<(), &'static str> {
    if !amount.is_finite() {
        return Err("rainfallAmount must be a finite number");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_subdivision() {
        assert!(validate_subdivision("Kerala").is_ok());
        assert!(validate_subdivision("West Rajasthan").is_ok());
        assert!(validate_subdivision("").is_err());
        assert!(validate_subdivision("  ").is_err());
    }

    #[test]
    fn test_validate_month_valid() {
        for month in 1..=12 {
            assert!(validate_month(month).is_ok());
        }
    }

    #[test]
    fn test_validate_month_out_of_range() {
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
        assert!(validate_month(-1).is_err());
    }

    #[test]
    fn test_validate_rainfall_amount() {
        assert!(validate_rainfall_amount(-5.0).is_ok());
        assert!(validate_rainfall_amount(0.0).is_ok());
        assert!(validate_rainfall_amount(250.75).is_ok());
        assert!(validate_rainfall_amount(f64::NAN).is_err());
        assert!(validate_rainfall_amount(f64::INFINITY).is_err());
    }
}
