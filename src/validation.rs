//! Value-range checks for activity records.
//!
//! The store runs [`validate_record`] as a second gate on every `add`; the
//! parse helpers are for the input boundary, which receives raw form text.

use thiserror_no_std::Error;

use crate::model::record::{ActivityRecord, HealthMetrics, Metric};

/// Lowest accepted rating (inclusive)
pub const RATING_MIN: i64 = 1;

/// Highest accepted rating (inclusive)
pub const RATING_MAX: i64 = 5;

/// Reasons a rating or duration is refused
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("{metric:?} rating {value} is outside 1..=5")]
    RatingOutOfRange { metric: Metric, value: i64 },

    #[error("rating is not an integer")]
    RatingNotInteger,

    #[error("duration {0} is negative")]
    NegativeDuration(f64),

    #[error("duration is not a finite number")]
    DurationNotNumeric,
}

/// Check a single rating against the 1..=5 scale.
pub fn check_rating(metric: Metric, value: i64) -> Result<u8, ValidationError> {
    if (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ValidationError::RatingOutOfRange { metric, value })
    }
}

/// Check that a duration is a finite, non-negative number of minutes.
pub fn check_duration(minutes: f64) -> Result<f64, ValidationError> {
    if !minutes.is_finite() {
        return Err(ValidationError::DurationNotNumeric);
    }
    if minutes < 0.0 {
        return Err(ValidationError::NegativeDuration(minutes));
    }
    Ok(minutes)
}

pub fn validate_metrics(metrics: &HealthMetrics) -> Result<(), ValidationError> {
    for metric in Metric::ALL {
        check_rating(metric, i64::from(metrics.get(metric)))?;
    }
    Ok(())
}

/// Full gate applied by [`ActivityStore::add`](crate::model::ActivityStore::add).
pub fn validate_record(record: &ActivityRecord) -> Result<(), ValidationError> {
    validate_metrics(record.metrics())?;
    check_duration(record.duration_minutes())?;
    Ok(())
}

/// Parse a rating typed by the user.
///
/// Only plain base-10 integers are accepted: `"3"` and `" 3 "` parse,
/// `"2.5"`, `"abc"` and `""` do not.
pub fn parse_rating(metric: Metric, input: &str) -> Result<u8, ValidationError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::RatingNotInteger)?;
    check_rating(metric, value)
}

/// Parse a duration in minutes typed by the user.
///
/// Accepts any finite decimal (`"30"`, `"12.5"`); rejects empty text,
/// `NaN`/`inf` spellings and negative values.
pub fn parse_duration(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::DurationNotNumeric);
    }
    let minutes: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::DurationNotNumeric)?;
    check_duration(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(check_rating(Metric::Energy, 1), Ok(1));
        assert_eq!(check_rating(Metric::Energy, 5), Ok(5));
        assert_eq!(
            check_rating(Metric::Stress, 0),
            Err(ValidationError::RatingOutOfRange {
                metric: Metric::Stress,
                value: 0
            })
        );
        assert!(check_rating(Metric::Happiness, 6).is_err());
        assert!(check_rating(Metric::Energy, -1).is_err());
    }

    #[test]
    fn test_duration_checks() {
        assert_eq!(check_duration(0.0), Ok(0.0));
        assert_eq!(check_duration(30.5), Ok(30.5));
        assert_eq!(
            check_duration(-1.0),
            Err(ValidationError::NegativeDuration(-1.0))
        );
        assert_eq!(
            check_duration(f64::NAN),
            Err(ValidationError::DurationNotNumeric)
        );
        assert_eq!(
            check_duration(f64::INFINITY),
            Err(ValidationError::DurationNotNumeric)
        );
    }

    #[test]
    fn test_parse_rating_rejects_non_integers() {
        assert_eq!(parse_rating(Metric::Energy, " 3 "), Ok(3));
        assert_eq!(
            parse_rating(Metric::Stress, "abc"),
            Err(ValidationError::RatingNotInteger)
        );
        assert_eq!(
            parse_rating(Metric::Stress, "2.5"),
            Err(ValidationError::RatingNotInteger)
        );
        assert_eq!(
            parse_rating(Metric::Stress, ""),
            Err(ValidationError::RatingNotInteger)
        );
        assert!(matches!(
            parse_rating(Metric::Happiness, "6"),
            Err(ValidationError::RatingOutOfRange { value: 6, .. })
        ));
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30"), Ok(30.0));
        assert_eq!(parse_duration(" 12.5"), Ok(12.5));
        assert_eq!(
            parse_duration("not a number"),
            Err(ValidationError::DurationNotNumeric)
        );
        assert_eq!(parse_duration(""), Err(ValidationError::DurationNotNumeric));
        assert_eq!(
            parse_duration("NaN"),
            Err(ValidationError::DurationNotNumeric)
        );
        assert_eq!(
            parse_duration("inf"),
            Err(ValidationError::DurationNotNumeric)
        );
        assert_eq!(
            parse_duration("-1"),
            Err(ValidationError::NegativeDuration(-1.0))
        );
    }

    #[test]
    fn test_validate_metrics_reports_first_bad_rating() {
        let metrics = HealthMetrics::new(3, 9, 0);
        assert_eq!(
            validate_metrics(&metrics),
            Err(ValidationError::RatingOutOfRange {
                metric: Metric::Stress,
                value: 9
            })
        );
    }
}
