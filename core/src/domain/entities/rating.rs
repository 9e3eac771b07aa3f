//! Rating values and the per-listing aggregate.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;

/// Accepts finite values in [`RATING_MIN`, `RATING_MAX`]
pub fn validate_rating(value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: RATING_MIN.to_string(),
            max: RATING_MAX.to_string(),
        })
    }
}

/// Sum, count and mean of every rating submitted against one listing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub total_score: f64,
    pub count: u32,
    pub average: f64,
}

impl RatingAggregate {
    /// Recomputes the aggregate from scratch; zero ratings average to 0
    pub fn from_ratings(ratings: &[f64]) -> Self {
        // Summed in ascending order so row order never changes the result
        let mut sorted = ratings.to_vec();
        sorted.sort_by(f64::total_cmp);
        let total_score: f64 = sorted.iter().sum();
        let count = sorted.len() as u32;
        let average = if count == 0 {
            0.0
        } else {
            total_score / f64::from(count)
        };
        Self {
            total_score,
            count,
            average,
        }
    }
}
