//! VA combined-rating math.
//!
//! Individual ratings are merged with the "whole person" rule: every additional
//! disability applies to the efficiency left over by the ones before it, and the
//! final value is rounded once to the nearest ten.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::{AnalysisError, ConditionCatalog};
use super::domain::ConditionId;

/// A VA disability percentage: a multiple of ten between 0 and 100.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DisabilityRating(u8);

impl DisabilityRating {
    pub const ZERO: Self = Self(0);
    pub const TOTAL: Self = Self(100);

    pub fn new(value: u8) -> Result<Self, RatingError> {
        if !Self::is_valid(value) {
            return Err(RatingError::InvalidRating { value });
        }
        Ok(Self(value))
    }

    /// Rating for a built-in table; an invalid value fails const evaluation.
    pub(crate) const fn seeded(value: u8) -> Self {
        assert!(
            Self::is_valid(value),
            "seeded disability rating must be a multiple of 10 between 0 and 100"
        );
        Self(value)
    }

    const fn is_valid(value: u8) -> bool {
        value <= 100 && value % 10 == 0
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DisabilityRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DisabilityRating> for u8 {
    fn from(rating: DisabilityRating) -> Self {
        rating.0
    }
}

impl fmt::Display for DisabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("disability rating {value} must be a multiple of 10 between 0 and 100")]
    InvalidRating { value: u8 },
}

/// Combine individual ratings into the overall VA rating.
pub fn combined_rating(ratings: &[DisabilityRating]) -> DisabilityRating {
    match ratings {
        [] => DisabilityRating::ZERO,
        [single] => *single,
        _ => {
            let mut ordered: Vec<u8> = ratings.iter().map(|rating| rating.value()).collect();
            ordered.sort_unstable_by(|a, b| b.cmp(a));

            let mut combined = f64::from(ordered[0]);
            for rating in &ordered[1..] {
                let remaining = 100.0 - combined;
                combined += f64::from(*rating) * remaining / 100.0;
            }

            let rounded = ((combined / 10.0).round() * 10.0).clamp(0.0, 100.0);
            DisabilityRating(rounded as u8)
        }
    }
}

/// Rating math bound to a condition catalog for processing-time lookups.
#[derive(Debug, Clone)]
pub struct RatingCalculator {
    catalog: Arc<ConditionCatalog>,
}

impl RatingCalculator {
    pub fn new(catalog: Arc<ConditionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn combined_rating(&self, ratings: &[DisabilityRating]) -> DisabilityRating {
        combined_rating(ratings)
    }

    /// Validate raw percentages, then combine them.
    pub fn combine_percentages(&self, raw: &[u8]) -> Result<DisabilityRating, RatingError> {
        let ratings = raw
            .iter()
            .map(|value| DisabilityRating::new(*value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(combined_rating(&ratings))
    }

    /// Mean processing time in days across `condition_ids`, rounded; 0 for an empty list.
    pub fn average_processing_time(
        &self,
        condition_ids: &[ConditionId],
    ) -> Result<u32, AnalysisError> {
        if condition_ids.is_empty() {
            return Ok(0);
        }

        let mut total: u64 = 0;
        for id in condition_ids {
            total += u64::from(self.catalog.require(id)?.processing_time_days);
        }

        Ok((total as f64 / condition_ids.len() as f64).round() as u32)
    }
}
