use super::ReviewError;
use serde::{Deserialize, Serialize};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub name: String,
    pub rating: i64,
}

impl Rating {
    pub fn new(name: impl Into<String>, rating: i64) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

const DEFAULT_RATINGS: [(&str, i64); 5] = [
    ("Academics", 4),
    ("Infrastructure", 4),
    ("Teachers", 4),
    ("Safety", 5),
    ("Value for Money", 3),
];

pub fn default_ratings() -> Vec<Rating> {
    DEFAULT_RATINGS
        .iter()
        .map(|(name, rating)| Rating::new(*name, *rating))
        .collect()
}

/// Every rating needs a non-blank name and a value in `1..=5`.
pub fn validate_ratings(ratings: &[Rating]) -> Result<(), ReviewError> {
    for (index, rating) in ratings.iter().enumerate() {
        if rating.name.trim().is_empty() {
            return Err(ReviewError::InvalidRatings(format!(
                "rating {index} has an empty name"
            )));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating.rating) {
            return Err(ReviewError::InvalidRatings(format!(
                "rating '{}' is {}, expected {MIN_RATING}-{MAX_RATING}",
                rating.name, rating.rating
            )));
        }
    }
    Ok(())
}
