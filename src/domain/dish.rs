//! Dish domain model.
//!
//! A [`Dish`] is one match returned by the backend for a search or chat request.
//! Field names follow the backend's JSON contract so the type deserializes
//! directly from response bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which a match is shown as strong.
const HIGH_SCORE_THRESHOLD: f64 = 0.7;

/// Score at or above which a match is shown as moderate.
const MEDIUM_SCORE_THRESHOLD: f64 = 0.45;

/// Calories per serving at or below which a dish is tagged "Low cal".
const LOW_CALORIE_LIMIT: u32 = 200;

/// Calories per serving at or below which a dish is tagged "Medium".
const MEDIUM_CALORIE_LIMIT: u32 = 500;

/// Identifier of a dish, used as the list key.
///
/// The backend emits string ids, but older datasets carry integers; both
/// decode into the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDishId", into = "String")]
pub struct DishId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDishId {
    Text(String),
    Number(i64),
}

impl From<RawDishId> for DishId {
    fn from(raw: RawDishId) -> Self {
        match raw {
            RawDishId::Text(s) => Self(s),
            RawDishId::Number(n) => Self(n.to_string()),
        }
    }
}

impl From<DishId> for String {
    fn from(id: DishId) -> Self {
        id.0
    }
}

impl From<&str> for DishId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl DishId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dish returned by the search or chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub food_id: DishId,
    pub food_name: String,
    pub similarity_score: f64,
    pub cuisine_type: String,
    pub food_calories_per_serving: u32,
    pub food_description: String,
}

/// Visual strength of a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

/// Calorie tag shown next to a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieBand {
    Low,
    Medium,
    High,
}

impl CalorieBand {
    /// Short label rendered in the results table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low cal",
            Self::Medium => "Medium",
            Self::High => "High cal",
        }
    }
}

impl Dish {
    /// Returns `true` if the similarity score lies in `[0, 1]`.
    ///
    /// Only dishes passing this check are accepted into the result list. `NaN`
    /// fails the check.
    #[must_use]
    pub fn has_valid_score(&self) -> bool {
        (0.0..=1.0).contains(&self.similarity_score)
    }

    /// Similarity score as a whole percentage (`0.834` becomes `83`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score_percent(&self) -> u8 {
        (self.similarity_score.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// Buckets the similarity score for coloring.
    #[must_use]
    pub fn score_band(&self) -> ScoreBand {
        if self.similarity_score >= HIGH_SCORE_THRESHOLD {
            ScoreBand::High
        } else if self.similarity_score >= MEDIUM_SCORE_THRESHOLD {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    /// Buckets the calories per serving into a tag.
    #[must_use]
    pub const fn calorie_band(&self) -> CalorieBand {
        if self.food_calories_per_serving <= LOW_CALORIE_LIMIT {
            CalorieBand::Low
        } else if self.food_calories_per_serving <= MEDIUM_CALORIE_LIMIT {
            CalorieBand::Medium
        } else {
            CalorieBand::High
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_dish(id: &str, name: &str, score: f64) -> Dish {
    Dish {
        food_id: DishId::from(id),
        food_name: name.to_string(),
        similarity_score: score,
        cuisine_type: "Thai".to_string(),
        food_calories_per_serving: 420,
        food_description: "Rice noodles with chili and basil".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_decodes_from_string_or_integer() {
        let text: Dish = serde_json::from_str(
            r#"{"food_id":"17","food_name":"Pad Thai","similarity_score":0.8,
                "cuisine_type":"Thai","food_calories_per_serving":450,
                "food_description":"noodles"}"#,
        )
        .unwrap();
        let number: Dish = serde_json::from_str(
            r#"{"food_id":17,"food_name":"Pad Thai","similarity_score":0.8,
                "cuisine_type":"Thai","food_calories_per_serving":450,
                "food_description":"noodles"}"#,
        )
        .unwrap();

        assert_eq!(text.food_id, number.food_id);
        assert_eq!(number.food_id.as_str(), "17");
    }

    #[test]
    fn negative_calories_are_rejected() {
        let result: std::result::Result<Dish, _> = serde_json::from_str(
            r#"{"food_id":"1","food_name":"x","similarity_score":0.5,
                "cuisine_type":"y","food_calories_per_serving":-10,
                "food_description":"z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn score_validity_excludes_out_of_range_and_nan() {
        assert!(sample_dish("1", "a", 0.0).has_valid_score());
        assert!(sample_dish("1", "a", 1.0).has_valid_score());
        assert!(!sample_dish("1", "a", 1.2).has_valid_score());
        assert!(!sample_dish("1", "a", -0.1).has_valid_score());
        assert!(!sample_dish("1", "a", f64::NAN).has_valid_score());
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(sample_dish("1", "a", 0.7).score_band(), ScoreBand::High);
        assert_eq!(sample_dish("1", "a", 0.45).score_band(), ScoreBand::Medium);
        assert_eq!(sample_dish("1", "a", 0.44).score_band(), ScoreBand::Low);

        let mut dish = sample_dish("1", "a", 0.5);
        dish.food_calories_per_serving = 200;
        assert_eq!(dish.calorie_band(), CalorieBand::Low);
        dish.food_calories_per_serving = 500;
        assert_eq!(dish.calorie_band(), CalorieBand::Medium);
        dish.food_calories_per_serving = 501;
        assert_eq!(dish.calorie_band().label(), "High cal");
    }

    #[test]
    fn score_percent_rounds() {
        assert_eq!(sample_dish("1", "a", 0.834).score_percent(), 83);
        assert_eq!(sample_dish("1", "a", 0.835_1).score_percent(), 84);
        assert_eq!(sample_dish("1", "a", 1.0).score_percent(), 100);
    }
}
