//! Search narrowing filters.
//!
//! The filter set holds the raw text the user typed; coercion to wire values
//! happens when a search payload is built. The result count is a closed enum so
//! an out-of-range value cannot be represented.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of matches requested from the search endpoint.
///
/// Serializes as the bare number (`3`, `5`, `8` or `10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ResultCount {
    Three,
    #[default]
    Five,
    Eight,
    Ten,
}

impl ResultCount {
    /// All selectable counts in display order.
    pub const ALL: [Self; 4] = [Self::Three, Self::Five, Self::Eight, Self::Ten];

    /// Numeric value sent on the wire.
    #[must_use]
    pub const fn get(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Five => 5,
            Self::Eight => 8,
            Self::Ten => 10,
        }
    }

    /// Next larger count, wrapping from 10 back to 3.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Three => Self::Five,
            Self::Five => Self::Eight,
            Self::Eight => Self::Ten,
            Self::Ten => Self::Three,
        }
    }

    /// Next smaller count, wrapping from 3 back to 10.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Three => Self::Ten,
            Self::Five => Self::Three,
            Self::Eight => Self::Five,
            Self::Ten => Self::Eight,
        }
    }
}

impl TryFrom<u8> for ResultCount {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            5 => Ok(Self::Five),
            8 => Ok(Self::Eight),
            10 => Ok(Self::Ten),
            other => Err(format!("unsupported result count {other}, expected 3, 5, 8 or 10")),
        }
    }
}

impl From<ResultCount> for u8 {
    fn from(count: ResultCount) -> Self {
        count.get()
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Editable filter fields, addressed by [`FilterSet::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Cuisine(String),
    MaxCalories(String),
    ResultCount(ResultCount),
}

/// Filters applied to structured searches.
///
/// Kept while the user is in chat mode so switching back restores them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    /// Free-text cuisine narrowing, as typed.
    pub cuisine_filter: String,

    /// Calorie ceiling, as typed. Coerced by [`FilterSet::max_calories`].
    pub max_calories: String,

    /// Number of matches to request.
    pub n_results: ResultCount,
}

impl FilterSet {
    /// Applies one field update, returning `true` if the value changed.
    pub fn set(&mut self, value: FilterValue) -> bool {
        match value {
            FilterValue::Cuisine(text) => replace_if_changed(&mut self.cuisine_filter, text),
            FilterValue::MaxCalories(text) => replace_if_changed(&mut self.max_calories, text),
            FilterValue::ResultCount(count) => replace_if_changed(&mut self.n_results, count),
        }
    }

    /// Trimmed cuisine filter, or `None` when blank.
    #[must_use]
    pub fn cuisine(&self) -> Option<&str> {
        let trimmed = self.cuisine_filter.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Calorie ceiling coerced from the typed text.
    ///
    /// Fails closed: empty, non-numeric, non-finite, negative or out-of-range
    /// input yields `None`. Fractional input is truncated to whole calories.
    ///
    /// ```
    /// use savory::domain::FilterSet;
    ///
    /// let mut filters = FilterSet::default();
    /// filters.max_calories = " 300 ".to_string();
    /// assert_eq!(filters.max_calories(), Some(300));
    ///
    /// filters.max_calories = "lots".to_string();
    /// assert_eq!(filters.max_calories(), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn max_calories(&self) -> Option<u32> {
        let trimmed = self.max_calories.trim();
        if trimmed.is_empty() {
            return None;
        }

        let value = trimmed.parse::<f64>().ok()?;
        if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
            tracing::debug!(raw = %trimmed, "max calories outside accepted range, ignoring");
            return None;
        }

        Some(value.trunc() as u32)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_count_accepts_only_menu_values() {
        for n in [3u8, 5, 8, 10] {
            assert_eq!(ResultCount::try_from(n).map(u8::from), Ok(n));
        }
        for n in [0u8, 1, 4, 6, 11, 255] {
            assert!(ResultCount::try_from(n).is_err());
        }
    }

    #[test]
    fn result_count_cycles_in_both_directions() {
        let mut count = ResultCount::default();
        assert_eq!(count, ResultCount::Five);
        let mut seen = vec![];
        for _ in 0..4 {
            count = count.next();
            seen.push(count.get());
        }
        assert_eq!(seen, vec![8, 10, 3, 5]);
        assert_eq!(ResultCount::Three.prev(), ResultCount::Ten);
    }

    #[test]
    fn result_count_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ResultCount::Eight).unwrap(), "8");
        assert!(serde_json::from_str::<ResultCount>("7").is_err());
    }

    #[test]
    fn cuisine_is_trimmed_and_blank_is_absent() {
        let mut filters = FilterSet::default();
        assert_eq!(filters.cuisine(), None);
        filters.cuisine_filter = "   ".to_string();
        assert_eq!(filters.cuisine(), None);
        filters.cuisine_filter = "  Thai ".to_string();
        assert_eq!(filters.cuisine(), Some("Thai"));
    }

    #[test]
    fn max_calories_fails_closed() {
        let mut filters = FilterSet::default();
        let cases = [
            ("", None),
            ("   ", None),
            ("300", Some(300)),
            ("0", Some(0)),
            ("250.9", Some(250)),
            ("1e3", Some(1000)),
            ("-5", None),
            ("abc", None),
            ("12abc", None),
            ("NaN", None),
            ("inf", None),
            ("99999999999", None),
        ];
        for (raw, expected) in cases {
            filters.max_calories = raw.to_string();
            assert_eq!(filters.max_calories(), expected, "input {raw:?}");
        }
    }

    #[test]
    fn set_reports_changes_only() {
        let mut filters = FilterSet::default();
        assert!(filters.set(FilterValue::Cuisine("Thai".into())));
        assert!(!filters.set(FilterValue::Cuisine("Thai".into())));
        assert!(filters.set(FilterValue::ResultCount(ResultCount::Ten)));
        assert!(!filters.set(FilterValue::ResultCount(ResultCount::Ten)));
        assert!(filters.set(FilterValue::MaxCalories("300".into())));
        assert_eq!(filters.n_results, ResultCount::Ten);
    }
}
