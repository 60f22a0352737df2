use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::OutcomeCategory;

/// Lowest percentage a category can receive
pub const MIN_PERCENTAGE: u8 = 10;

/// Highest percentage a category can receive
pub const MAX_PERCENTAGE: u8 = 92;

/// Opaque reference to an uploaded image (usually a data URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Percentage for every outcome category
///
/// Serialized as an object keyed by category label, one field per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Breakdown {
    pub friends: u8,
    pub love: u8,
    pub affection: u8,
    pub marriage: u8,
    pub enemies: u8,
    pub single: u8,
}

impl Breakdown {
    /// Build from percentages in canonical category order
    pub fn from_array(values: [u8; OutcomeCategory::COUNT]) -> Self {
        let [friends, love, affection, marriage, enemies, single] = values;
        Self {
            friends,
            love,
            affection,
            marriage,
            enemies,
            single,
        }
    }

    /// Percentages in canonical category order
    pub fn to_array(&self) -> [u8; OutcomeCategory::COUNT] {
        [
            self.friends,
            self.love,
            self.affection,
            self.marriage,
            self.enemies,
            self.single,
        ]
    }

    pub fn get(&self, category: OutcomeCategory) -> u8 {
        match category {
            OutcomeCategory::Friends => self.friends,
            OutcomeCategory::Love => self.love,
            OutcomeCategory::Affection => self.affection,
            OutcomeCategory::Marriage => self.marriage,
            OutcomeCategory::Enemies => self.enemies,
            OutcomeCategory::Single => self.single,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (OutcomeCategory, u8)> + '_ {
        OutcomeCategory::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Highest-scoring category; ties go to the earliest in canonical order
    pub fn arg_max(&self) -> (OutcomeCategory, u8) {
        let mut best = (OutcomeCategory::Friends, self.friends);
        for (category, value) in self.iter().skip(1) {
            if value > best.1 {
                best = (category, value);
            }
        }
        best
    }

    /// Whether every value sits inside the allowed percentage range
    pub fn is_in_range(&self) -> bool {
        self.iter()
            .all(|(_, v)| (MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&v))
    }
}

/// Output of one compatibility scoring call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub name1: String,
    pub name2: String,

    /// Winning category (arg-max of the breakdown)
    pub outcome: OutcomeCategory,

    /// Percentage of the winning category
    pub primary_percentage: u8,

    pub breakdown: Breakdown,

    #[serde(default)]
    pub photo1: Option<ImageRef>,

    #[serde(default)]
    pub photo2: Option<ImageRef>,

    pub created_at: DateTime<Utc>,

    /// Unique token, also used to pick narrative variants
    pub id: String,
}

impl ScoreResult {
    /// Assemble a result, deriving the outcome from the breakdown
    pub fn from_breakdown(
        name1: impl Into<String>,
        name2: impl Into<String>,
        breakdown: Breakdown,
        created_at: DateTime<Utc>,
        id: impl Into<String>,
    ) -> Self {
        let (outcome, primary_percentage) = breakdown.arg_max();
        Self {
            name1: name1.into(),
            name2: name2.into(),
            outcome,
            primary_percentage,
            breakdown,
            photo1: None,
            photo2: None,
            created_at,
            id: id.into(),
        }
    }

    /// Attach the two optional photos
    pub fn with_photos(mut self, photo1: Option<ImageRef>, photo2: Option<ImageRef>) -> Self {
        self.photo1 = photo1;
        self.photo2 = photo2;
        self
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!(
            "{} & {} → {} {}%",
            self.name1, self.name2, self.outcome, self.primary_percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_max_first_occurrence_wins_ties() {
        let breakdown = Breakdown::from_array([40, 77, 12, 77, 30, 77]);
        assert_eq!(breakdown.arg_max(), (OutcomeCategory::Love, 77));

        let flat = Breakdown::from_array([50; 6]);
        assert_eq!(flat.arg_max(), (OutcomeCategory::Friends, 50));

        let last = Breakdown::from_array([10, 10, 10, 10, 10, 11]);
        assert_eq!(last.arg_max(), (OutcomeCategory::Single, 11));
    }

    #[test]
    fn test_from_breakdown_sets_outcome() {
        let breakdown = Breakdown::from_array([20, 30, 40, 50, 92, 10]);
        let result = ScoreResult::from_breakdown("Alice", "Bob", breakdown, Utc::now(), "1_ab");

        assert_eq!(result.outcome, OutcomeCategory::Enemies);
        assert_eq!(result.primary_percentage, 92);
        assert_eq!(result.breakdown.get(result.outcome), result.primary_percentage);
    }

    #[test]
    fn test_range_check() {
        assert!(Breakdown::from_array([10, 92, 50, 50, 50, 50]).is_in_range());
        assert!(!Breakdown::from_array([9, 50, 50, 50, 50, 50]).is_in_range());
        assert!(!Breakdown::from_array([50, 50, 50, 50, 50, 93]).is_in_range());
    }

    #[test]
    fn test_serialized_shape() {
        let breakdown = Breakdown::from_array([11, 22, 33, 44, 55, 66]);
        let result = ScoreResult::from_breakdown("A", "B", breakdown, Utc::now(), "x")
            .with_photos(Some(ImageRef::new("data:image/png;base64,AAA")), None);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["outcome"], "Single");
        assert_eq!(value["primaryPercentage"], 66);
        assert_eq!(value["breakdown"]["Marriage"], 44);
        assert_eq!(value["photo1"], "data:image/png;base64,AAA");
        assert!(value["photo2"].is_null());
    }
}
