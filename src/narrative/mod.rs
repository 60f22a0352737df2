//! Humorous result narratives.
//!
//! Variant choice is keyed off the hex tail of the result id, so re-rendering
//! the same stored result always shows the same text.

pub mod lines;
pub mod share;

use serde::Serialize;

use crate::core::ScoreResult;

pub use share::{share_text, share_with_fallback, ShareChannel, ShareOutcome};

/// Rendered ten-year prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub title: String,
    pub lifestyle: String,
    pub prediction: String,
}

/// Everything the results view shows besides the numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub headline: String,
    pub roast: Vec<String>,
    pub prediction: Prediction,
}

impl Narrative {
    pub fn for_result(result: &ScoreResult) -> Self {
        let tail = hex_window(&result.id, 2, 0);

        let headlines = lines::mocking_lines(result.outcome);
        let headline = headlines[tail.map_or(0, |v| v as usize % headlines.len())];

        let roasts = lines::roast_sets(result.outcome);
        let roast = roasts[tail.map_or(0, |v| v as usize % roasts.len())];

        let predictions = lines::predictions(result.outcome);
        let pick = hex_window(&result.id, 3, 1).map_or(0, |v| v as usize % predictions.len());
        let template = &predictions[pick];

        Self {
            headline: fill(headline, result),
            roast: roast.iter().map(|line| fill(line, result)).collect(),
            prediction: Prediction {
                title: template.title.to_string(),
                lifestyle: fill(template.lifestyle, result),
                prediction: fill(template.prediction, result),
            },
        }
    }
}

/// Parse the characters between `from_end` and `to_end` positions from the
/// end of `id` as hex (`hex_window(id, 2, 0)` is the last two characters)
fn hex_window(id: &str, from_end: usize, to_end: usize) -> Option<u32> {
    let chars: Vec<char> = id.chars().collect();
    if from_end > chars.len() || to_end >= from_end {
        return None;
    }
    let window: String = chars[chars.len() - from_end..chars.len() - to_end].iter().collect();
    u32::from_str_radix(&window, 16).ok()
}

fn fill(template: &str, result: &ScoreResult) -> String {
    template
        .replace("{name1}", &result.name1)
        .replace("{name2}", &result.name2)
        .replace("{pct}", &result.primary_percentage.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::core::{Breakdown, OutcomeCategory};

    fn result(outcome: OutcomeCategory, id: &str) -> ScoreResult {
        let mut values = [15u8; 6];
        values[outcome.index()] = 88;
        ScoreResult::from_breakdown("Alice", "Bob", Breakdown::from_array(values), Utc::now(), id)
    }

    #[test]
    fn test_hex_window() {
        assert_eq!(hex_window("123_0000abcf", 2, 0), Some(0xcf));
        assert_eq!(hex_window("123_0000abcf", 3, 1), Some(0xbc));
        assert_eq!(hex_window("x", 2, 0), None);
        assert_eq!(hex_window("123_zz", 2, 0), None);
    }

    #[test]
    fn test_variant_selection() {
        // 0x07 % 5 = 2 → third headline
        let narrative = Narrative::for_result(&result(OutcomeCategory::Enemies, "1_00000007"));
        assert_eq!(
            narrative.headline,
            "Enemies detected! Even your WiFi would choose sides in this relationship! 📶💥"
        );

        // 0x00 → first prediction
        assert_eq!(narrative.prediction.title, "The Professional Arguers ⚔️");
    }

    #[test]
    fn test_placeholders_are_filled() {
        for outcome in OutcomeCategory::ALL {
            for suffix in 0..16u32 {
                let narrative = Narrative::for_result(&result(outcome, &format!("1_{:08x}", suffix * 17)));
                let all_text = format!(
                    "{} {} {} {}",
                    narrative.headline,
                    narrative.roast.join(" "),
                    narrative.prediction.lifestyle,
                    narrative.prediction.prediction
                );
                assert!(!all_text.contains('{'), "unfilled placeholder in: {}", all_text);
                assert!(!narrative.roast.is_empty());
            }
        }
    }

    #[test]
    fn test_stable_per_result() {
        let r = result(OutcomeCategory::Love, "1700000000000_0badc0de");
        assert_eq!(Narrative::for_result(&r), Narrative::for_result(&r));
    }

    #[test]
    fn test_unparseable_id_uses_first_variant() {
        let narrative = Narrative::for_result(&result(OutcomeCategory::Single, "legacy"));
        assert_eq!(
            narrative.headline,
            "🙋‍♀️ Alice is staying SINGLE! Bob would rather date their reflection! 🪞💔"
        );
    }
}
