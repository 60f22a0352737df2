use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};

use crate::core::{Breakdown, OutcomeCategory, ScoreResult, MAX_PERCENTAGE, MIN_PERCENTAGE};
use crate::scoring::letters::{leftover_count, normalize_name};
use crate::scoring::Scorer;

/// FLAMES scorer with per-call randomization.
///
/// Every category percentage blends a wall-clock wave, a random wave, a
/// name-derived wave, pure noise and a name-length bonus, each with freshly
/// drawn weights. Two calls with the same names almost never agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaosScorer;

impl ChaosScorer {
    pub fn new() -> Self {
        Self
    }
}

/// Name-derived inputs shared by every category
#[derive(Debug, Clone, Copy)]
struct NameTraits {
    len1: usize,
    len2: usize,
    leftover: usize,
}

/// Draws consumed for one category
#[derive(Debug, Clone, Copy)]
struct CategoryDraws {
    noise: f64,
    weights: [f64; 4],
    bonus_jitter: f64,
}

impl CategoryDraws {
    fn draw(rng: &mut dyn RngCore) -> Self {
        let noise = rng.gen::<f64>() * 40.0;
        let weights = [
            0.2 + rng.gen::<f64>() * 0.3,
            0.15 + rng.gen::<f64>() * 0.25,
            0.1 + rng.gen::<f64>() * 0.2,
            0.1 + rng.gen::<f64>() * 0.15,
        ];
        let bonus_jitter = rng.gen::<f64>() * 20.0;
        Self {
            noise,
            weights,
            bonus_jitter,
        }
    }
}

fn category_percentage(
    index: usize,
    traits: NameTraits,
    timestamp_ms: f64,
    random_seed: f64,
    draws: &CategoryDraws,
) -> u8 {
    let i = index as f64;
    let total_len = (traits.len1 + traits.len2) as f64;

    let time_wave = ((timestamp_ms + i * 7.3) * 0.001).sin().abs() * 100.0;
    let random_wave = ((random_seed + i * 5.7) * 0.9).cos().abs() * 100.0;
    let name_wave = ((traits.leftover as f64 + total_len + i * 3.1) * 1.4).sin().abs() * 100.0;

    let [w1, w2, w3, w4] = draws.weights;
    let combined = time_wave * w1 + random_wave * w2 + name_wave * w3 + draws.noise * w4;

    let length_bonus = (traits.len1 * traits.len2 * (index + 1)) % 35;
    let bonus = length_bonus as f64 + draws.bonus_jitter;

    clamp_percentage(combined + bonus)
}

/// Round to the nearest integer and clamp into `[MIN_PERCENTAGE, MAX_PERCENTAGE]`
pub fn clamp_percentage(raw: f64) -> u8 {
    if raw.is_nan() {
        return MIN_PERCENTAGE;
    }
    raw.round()
        .clamp(MIN_PERCENTAGE as f64, MAX_PERCENTAGE as f64) as u8
}

impl Scorer for ChaosScorer {
    fn score(
        &self,
        name1: &str,
        name2: &str,
        now: DateTime<Utc>,
        rng: &mut dyn RngCore,
    ) -> ScoreResult {
        let n1 = normalize_name(name1);
        let n2 = normalize_name(name2);
        let traits = NameTraits {
            len1: n1.chars().count(),
            len2: n2.chars().count(),
            leftover: leftover_count(&n1, &n2),
        };

        let timestamp_ms = now.timestamp_millis();
        let random_seed = rng.gen::<f64>() * 1000.0;

        let mut percentages = [MIN_PERCENTAGE; OutcomeCategory::COUNT];
        for (index, slot) in percentages.iter_mut().enumerate() {
            let draws = CategoryDraws::draw(rng);
            *slot = category_percentage(index, traits, timestamp_ms as f64, random_seed, &draws);
        }

        let id = format!("{}_{:08x}", timestamp_ms, (random_seed * 1_000_000.0) as u32);
        let result = ScoreResult::from_breakdown(
            name1.trim(),
            name2.trim(),
            Breakdown::from_array(percentages),
            now,
            id,
        );

        tracing::debug!(
            "Scored {} (leftover letters: {}, breakdown: {:?})",
            result.display(),
            traits.leftover,
            percentages
        );

        result
    }

    fn name(&self) -> &str {
        "chaos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn test_shape_invariants_hold_across_many_draws() {
        let scorer = ChaosScorer::new();
        let mut rng = StdRng::seed_from_u64(7);
        let pairs = [
            ("Alice", "Bob"),
            ("Anna", "ANNA "),
            ("x", "y"),
            ("Bartholomew Fitzgerald", "Maximiliana Oppenheimer"),
            ("Zoë", "Chloé"),
        ];

        for i in 0..500 {
            let (a, b) = pairs[i % pairs.len()];
            let result = scorer.score(a, b, at(1_700_000_000_000 + i as i64 * 997), &mut rng);

            assert!(result.breakdown.is_in_range(), "{:?}", result.breakdown);
            assert_eq!(result.breakdown.iter().count(), 6);
            assert_eq!(result.breakdown.arg_max(), (result.outcome, result.primary_percentage));
            assert!(result
                .breakdown
                .iter()
                .all(|(_, v)| v <= result.primary_percentage));
        }
    }

    #[test]
    fn test_same_draws_reproduce_result() {
        let scorer = ChaosScorer::new();
        let now = at(1_700_000_123_456);

        let first = scorer.score("Alice", "Bob", now, &mut StdRng::seed_from_u64(42));
        let second = scorer.score("Alice", "Bob", now, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_draws_can_disagree() {
        let scorer = ChaosScorer::new();
        let now = at(1_700_000_000_000);
        let mut rng = StdRng::seed_from_u64(1);

        let breakdowns: Vec<Breakdown> = (0..50)
            .map(|_| scorer.score("Alice", "Bob", now, &mut rng).breakdown)
            .collect();

        assert!(breakdowns.iter().any(|b| *b != breakdowns[0]));
    }

    #[test]
    fn test_result_metadata() {
        let scorer = ChaosScorer::new();
        let now = at(1_700_000_000_000);
        let result = scorer.score("  Alice ", "Bob", now, &mut StepRng::new(0, 0));

        assert_eq!(result.name1, "Alice");
        assert_eq!(result.name2, "Bob");
        assert_eq!(result.created_at, now);
        assert_eq!(result.id, "1700000000000_00000000");
        assert!(result.photo1.is_none() && result.photo2.is_none());
    }

    #[test]
    fn test_clamp_percentage() {
        assert_eq!(clamp_percentage(3.2), 10);
        assert_eq!(clamp_percentage(-40.0), 10);
        assert_eq!(clamp_percentage(47.5), 48);
        assert_eq!(clamp_percentage(91.6), 92);
        assert_eq!(clamp_percentage(184.0), 92);
        assert_eq!(clamp_percentage(f64::NAN), 10);
    }

    #[test]
    fn test_category_percentage_with_minimal_draws() {
        let traits = NameTraits {
            len1: 0,
            len2: 0,
            leftover: 0,
        };
        let draws = CategoryDraws {
            noise: 0.0,
            weights: [0.2, 0.15, 0.1, 0.1],
            bonus_jitter: 0.0,
        };

        // every wave is sin(0) except the random wave: |cos(0)| * 100 * 0.15 = 15
        assert_eq!(category_percentage(0, traits, 0.0, 0.0, &draws), 15);
    }

    #[test]
    fn test_category_percentage_saturates() {
        let traits = NameTraits {
            len1: 5,
            len2: 6,
            leftover: 3,
        };
        let draws = CategoryDraws {
            noise: 40.0,
            weights: [0.5, 0.4, 0.3, 0.25],
            bonus_jitter: 20.0,
        };

        // 30 % 35 = 30 length bonus + 20 jitter + 10 noise already reach 60,
        // and the waves at these inputs push it past the ceiling
        assert_eq!(category_percentage(0, traits, 1570.796, 0.0, &draws), 92);
    }
}
