// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Shock Metric Extrapolator

//! Turns the weekly bag-usage answer (Q7) into yearly, lifetime and
//! decomposition-load estimates.
//!
//! ```text
//! avg      = sum(bucket weight) / N          (fallback when N = 0)
//! yearly   = round(avg * weeks_per_year)
//! lifetime = yearly * lifetime_multiplier
//! decomp   = lifetime * decomposition_years_per_unit
//! ```
//!
//! `yearly` is rounded from the exact rational `weeks * sum / N`, so no
//! floating-point drift can push a half-way value the wrong way.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ShockConfig;
use crate::types::{QuestionId, ShockMetrics, SurveyResponse};

/// Question carrying the weekly usage answer.
pub const USAGE_QUESTION: QuestionId = QuestionId::Q7;

// ---------------------------------------------------------------------------
// UsageBucket
// ---------------------------------------------------------------------------

/// Weekly bag-usage bucket, ordered by assumed bags per week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum UsageBucket {
    OneToThree,
    /// Empty or unrecognised answer.
    Unreported,
    FourToSeven,
    EightToTen,
    MoreThanTen,
}

/// Buckets in match priority. "أكثر من 10" also contains "1" and "10", so the
/// heavier buckets must be tried first.
const MATCH_ORDER: [(UsageBucket, &[&str]); 4] = [
    (UsageBucket::MoreThanTen, &["أكثر"]),
    (UsageBucket::EightToTen, &["8", "10"]),
    (UsageBucket::FourToSeven, &["4", "7"]),
    (UsageBucket::OneToThree, &["1", "3"]),
];

impl UsageBucket {
    pub const ALL: [UsageBucket; 5] = [
        Self::OneToThree,
        Self::Unreported,
        Self::FourToSeven,
        Self::EightToTen,
        Self::MoreThanTen,
    ];

    /// Classify an answer. Never fails: anything unrecognised is `Unreported`.
    pub fn classify(answer: &str) -> Self {
        if answer.is_empty() {
            return Self::Unreported;
        }
        MATCH_ORDER
            .iter()
            .find(|(_, fragments)| fragments.iter().any(|f| answer.contains(f)))
            .map(|(bucket, _)| *bucket)
            .unwrap_or(Self::Unreported)
    }

    /// Assumed bags per week for this bucket.
    pub fn weight(&self, config: &ShockConfig) -> u32 {
        match self {
            Self::OneToThree => config.one_to_three,
            Self::Unreported => config.unreported,
            Self::FourToSeven => config.four_to_seven,
            Self::EightToTen => config.eight_to_ten,
            Self::MoreThanTen => config.more_than_ten,
        }
    }
}

// ---------------------------------------------------------------------------
// Extrapolation
// ---------------------------------------------------------------------------

pub fn compute_shock(rows: &[SurveyResponse], config: &ShockConfig) -> ShockMetrics {
    let total_weight: u64 = rows
        .iter()
        .map(|row| UsageBucket::classify(row.answer(USAGE_QUESTION)).weight(config) as u64)
        .sum();
    extrapolate(total_weight, rows.len() as u64, config)
}

/// Apply the multiplier chain to a summed weekly weight over `respondents`.
pub fn extrapolate(total_weight: u64, respondents: u64, config: &ShockConfig) -> ShockMetrics {
    let (numerator, denominator) = if respondents == 0 {
        (config.fallback_avg_per_week as u64, 1)
    } else {
        (total_weight, respondents)
    };

    let yearly_units = round_div(numerator.saturating_mul(config.weeks_per_year), denominator);
    let lifetime_units = yearly_units.saturating_mul(config.lifetime_multiplier);
    let decomposition_years = lifetime_units.saturating_mul(config.decomposition_years_per_unit);

    ShockMetrics {
        avg_bags_per_week: Decimal::from(numerator) / Decimal::from(denominator),
        yearly_units,
        lifetime_units,
        decomposition_years,
    }
}

/// `round(n / d)` half-up for non-negative integers, `d > 0`.
fn round_div(n: u64, d: u64) -> u64 {
    n / d + u64::from(n % d >= d - n % d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(answer: &str) -> SurveyResponse {
        SurveyResponse::new().with(USAGE_QUESTION, answer)
    }

    #[test]
    fn test_bucket_priority() {
        assert_eq!(UsageBucket::classify("أكثر من 10"), UsageBucket::MoreThanTen);
        assert_eq!(UsageBucket::classify("8-10"), UsageBucket::EightToTen);
        assert_eq!(UsageBucket::classify("4-7"), UsageBucket::FourToSeven);
        assert_eq!(UsageBucket::classify("1-3"), UsageBucket::OneToThree);
        assert_eq!(UsageBucket::classify(""), UsageBucket::Unreported);
        assert_eq!(UsageBucket::classify("ما نعرفش"), UsageBucket::Unreported);
    }

    #[test]
    fn test_buckets_ordered_by_weight() {
        let cfg = ShockConfig::default();
        let weights: Vec<u32> = UsageBucket::ALL.iter().map(|b| b.weight(&cfg)).collect();
        assert_eq!(weights, vec![2, 3, 6, 9, 15]);
        assert!(UsageBucket::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unmatched_does_not_fall_to_zero() {
        let shock = compute_shock(&[usage("???")], &ShockConfig::default());
        assert_eq!(shock.yearly_units, 3 * 52);
    }

    #[test]
    fn test_zero_respondents_uses_fallback() {
        let shock = compute_shock(&[], &ShockConfig::default());
        assert_eq!(shock.avg_bags_per_week, Decimal::from(3));
        assert_eq!(shock.yearly_units, 156);
        assert_eq!(shock.lifetime_units, 156 * 60);
        assert_eq!(shock.decomposition_years, 156 * 60 * 450);
    }

    #[test]
    fn test_all_heaviest_bucket() {
        let rows: Vec<SurveyResponse> = (0..10).map(|_| usage("أكثر من 10")).collect();
        let shock = compute_shock(&rows, &ShockConfig::default());
        assert_eq!(shock.yearly_units, 15 * 52);
        assert_eq!(shock.lifetime_units, 780 * 60);
        assert_eq!(shock.decomposition_years, 780 * 60 * 450);
    }

    #[test]
    fn test_mixed_average_rounds_yearly() {
        // (2 + 6 + 9) / 3 = 5.667 -> 5.667 * 52 = 294.67 -> 295
        let rows = vec![usage("1-3"), usage("4-7"), usage("8-10")];
        let shock = compute_shock(&rows, &ShockConfig::default());
        assert_eq!(shock.yearly_units, 295);
        assert_eq!(shock.lifetime_units, 295 * 60);
    }

    #[test]
    fn test_round_div_half_up() {
        assert_eq!(round_div(5, 2), 3);
        assert_eq!(round_div(4, 3), 1);
        assert_eq!(round_div(5, 3), 2);
        assert_eq!(round_div(0, 7), 0);
        assert_eq!(round_div(6, 3), 2);
    }
}
