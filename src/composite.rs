// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Composite Metric Calculator

//! Higher-order indices over the behavior percentages.
//!
//! ```text
//! eco_score        = round(0.7 * (100 - mean(NEGATIVE)) + 0.3 * mean(POSITIVE))
//! action_gap       = max(0, awareness - action)
//! negativity_index = round(mean(NEGATIVITY))
//! ```
//!
//! Arithmetic is exact (`rust_decimal`); rounding is half away from zero,
//! which equals half-up for the non-negative values seen here.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::config::CompositeConfig;
use crate::types::{Behavior, BehaviorPercentages, CompositeMetrics};

/// Behaviors that raise the eco score.
pub const POSITIVE_SET: [Behavior; 3] = [
    Behavior::CareAction,
    Behavior::GlobalAwareness,
    Behavior::Emotional,
];

/// Behaviors whose complement feeds the eco score.
pub const NEGATIVE_SET: [Behavior; 4] = [
    Behavior::LeavePlastic,
    Behavior::NoRecycle,
    Behavior::PlasticBags,
    Behavior::MedsTrash,
];

/// Attitude behaviors averaged into the negativity index.
pub const NEGATIVITY_SET: [Behavior; 3] = [
    Behavior::AccuseState,
    Behavior::Fatalisme,
    Behavior::SmallExcuses,
];

pub const AWARENESS: Behavior = Behavior::GlobalAwareness;
pub const ACTION: Behavior = Behavior::CareAction;

const HUNDRED: Decimal = dec!(100);

pub fn compute_composite(pcts: &BehaviorPercentages, config: &CompositeConfig) -> CompositeMetrics {
    let positivity_score = mean(pcts, &POSITIVE_SET);
    let negativity_score = mean(pcts, &NEGATIVE_SET);

    let raw = config.negative_complement_weight * (HUNDRED - negativity_score)
        + config.positive_weight * positivity_score;

    CompositeMetrics {
        eco_score: round_pct(raw),
        action_gap: pcts.get(AWARENESS).saturating_sub(pcts.get(ACTION)),
        negativity_index: round_pct(mean(pcts, &NEGATIVITY_SET)),
        positivity_score,
        negativity_score,
    }
}

/// Unrounded mean of the listed percentages.
pub fn mean(pcts: &BehaviorPercentages, members: &[Behavior]) -> Decimal {
    if members.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = members.iter().map(|b| Decimal::from(pcts.get(*b))).sum();
    sum / Decimal::from(members.len())
}

/// Round to an integer percentage clamped to `[0, 100]`.
fn round_pct(value: Decimal) -> u32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, HUNDRED)
        .to_u32()
        .unwrap_or(0)
}
