// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Percentage Aggregator

use crate::types::{Behavior, BehaviorPercentages, Classification};

/// `round(100 * count / max(total, 1))`, half-up, computed in integers.
pub fn percentage(count: usize, total: usize) -> u32 {
    let total = total.max(1) as u64;
    let count = (count as u64).min(total);
    ((200 * count + total) / (2 * total)) as u32
}

/// Number of rows flagged for `behavior`.
pub fn count(rows: &[Classification], behavior: Behavior) -> usize {
    rows.iter().filter(|c| c.get(behavior)).count()
}

/// Percentage for every behavior over the same denominator.
pub fn aggregate(rows: &[Classification]) -> BehaviorPercentages {
    Behavior::ALL
        .iter()
        .map(|b| (*b, percentage(count(rows, *b), rows.len())))
        .collect()
}
