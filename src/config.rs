// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Fixed Configuration Values

//! Constants behind the composite and shock figures.
//!
//! The dashboard always runs with [`MetricsConfig::default`]. Overrides are
//! accepted for what-if views but must pass [`MetricsConfig::validate`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Assumed bags per week for an answer no bucket recognises.
pub const UNREPORTED_BAGS_PER_WEEK: u32 = 3;
/// Average used when there are no respondents at all.
pub const FALLBACK_AVG_BAGS_PER_WEEK: u32 = 3;
pub const WEEKS_PER_YEAR: u64 = 52;
/// Years of bag use over a lifetime.
pub const LIFETIME_MULTIPLIER: u64 = 60;
/// Years a single plastic bag takes to decompose.
pub const DECOMPOSITION_YEARS_PER_UNIT: u64 = 450;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("composite weights must sum to 1 (got {negative} + {positive})")]
    WeightsNotNormalized { negative: Decimal, positive: Decimal },

    #[error("composite weight out of range: {0}")]
    WeightOutOfRange(Decimal),

    #[error("weeks per year must be non-zero")]
    ZeroWeeksPerYear,
}

// ---------------------------------------------------------------------------
// MetricsConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsConfig {
    pub composite: CompositeConfig,
    pub shock: ShockConfig,
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.composite.validate()?;
        self.shock.validate()
    }
}

// ---------------------------------------------------------------------------
// CompositeConfig
// ---------------------------------------------------------------------------

/// Weighting of the eco score: `negative * (100 - neg) + positive * pos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompositeConfig {
    #[serde(with = "rust_decimal::serde::float")]
    pub negative_complement_weight: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub positive_weight: Decimal,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            negative_complement_weight: dec!(0.7),
            positive_weight: dec!(0.3),
        }
    }
}

impl CompositeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for w in [self.negative_complement_weight, self.positive_weight] {
            if w.is_sign_negative() || w > Decimal::ONE {
                return Err(ConfigError::WeightOutOfRange(w));
            }
        }
        if self.negative_complement_weight + self.positive_weight != Decimal::ONE {
            return Err(ConfigError::WeightsNotNormalized {
                negative: self.negative_complement_weight,
                positive: self.positive_weight,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ShockConfig
// ---------------------------------------------------------------------------

/// Assumed bags/week per usage bucket plus the extrapolation chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShockConfig {
    pub one_to_three: u32,
    pub unreported: u32,
    pub four_to_seven: u32,
    pub eight_to_ten: u32,
    pub more_than_ten: u32,
    pub fallback_avg_per_week: u32,
    pub weeks_per_year: u64,
    pub lifetime_multiplier: u64,
    pub decomposition_years_per_unit: u64,
}

impl Default for ShockConfig {
    fn default() -> Self {
        Self {
            one_to_three: 2,
            unreported: UNREPORTED_BAGS_PER_WEEK,
            four_to_seven: 6,
            eight_to_ten: 9,
            more_than_ten: 15,
            fallback_avg_per_week: FALLBACK_AVG_BAGS_PER_WEEK,
            weeks_per_year: WEEKS_PER_YEAR,
            lifetime_multiplier: LIFETIME_MULTIPLIER,
            decomposition_years_per_unit: DECOMPOSITION_YEARS_PER_UNIT,
        }
    }
}

impl ShockConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weeks_per_year == 0 {
            return Err(ConfigError::ZeroWeeksPerYear);
        }
        Ok(())
    }
}
