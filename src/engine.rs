// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Metrics Pipeline

//! rows → classify → aggregate → {composite, shock} → critical fact.
//!
//! Every call recomputes from scratch; the engine holds only its immutable
//! rule table and configuration.

use tracing::debug;

use crate::aggregator::aggregate;
use crate::classifier::classify_all;
use crate::composite::compute_composite;
use crate::config::{ConfigError, MetricsConfig};
use crate::critical::select_critical_fact;
use crate::rules::RuleSet;
use crate::shock::compute_shock;
use crate::types::{MetricsResult, SurveyResponse};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsEngine {
    rules: RuleSet,
    config: MetricsConfig,
}

impl MetricsEngine {
    /// Engine with the canonical rule table and a validated configuration.
    pub fn new(config: MetricsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { rules: RuleSet::canonical(), config })
    }

    /// Swap in a different rule table, e.g. to audit a single rule.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    pub fn run(&self, rows: &[SurveyResponse]) -> MetricsResult {
        let classifications = classify_all(rows, &self.rules);
        let percentages = aggregate(&classifications);
        let composite = compute_composite(&percentages, &self.config.composite);
        let shock = compute_shock(rows, &self.config.shock);
        let critical_fact = select_critical_fact(&percentages);

        debug!(
            respondents = rows.len(),
            eco_score = composite.eco_score,
            action_gap = composite.action_gap,
            yearly_units = shock.yearly_units,
            critical = %critical_fact.behavior,
            "computed survey metrics"
        );

        MetricsResult {
            respondents: rows.len(),
            percentages,
            composite,
            shock,
            critical_fact,
        }
    }
}

/// Metrics for `rows` under the default configuration.
pub fn compute(rows: &[SurveyResponse]) -> MetricsResult {
    MetricsEngine::default().run(rows)
}

/// Metrics for `rows` under `config`, rejected if the config is invalid.
pub fn compute_with(
    rows: &[SurveyResponse],
    config: &MetricsConfig,
) -> Result<MetricsResult, ConfigError> {
    Ok(MetricsEngine::new(config.clone())?.run(rows))
}
