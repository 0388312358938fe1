// Monte Carlo Infrastructure — N seeded datasets per scenario
// Each run computes metrics twice and checks the engine's invariants

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use eco_shock_engine::*;
use eco_shock_engine::critical::CANDIDATES;

use crate::report::*;
use crate::scenarios::Scenario;
use crate::synth::SurveyGenerator;

use std::time::Instant;

const LIFETIME: u64 = eco_shock_engine::config::LIFETIME_MULTIPLIER;

/// Invariant violations for one dataset/result pair. Empty means pass.
pub fn check_invariants(
    rows: &[SurveyResponse],
    result: &MetricsResult,
    rerun: &MetricsResult,
) -> Vec<String> {
    let mut violations = Vec::new();

    for (behavior, pct) in result.percentages.iter() {
        if pct > 100 {
            violations.push(format!("{} out of range: {}", behavior, pct));
        }
        if rows.is_empty() && pct != 0 {
            violations.push(format!("{} non-zero on empty dataset", behavior));
        }
    }

    let aware = result.percentages.get(Behavior::GlobalAwareness);
    let action = result.percentages.get(Behavior::CareAction);
    if result.composite.action_gap != aware.saturating_sub(action) {
        violations.push(format!("action gap {} != max(0, {} - {})", result.composite.action_gap, aware, action));
    }

    let top = CANDIDATES
        .iter()
        .map(|c| result.percentages.get(c.behavior))
        .max()
        .unwrap_or(0);
    if result.critical_fact.percentage != top {
        violations.push(format!("critical fact {}% is not the maximum {}%", result.critical_fact.percentage, top));
    }

    let shock = &result.shock;
    if shock.lifetime_units != shock.yearly_units * LIFETIME {
        violations.push("lifetime units break the multiplier chain".to_string());
    }

    if result != rerun {
        violations.push("compute is not idempotent".to_string());
    }

    violations
}

/// Run a single scenario iteration with a specific seed.
pub fn run_single(scenario: &Scenario, seed: u64) -> BenchResult {
    let rng = ChaCha8Rng::seed_from_u64(seed);
    let mut generator = SurveyGenerator::new(rng, scenario.bias, scenario.blank_rate);
    let rows = generator.dataset(scenario.respondents);

    let start = Instant::now();
    let result = compute(&rows);
    let elapsed_us = start.elapsed().as_micros();
    let rerun = compute(&rows);

    let violations = check_invariants(&rows, &result, &rerun);

    BenchResult {
        scenario: scenario.name.to_string(),
        seed,
        pass: violations.is_empty(),
        violations,
        respondents: result.respondents,
        eco_score: result.composite.eco_score,
        action_gap: result.composite.action_gap,
        negativity_index: result.composite.negativity_index,
        yearly_units: result.shock.yearly_units,
        critical_behavior: result.critical_fact.behavior.to_string(),
        elapsed_us,
    }
}

/// Run N iterations of a scenario with seeds base_seed..base_seed+N.
pub fn run_monte_carlo(scenario: &Scenario, n_runs: usize, base_seed: u64) -> MonteCarloReport {
    let runs: Vec<BenchResult> = (0..n_runs as u64)
        .map(|i| run_single(scenario, base_seed + i))
        .collect();

    let passes = runs.iter().filter(|r| r.pass).count();
    let collect = |f: fn(&BenchResult) -> f64| -> Stats {
        Stats::from_samples(&runs.iter().map(f).collect::<Vec<_>>())
    };

    MonteCarloReport {
        scenario_name: scenario.name.to_string(),
        label: scenario.label.to_string(),
        n_runs,
        pass_rate: if n_runs > 0 { passes as f64 / n_runs as f64 } else { 0.0 },
        eco_score: collect(|r| r.eco_score as f64),
        action_gap: collect(|r| r.action_gap as f64),
        yearly_units: collect(|r| r.yearly_units as f64),
        elapsed_us: collect(|r| r.elapsed_us as f64),
        individual_runs: runs,
    }
}
