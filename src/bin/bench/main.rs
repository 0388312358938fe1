// Survey Metrics Bench Runner — seeded synthetic datasets, invariant checks
//
// Usage:
//   cargo run --release --bin bench                      # All scenarios (30 runs each)
//   cargo run --release --bin bench -- --runs 5          # Quick mode
//   cargo run --release --bin bench -- CAMPUS            # Filter by name
//   cargo run --release --bin bench -- --seed 42         # Custom base seed
//   cargo run --release --bin bench -- --json out.json   # Write JSON report

mod report;
mod scenarios;
mod monte_carlo;
mod synth;

use report::*;
use scenarios::*;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    json: Option<PathBuf>,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 30,
        seed: 0,
        json: None,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--json" => {
                i += 1;
                if i < args.len() {
                    cli.json = Some(PathBuf::from(&args[i]));
                }
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let all_scenarios = scenarios();

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    println!("\n  Survey Metrics Bench Runner v0.1.0");
    println!("  PRNG: ChaCha8Rng | Runs/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<28} {:>5} {:>9} {:>7} {:>10} {:>10}",
        "Scenario", "Pass%", "EcoScore", "Gap", "Bags/yr", "Time");
    println!("  {}", "-".repeat(76));

    let suite_start = Instant::now();
    let mut mc_reports = Vec::new();

    for scenario in &to_run {
        let report = monte_carlo::run_monte_carlo(scenario, cli.runs, cli.seed);
        let status = if report.pass_rate >= 1.0 { "PASS" } else { "FAIL" };

        println!("  {:<28} {:>4}% {:>9.1} {:>7.1} {:>10.0} {:>8.0}us  {}",
            report.label,
            (report.pass_rate * 100.0) as u32,
            report.eco_score.mean,
            report.action_gap.mean,
            report.yearly_units.mean,
            report.elapsed_us.mean,
            status,
        );

        for run in report.individual_runs.iter().filter(|r| !r.pass) {
            for v in &run.violations {
                eprintln!("    seed {}: {}", run.seed, v);
            }
        }

        mc_reports.push(report);
    }

    // ─── Summary ────────────────────────────────────────────────────────

    let total = mc_reports.len();
    let passed = mc_reports.iter().filter(|r| r.pass_rate >= 1.0).count();
    let failed = total - passed;

    println!("  {}", "-".repeat(76));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.1}s\n",
        total, passed, failed, suite_start.elapsed().as_secs_f64());

    if let Some(path) = &cli.json {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis().to_string())
            .unwrap_or_default();
        let report = BenchReport {
            timestamp,
            version: "0.1.0",
            prng: "ChaCha8Rng",
            n_runs_per_scenario: cli.runs,
            summary: Summary {
                total,
                passed,
                failed,
                pass_rate: passed as f64 / total as f64,
            },
            scenarios: mc_reports,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => println!("  Results saved to: {}\n", path.display()),
                Err(e) => eprintln!("  Failed to write {}: {}", path.display(), e),
            },
            Err(e) => eprintln!("  Failed to serialize report: {}", e),
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
