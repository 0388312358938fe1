// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine

pub mod types;
pub mod config;
pub mod rules;
pub mod classifier;
pub mod aggregator;
pub mod composite;
pub mod shock;
pub mod critical;
pub mod headers;
pub mod engine;
pub mod error;

pub use types::*;
pub use config::{CompositeConfig, ConfigError, MetricsConfig, ShockConfig};
pub use engine::{compute, compute_with, MetricsEngine};
pub use error::EngineError;
pub use rules::{ClassificationRule, Matcher, RuleSet};
pub use shock::UsageBucket;

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// Plain objects and arrays rather than ES `Map`s, so the dashboard can read
/// `result.percentages.leavePlastic` directly.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, EngineError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| EngineError::Serialize(e.to_string()))
}

fn report(err: EngineError) -> JsValue {
    tracing::warn!(error = %err, "metrics request rejected");
    log(&format!("eco-shock-engine: {}", err));
    err.into()
}

/// Metrics for an array of `{Q1: "...", ..., Q11: "..."}` rows.
#[wasm_bindgen]
pub fn compute_metrics(rows: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let rows: Vec<SurveyResponse> = serde_wasm_bindgen::from_value(rows)
        .map_err(|e| report(EngineError::InvalidRows(e.to_string())))?;
    to_js(&compute(&rows)).map_err(report)
}

/// Metrics for rows keyed by the survey sheet's literal column headers.
#[wasm_bindgen]
pub fn compute_metrics_from_records(records: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let records: Vec<HashMap<String, Value>> = serde_wasm_bindgen::from_value(records)
        .map_err(|e| report(EngineError::InvalidRows(e.to_string())))?;
    let rows: Vec<SurveyResponse> = records.iter().map(SurveyResponse::from_record).collect();
    to_js(&compute(&rows)).map_err(report)
}

/// Metrics under an overridden configuration (missing fields keep defaults).
#[wasm_bindgen]
pub fn compute_metrics_with_config(rows: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let rows: Vec<SurveyResponse> = serde_wasm_bindgen::from_value(rows)
        .map_err(|e| report(EngineError::InvalidRows(e.to_string())))?;
    let config: MetricsConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| report(EngineError::InvalidConfigShape(e.to_string())))?;
    let result = compute_with(&rows, &config).map_err(|e| report(e.into()))?;
    to_js(&result).map_err(report)
}

#[derive(Serialize)]
struct BehaviorInfo {
    key: &'static str,
    label: &'static str,
}

/// Stable behavior keys with their card titles, in display order.
#[wasm_bindgen]
pub fn behavior_labels() -> Result<JsValue, JsValue> {
    let labels: Vec<BehaviorInfo> = Behavior::ALL
        .iter()
        .map(|b| BehaviorInfo { key: b.key(), label: b.label() })
        .collect();
    to_js(&labels).map_err(report)
}
