// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Eco Shock Survey Engine - Boundary Errors

//! The metrics pipeline itself is total. Errors only arise where data
//! crosses into or out of the engine.

use wasm_bindgen::JsValue;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid survey rows: {0}")]
    InvalidRows(String),

    #[error("invalid metrics config: {0}")]
    InvalidConfigShape(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize metrics: {0}")]
    Serialize(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
