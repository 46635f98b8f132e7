//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use datalabel_sdk::{
    EngineConfig, InMemoryDatasetStore, LabelingEngine, LabelingEngineBuilder, MockProvider,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Serialize rows in the "split" layout used for inline datasets
pub fn split_payload(columns: &[&str], rows: Vec<Vec<Value>>) -> String {
    json!({
        "columns": columns,
        "index": (0..rows.len()).collect::<Vec<_>>(),
        "data": rows,
    })
    .to_string()
}

/// Single `text` column holding `values`
pub fn text_payload(values: &[&str]) -> String {
    split_payload(&["text"], values.iter().map(|v| vec![json!(v)]).collect())
}

/// Single `text` column with `n` generated rows ("row 0", "row 1", ...)
pub fn numbered_payload(n: usize) -> String {
    split_payload(
        &["text"],
        (0..n).map(|i| vec![json!(format!("row {}", i))]).collect(),
    )
}

/// Engine backed by `provider` with no active dataset
pub fn engine_with(provider: Arc<MockProvider>) -> LabelingEngine {
    LabelingEngineBuilder::new()
        .with_client(provider)
        .build()
        .expect("engine should build")
}

/// Engine backed by `provider` that resolves active datasets from `store`
pub fn engine_with_store(
    provider: Arc<MockProvider>,
    store: Arc<InMemoryDatasetStore>,
) -> LabelingEngine {
    LabelingEngineBuilder::new()
        .with_config(EngineConfig::default())
        .with_client(provider)
        .with_resolver(store)
        .build()
        .expect("engine should build")
}
