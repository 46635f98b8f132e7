//! Dataset file loading

use anyhow::Context;
use datalabel_core::Dataset;
use std::fs;
use std::path::Path;

/// Load a dataset file
///
/// Accepts the "split" JSON layout (`columns`/`index`/`data`) or a plain
/// `{"columns": [...], "rows": [[...]]}` object. Returns the dataset with the
/// name it is stored under (the file stem).
pub fn load_dataset(path: &Path) -> anyhow::Result<(String, Dataset)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {}", path.display()))?;

    let dataset = match Dataset::from_split_json(&content) {
        Ok(dataset) => dataset,
        // A file carrying `data` is in the split layout; its error is final.
        Err(split_err) if has_data_key(&content) => {
            anyhow::bail!("Invalid dataset file {}: {}", path.display(), split_err)
        }
        Err(split_err) => serde_json::from_str::<Dataset>(&content).map_err(|_| {
            anyhow::anyhow!("Invalid dataset file {}: {}", path.display(), split_err)
        })?,
    };

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());

    tracing::info!(
        "Loaded dataset '{}': {} rows, {} columns",
        name,
        dataset.len(),
        dataset.columns().len()
    );

    Ok((name, dataset))
}

fn has_data_key(content: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(content)
        .map(|value| value.get("data").is_some())
        .unwrap_or(false)
}
