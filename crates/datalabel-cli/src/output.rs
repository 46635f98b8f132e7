//! Result rendering

use datalabel_sdk::{LabeledExample, LabelingResult};

/// Render a labeling result as text: one `label<TAB>text` line per row,
/// a summary line and the labeling log
pub fn render_result(result: &LabelingResult) -> String {
    let mut out = String::new();
    for LabeledExample(text, label) in &result.examples {
        out.push_str(&format!("{}\t{}\n", label.as_u8(), text));
    }
    out.push_str(&format!(
        "\n{} of {} rows matched\n",
        result.match_count(),
        result.len()
    ));
    if !result.raw_response.is_empty() {
        out.push_str("\nLog:\n");
        out.push_str(&result.raw_response);
        out.push('\n');
    }
    out
}

/// Render a labeling result as pretty JSON
pub fn render_json(result: &LabelingResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
