//! Verdict extraction from free-text model replies
//!
//! Models are asked to answer with one `N: LABEL` or `N: NO LABEL` line per
//! example, but replies routinely include chatter, other separators
//! (`1. LABEL`, `1 LABEL`), lower-case verdicts, reordered or missing lines,
//! and numbers that were never asked about. Extraction therefore scans for
//! every `<number><separators><verdict>` occurrence anywhere in the text:
//! - numbers are 1-based and local to the batch;
//! - numbers outside the batch are ignored;
//! - a later verdict for the same number overrides an earlier one;
//! - rows without a verdict keep their current label.

use datalabel_core::{Batch, Label, LabelVector};
use regex::Regex;
use std::sync::LazyLock;

static VERDICT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)[:.\s]+(LABEL|NO LABEL)").unwrap());

/// A verdict for one batch member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// 0-based index within the batch
    pub local_index: usize,
    pub label: Label,
}

/// Extract in-range verdicts in order of appearance
///
/// Duplicates are kept; applying them in order yields last-write-wins.
pub fn parse_verdicts(text: &str, batch_len: usize) -> Vec<Verdict> {
    VERDICT_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let number: usize = caps[1].parse().ok()?;
            let local_index = number.checked_sub(1)?;
            if local_index >= batch_len {
                return None;
            }
            let label = if caps[2].eq_ignore_ascii_case("LABEL") {
                Label::Match
            } else {
                Label::NoMatch
            };
            Some(Verdict { local_index, label })
        })
        .collect()
}

/// Apply a reply's verdicts for `batch` onto the global label vector
///
/// Returns the number of verdicts applied.
pub fn apply_verdicts(text: &str, batch: &Batch<'_>, labels: &mut LabelVector) -> usize {
    let mut applied = 0;
    for verdict in parse_verdicts(text, batch.len()) {
        if let Some(global) = batch.global_index(verdict.local_index) {
            if labels.set(global, verdict.label) {
                applied += 1;
            }
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use datalabel_core::batches;

    fn rows(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("row {}", i)).collect()
    }

    /// Label vector state after applying `reply` to the batch at `offset`
    fn labels_after(reply: &str, total: usize, batch_size: usize, batch_no: usize) -> Vec<u8> {
        let texts = rows(total);
        let batch = batches(&texts, batch_size).nth(batch_no).unwrap();
        let mut labels = LabelVector::new(total);
        apply_verdicts(reply, &batch, &mut labels);
        labels.as_slice().iter().map(|l| l.as_u8()).collect()
    }

    #[test]
    fn test_case_insensitive_verdicts_with_offset() {
        // 3-row batch at global offset 10
        let labels = labels_after("1: LABEL\n2: NO LABEL\n3: label", 13, 10, 1);
        assert_eq!(&labels[10..], &[1, 0, 1]);
        assert!(labels[..10].iter().all(|l| *l == 0));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let verdicts = parse_verdicts("9: LABEL", 3);
        assert!(verdicts.is_empty());

        let labels = labels_after("9: LABEL\n0: LABEL", 3, 15, 0);
        assert_eq!(labels, vec![0, 0, 0]);
    }

    #[test]
    fn test_duplicate_index_last_wins() {
        assert_eq!(labels_after("1: LABEL\n1: NO LABEL", 2, 15, 0), vec![0, 0]);
        assert_eq!(labels_after("1: NO LABEL\n1: LABEL", 2, 15, 0), vec![1, 0]);
    }

    #[test]
    fn test_alternate_separators() {
        let labels = labels_after("1. LABEL\n2 LABEL\n3:. label\n4:NO LABEL", 4, 15, 0);
        assert_eq!(labels, vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_surrounding_chatter_and_reordering() {
        let reply = "Sure! Here are the labels:\n\n3: LABEL\n1: NO LABEL\n2: LABEL\n\nLet me know if you need more.";
        assert_eq!(labels_after(reply, 3, 15, 0), vec![0, 1, 1]);
    }

    #[test]
    fn test_missing_indices_stay_zero() {
        assert_eq!(labels_after("2: LABEL", 4, 15, 0), vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_unparseable_reply() {
        let reply = "I cannot determine the labels for these examples.";
        assert!(parse_verdicts(reply, 5).is_empty());
        assert_eq!(labels_after(reply, 2, 15, 0), vec![0, 0]);
    }

    #[test]
    fn test_huge_number_ignored() {
        let reply = "99999999999999999999999999: LABEL\n1: LABEL";
        assert_eq!(
            parse_verdicts(reply, 2),
            vec![Verdict {
                local_index: 0,
                label: Label::Match
            }]
        );
    }

    #[test]
    fn test_verdict_embedded_in_prose() {
        // Inline "N: LABEL" pairs are still picked up.
        let reply = "Example 2: LABEL because it mentions red; example 1: no label";
        assert_eq!(labels_after(reply, 2, 15, 0), vec![0, 1]);
    }

    #[test]
    fn test_apply_returns_count() {
        let texts = rows(3);
        let batch = batches(&texts, 15).next().unwrap();
        let mut labels = LabelVector::new(3);

        let applied = apply_verdicts("1: LABEL\n2: NO LABEL\n7: LABEL", &batch, &mut labels);
        assert_eq!(applied, 2);
        assert_eq!(labels.match_count(), 1);
    }
}
