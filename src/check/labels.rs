//! Computes the label add/remove sets for a PR.
//!
//! Enforces at most one changelog classification label at a time and keeps
//! the "submodule changed" marker in sync with the diff. The computation is
//! idempotent: running it again on the already-updated label set produces
//! empty deltas.
use std::collections::HashSet;

use crate::{
    check::types::LabelDelta,
    config::{SUBMODULE_CHANGED_LABEL, is_category_label, label_for_category},
};

/// Compute labels to add and remove for the resolved changelog category.
///
/// An unknown or empty category leaves the classification labels untouched;
/// the submodule marker is synced regardless.
pub fn compute_delta(
    category: &str,
    labels: &HashSet<String>,
    has_submodule_changes: bool,
) -> LabelDelta {
    let mut delta = LabelDelta::default();

    if let Some(mapped) = label_for_category(category) {
        if !labels.contains(mapped) {
            delta.add.push(mapped.to_string());
        }

        let mut stale: Vec<String> = labels
            .iter()
            .filter(|l| is_category_label(l) && l.as_str() != mapped)
            .cloned()
            .collect();
        // HashSet iteration order is arbitrary
        stale.sort();
        delta.remove.extend(stale);
    }

    if has_submodule_changes {
        if !labels.contains(SUBMODULE_CHANGED_LABEL) {
            delta.add.push(SUBMODULE_CHANGED_LABEL.to_string());
        }
    } else if labels.contains(SUBMODULE_CHANGED_LABEL) {
        delta.remove.push(SUBMODULE_CHANGED_LABEL.to_string());
    }

    delta
}
