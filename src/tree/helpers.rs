//! Helper functions for tree building and inspection.
//!
//! This module contains internal helpers used by the learner and by the
//! [`super::Decision`] accessors.

use std::fmt;

use log::trace;

use super::{Decision, Outcome};
use crate::data::View;
use crate::error::Result;
use crate::stats::average_entropy;

// ============================================================================
// Split selection
// ============================================================================

/// The attribute chosen for a split and its information gain.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Split {
    pub(super) column: String,
    pub(super) gain: f64,
}

/// Visible columns other than the class column.
pub(super) fn attribute_columns(view: &dyn View, class: &str) -> Vec<String> {
    view.columns()
        .iter()
        .filter(|name| !name.is_empty() && *name != class)
        .cloned()
        .collect()
}

/// Picks the attribute with strictly maximum information gain.
///
/// `h` is the class entropy of `view`. Columns are scanned in view order and a
/// later column only wins on a strictly greater gain, so ties go to the
/// earliest column. Returns `None` if no attribute is visible.
pub(super) fn best_split(view: &mut dyn View, class: &str, h: f64) -> Result<Option<Split>> {
    let mut best: Option<Split> = None;
    let mut max_gain = f64::NEG_INFINITY;

    for column in attribute_columns(view, class) {
        let gain = h - average_entropy(view, &column, class)?;
        trace!("candidate split on '{column}': gain {gain:.6}");
        if gain > max_gain {
            max_gain = gain;
            best = Some(Split { column, gain });
        }
    }

    Ok(best)
}

// ============================================================================
// Tree inspection
// ============================================================================

pub(super) fn collect_columns<'t>(decision: &'t Decision, out: &mut Vec<&'t str>) {
    if !out.contains(&decision.column.as_str()) {
        out.push(&decision.column);
    }
    for case in &decision.cases {
        if let Outcome::Decide(next) = &case.outcome {
            collect_columns(next, out);
        }
    }
}

pub(super) fn collect_classes<'t>(decision: &'t Decision, out: &mut Vec<&'t str>) {
    for case in &decision.cases {
        match &case.outcome {
            Outcome::Class(label) => {
                if !out.contains(&label.as_str()) {
                    out.push(label);
                }
            }
            Outcome::Decide(next) => collect_classes(next, out),
        }
    }
}

/// Writes one line per case, nested decisions indented by two spaces.
pub(super) fn write_rules(
    decision: &Decision,
    indent: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let pad = "  ".repeat(indent);
    for case in &decision.cases {
        match &case.outcome {
            Outcome::Class(label) => {
                writeln!(f, "{pad}{} = {} => {label}", decision.column, case.value)?;
            }
            Outcome::Decide(next) => {
                writeln!(f, "{pad}{} = {}", decision.column, case.value)?;
                write_rules(next, indent + 1, f)?;
            }
        }
    }
    Ok(())
}
