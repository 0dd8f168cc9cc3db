//! Empirical distributions and Shannon entropy over views.
//!
//! Every function here makes full passes over the view it is given, starting
//! with a reset, so the caller's cursor position is not preserved.
//!
//! # Examples
//!
//! ```
//! use id3::data::weather;
//! use id3::stats::{average_entropy, total_entropy};
//!
//! let mut table = weather().expect("bundled dataset parses");
//! let h = total_entropy(&mut table, "play").expect("play is visible");
//! let after = average_entropy(&mut table, "outlook", "play").expect("columns are visible");
//! assert!((h - 0.940).abs() < 1e-3);
//! assert!((after - 0.694).abs() < 1e-3);
//! ```

use std::collections::HashMap;

use crate::data::{field, View};
use crate::error::Result;

/// A distinct column value and its empirical probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Distinct {
    /// The column value
    pub value: String,
    /// Fraction of rows carrying the value
    pub probability: f64,
}

/// Returns the probability of each distinct value of `column` in `view`.
///
/// The result is sorted by decreasing probability. Values with equal
/// probability keep the order in which they were first seen, so repeated calls
/// on the same data agree. An empty view yields an empty distribution.
///
/// # Errors
///
/// Returns [`crate::error::Id3Error::ColumnNotFound`] if `column` is not
/// visible.
pub fn likelihood(view: &mut dyn View, column: &str) -> Result<Vec<Distinct>> {
    let position = view.position(column)?;

    // Counts in first-seen order; `slots` maps a value to its index.
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut total = 0_usize;

    view.reset();
    while let Some(row) = view.next_row() {
        let value = field(row, column, position)?;
        match slots.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.to_string(), counts.len());
                counts.push((value.to_string(), 1));
            }
        }
        total += 1;
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(counts
        .into_iter()
        .map(|(value, count)| Distinct {
            value,
            probability: count as f64 / total as f64,
        })
        .collect())
}

/// Shannon entropy term `-p * log2(p)` for a single probability.
///
/// Exactly zero at `p == 0` and `p == 1`.
///
/// # Examples
///
/// ```
/// use id3::stats::entropy;
///
/// assert_eq!(entropy(0.0), 0.0);
/// assert_eq!(entropy(1.0), 0.0);
/// assert_eq!(entropy(0.5), 0.5);
/// ```
#[must_use]
pub fn entropy(p: f64) -> f64 {
    if p == 0.0 || p == 1.0 {
        0.0
    } else {
        -p * p.log2()
    }
}

/// Entropy of the class column's distribution in `view`, in bits.
///
/// Zero exactly when every row carries the same class.
///
/// # Errors
///
/// Returns [`crate::error::Id3Error::ColumnNotFound`] if `class` is not
/// visible.
pub fn total_entropy(view: &mut dyn View, class: &str) -> Result<f64> {
    Ok(likelihood(view, class)?
        .iter()
        .map(|d| entropy(d.probability))
        .sum())
}

/// Expected class entropy after partitioning `view` on `attribute`.
///
/// Each partition's class entropy is weighted by the probability of its
/// attribute value.
///
/// # Errors
///
/// Returns [`crate::error::Id3Error::ColumnNotFound`] if `attribute` or
/// `class` is not visible.
pub fn average_entropy(view: &mut dyn View, attribute: &str, class: &str) -> Result<f64> {
    view.position(class)?;

    let mut h = 0.0;
    for d in likelihood(view, attribute)? {
        let mut partition = view.select(attribute, &d.value)?;
        h += d.probability * total_entropy(&mut partition, class)?;
    }
    Ok(h)
}

/// Reduction in class entropy from partitioning `view` on `attribute`.
///
/// # Errors
///
/// Returns [`crate::error::Id3Error::ColumnNotFound`] if `attribute` or
/// `class` is not visible.
pub fn information_gain(view: &mut dyn View, attribute: &str, class: &str) -> Result<f64> {
    let h = total_entropy(view, class)?;
    Ok(h - average_entropy(view, attribute, class)?)
}
