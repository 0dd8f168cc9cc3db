//! The ID3 learner.
//!
//! Each call selects the attribute with the highest information gain, splits
//! the view on it in decreasing likelihood order, and recurses into impure
//! partitions with the split column hidden.

use log::debug;

use super::helpers::{attribute_columns, best_split, Split};
use super::{Case, Decision, Outcome};
use crate::data::{count_rows, field, View};
use crate::error::{Id3Error, Result};
use crate::stats::{likelihood, total_entropy};

/// What to do with an impure partition that has no attribute left to split
/// on. This only happens when training rows agree on every attribute but
/// disagree on the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustedPolicy {
    /// Resolve to the partition's most likely class
    #[default]
    MajorityClass,
    /// Fail with [`Id3Error::Inconsistent`]
    Reject,
}

/// Learner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LearnOptions {
    /// Handling of exhausted partitions
    pub exhausted: ExhaustedPolicy,
}

impl LearnOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exhausted partition policy.
    #[must_use]
    pub fn with_exhausted_policy(mut self, policy: ExhaustedPolicy) -> Self {
        self.exhausted = policy;
        self
    }
}

/// Learns a decision tree predicting `class` with default options.
///
/// # Errors
///
/// See [`learn_with`].
///
/// # Examples
///
/// ```
/// use id3::data::weather;
/// use id3::tree::learn;
///
/// let mut table = weather().expect("bundled dataset parses");
/// let tree = learn(&mut table, "play").expect("weather is learnable");
///
/// let columns = table.header().to_vec();
/// let row: Vec<String> = ["sunny", "hot", "high", "weak", "?"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(tree.classify(&columns, &row).expect("known categories"), "no");
/// ```
pub fn learn(view: &mut dyn View, class: &str) -> Result<Decision> {
    learn_with(view, class, &LearnOptions::default())
}

/// Learns a decision tree predicting `class` from every other visible column
/// of `view`.
///
/// # Errors
///
/// - [`Id3Error::ColumnNotFound`] if `class` is not visible
/// - [`Id3Error::EmptyDataset`] if `view` has no rows
/// - [`Id3Error::NoAttributes`] if no column besides `class` is visible
/// - [`Id3Error::Inconsistent`] for contradictory rows under
///   [`ExhaustedPolicy::Reject`]
pub fn learn_with(view: &mut dyn View, class: &str, options: &LearnOptions) -> Result<Decision> {
    view.position(class)?;
    let n_rows = count_rows(view);
    if n_rows == 0 {
        return Err(Id3Error::EmptyDataset);
    }
    if attribute_columns(view, class).is_empty() {
        return Err(Id3Error::NoAttributes {
            class: class.to_string(),
        });
    }

    debug!("learning '{class}' from {n_rows} rows");
    let h = total_entropy(view, class)?;
    let split = best_split(view, class, h)?.ok_or_else(|| Id3Error::NoAttributes {
        class: class.to_string(),
    })?;

    let mut learner = Learner {
        class,
        options,
        path: Vec::new(),
    };
    learner.decide(view, split)
}

struct Learner<'c> {
    class: &'c str,
    options: &'c LearnOptions,
    /// `column=value` steps from the root to the current partition.
    path: Vec<String>,
}

impl Learner<'_> {
    /// Builds the decision for `split`, one case per distinct value.
    fn decide(&mut self, view: &mut dyn View, split: Split) -> Result<Decision> {
        debug!(
            "split {} rows on '{}' (gain {:.4}) at depth {} [{}]",
            count_rows(view),
            split.column,
            split.gain,
            self.path.len(),
            self.path.join(", ")
        );

        let mut cases = Vec::new();
        for distinct in likelihood(view, &split.column)? {
            let mut partition = view.select(&split.column, &distinct.value)?;
            self.path.push(format!("{}={}", split.column, distinct.value));
            let outcome = self.grow(&mut partition, &split.column)?;
            self.path.pop();
            cases.push(Case {
                value: distinct.value,
                outcome,
            });
        }

        Ok(Decision {
            column: split.column,
            cases,
        })
    }

    /// Resolves one partition: a leaf if pure, otherwise a nested decision on
    /// the partition with `column` hidden.
    fn grow(&mut self, partition: &mut dyn View, column: &str) -> Result<Outcome> {
        let h = total_entropy(partition, self.class)?;
        if h == 0.0 {
            return Ok(Outcome::Class(first_class(partition, self.class)?));
        }

        let mut rest = partition.drop_column(column)?;
        match best_split(&mut rest, self.class, h)? {
            Some(split) => Ok(Outcome::Decide(self.decide(&mut rest, split)?)),
            None => self.exhausted(&mut rest),
        }
    }

    fn exhausted(&self, partition: &mut dyn View) -> Result<Outcome> {
        match self.options.exhausted {
            ExhaustedPolicy::MajorityClass => {
                let majority = likelihood(partition, self.class)?
                    .into_iter()
                    .next()
                    .ok_or(Id3Error::EmptyDataset)?;
                debug!(
                    "no attribute left at [{}], using majority class '{}' (p={:.3})",
                    self.path.join(", "),
                    majority.value,
                    majority.probability
                );
                Ok(Outcome::Class(majority.value))
            }
            ExhaustedPolicy::Reject => Err(Id3Error::Inconsistent {
                path: self.path.join(", "),
            }),
        }
    }
}

/// Class value of the first row of `view`.
fn first_class(view: &mut dyn View, class: &str) -> Result<String> {
    let position = view.position(class)?;
    view.reset();
    let row = view.next_row().ok_or(Id3Error::EmptyDataset)?;
    Ok(field(row, class, position)?.to_string())
}
