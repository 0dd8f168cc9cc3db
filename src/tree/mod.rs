//! ID3 decision trees over categorical attributes.
//!
//! This module implements:
//! - the tree model: a [`Decision`] splits on one column and holds one
//!   [`Case`] per distinct training value, each resolving to a class label or
//!   to a nested decision
//! - the ID3 learner ([`learn`], [`learn_with`]) selecting splits by maximum
//!   information gain
//! - [`Id3Classifier`], the estimator wrapper with fit / predict / score and
//!   JSON persistence
//!
//! # Example
//!
//! ```rust
//! use id3::data::weather;
//! use id3::tree::Id3Classifier;
//!
//! let mut table = weather().expect("bundled dataset parses");
//!
//! let mut model = Id3Classifier::new("play");
//! model.fit(&mut table).expect("fit should succeed");
//!
//! assert_eq!(model.tree().map(|t| t.column.as_str()), Some("outlook"));
//! assert_eq!(model.score(&mut table).expect("score should succeed"), 1.0);
//! ```

mod helpers;
mod learn;

pub use learn::{learn, learn_with, ExhaustedPolicy, LearnOptions};

use std::fmt;
use std::path::Path;

use crate::data::{field, find, View};
use crate::error::{Id3Error, Result};

/// A split on one categorical column.
///
/// Cases are ordered by decreasing likelihood of their value in the training
/// data. A decision always has at least one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Name of the column to split on
    pub column: String,
    /// One case per distinct training value
    pub cases: Vec<Case>,
}

/// A distinct column value and what it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// The column value this case matches
    pub value: String,
    /// Class label or further decision
    pub outcome: Outcome,
}

/// Result of matching a case: a class label or a nested decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Leaf with the decided class label
    Class(String),
    /// Nested decision on another column
    Decide(Decision),
}

impl Case {
    /// Creates a leaf case.
    pub fn leaf(value: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            outcome: Outcome::Class(class.into()),
        }
    }

    /// Creates a case leading to a nested decision.
    pub fn branch(value: impl Into<String>, decision: Decision) -> Self {
        Self {
            value: value.into(),
            outcome: Outcome::Decide(decision),
        }
    }
}

impl Decision {
    /// Creates a decision on `column` with the given cases.
    pub fn new(column: impl Into<String>, cases: Vec<Case>) -> Self {
        Self {
            column: column.into(),
            cases,
        }
    }

    /// Returns the case matching `value`, if any.
    #[must_use]
    pub fn case(&self, value: &str) -> Option<&Case> {
        self.cases.iter().find(|case| case.value == value)
    }

    /// Classifies one row laid out according to `columns`.
    ///
    /// Only the columns named by decisions along the path need to be present.
    ///
    /// # Errors
    ///
    /// - [`Id3Error::ColumnNotFound`] if a decision's column is not in
    ///   `columns`
    /// - [`Id3Error::MalformedRow`] if the row is shorter than `columns`
    /// - [`Id3Error::UnrecognizedCategory`] if no case matches the row's value
    pub fn classify(&self, columns: &[String], row: &[String]) -> Result<&str> {
        let mut decision = self;
        loop {
            let position = find(columns, &decision.column)?;
            let value = field(row, &decision.column, position)?;
            let case = decision
                .case(value)
                .ok_or_else(|| Id3Error::UnrecognizedCategory {
                    column: decision.column.clone(),
                    value: value.to_string(),
                })?;
            match &case.outcome {
                Outcome::Class(label) => return Ok(label.as_str()),
                Outcome::Decide(next) => decision = next,
            }
        }
    }

    /// Classifies every row of `view`, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first row [`Decision::classify`] rejects.
    pub fn predict(&self, view: &mut dyn View) -> Result<Vec<String>> {
        let columns = view.columns().into_owned();
        let mut labels = Vec::new();
        view.reset();
        while let Some(row) = view.next_row() {
            labels.push(self.classify(&columns, row)?.to_string());
        }
        Ok(labels)
    }

    /// Classifies CSV-shaped records whose first entry is the header.
    ///
    /// Returns one label per record after the header.
    ///
    /// # Errors
    ///
    /// Fails on the first record [`Decision::classify`] rejects.
    pub fn classify_records(&self, records: &[Vec<String>]) -> Result<Vec<String>> {
        let Some((header, rows)) = records.split_first() else {
            return Ok(Vec::new());
        };
        rows.iter()
            .map(|row| self.classify(header, row).map(str::to_string))
            .collect()
    }

    /// Number of decision levels on the longest path.
    ///
    /// A decision whose cases are all leaves has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .cases
            .iter()
            .map(|case| match &case.outcome {
                Outcome::Class(_) => 0,
                Outcome::Decide(next) => next.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Number of leaf cases in the tree.
    #[must_use]
    pub fn n_leaves(&self) -> usize {
        self.cases
            .iter()
            .map(|case| match &case.outcome {
                Outcome::Class(_) => 1,
                Outcome::Decide(next) => next.n_leaves(),
            })
            .sum()
    }

    /// Columns split on anywhere in the tree, in pre-order of first use.
    #[must_use]
    pub fn columns_used(&self) -> Vec<&str> {
        let mut columns = Vec::new();
        helpers::collect_columns(self, &mut columns);
        columns
    }

    /// Class labels found in the leaves, in pre-order of first use.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        let mut classes = Vec::new();
        helpers::collect_classes(self, &mut classes);
        classes
    }
}

impl fmt::Display for Decision {
    /// Renders the tree as an indented rule listing:
    ///
    /// ```text
    /// outlook = sunny
    ///   humidity = high => no
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        helpers::write_rules(self, 0, f)
    }
}

/// ID3 decision tree classifier.
///
/// Learns a [`Decision`] tree predicting `class_column` from every other
/// visible column of a view.
#[derive(Debug, Clone)]
pub struct Id3Classifier {
    tree: Option<Decision>,
    class_column: String,
    options: LearnOptions,
}

impl Id3Classifier {
    /// Creates an unfitted classifier predicting `class_column`.
    pub fn new(class_column: impl Into<String>) -> Self {
        Self {
            tree: None,
            class_column: class_column.into(),
            options: LearnOptions::default(),
        }
    }

    /// Wraps an already learned tree.
    pub fn from_tree(class_column: impl Into<String>, tree: Decision) -> Self {
        Self {
            tree: Some(tree),
            ..Self::new(class_column)
        }
    }

    /// Sets how impure partitions with no attribute left are resolved.
    #[must_use]
    pub fn with_exhausted_policy(mut self, policy: ExhaustedPolicy) -> Self {
        self.options = self.options.with_exhausted_policy(policy);
        self
    }

    /// The column this classifier predicts.
    #[must_use]
    pub fn class_column(&self) -> &str {
        &self.class_column
    }

    /// The learned tree, if fitted.
    #[must_use]
    pub fn tree(&self) -> Option<&Decision> {
        self.tree.as_ref()
    }

    /// Learns the tree from `view`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`learn_with`].
    pub fn fit(&mut self, view: &mut dyn View) -> Result<()> {
        self.tree = Some(learn_with(view, &self.class_column, &self.options)?);
        Ok(())
    }

    /// Predicts a class label for every row of `view`.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::NotFitted`] before `fit`, otherwise the errors of
    /// [`Decision::predict`].
    pub fn predict(&self, view: &mut dyn View) -> Result<Vec<String>> {
        self.fitted()?.predict(view)
    }

    /// Fraction of rows in `view` whose predicted label equals their class
    /// column.
    ///
    /// # Errors
    ///
    /// - [`Id3Error::NotFitted`] before `fit`
    /// - [`Id3Error::ColumnNotFound`] if the class column is not visible
    /// - [`Id3Error::EmptyDataset`] if the view has no rows
    /// - classification errors as in [`Decision::classify`]
    pub fn score(&self, view: &mut dyn View) -> Result<f64> {
        let tree = self.fitted()?;
        let columns = view.columns().into_owned();
        let class = find(&columns, &self.class_column)?;

        let mut total = 0_usize;
        let mut correct = 0_usize;
        view.reset();
        while let Some(row) = view.next_row() {
            let predicted = tree.classify(&columns, row)?;
            if predicted == field(row, &self.class_column, class)? {
                correct += 1;
            }
            total += 1;
        }

        if total == 0 {
            return Err(Id3Error::EmptyDataset);
        }
        Ok(correct as f64 / total as f64)
    }

    /// Saves the learned tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::NotFitted`] before `fit`, or an I/O error.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::serialization::save(self.fitted()?, path)
    }

    /// Loads a tree saved by [`Id3Classifier::save`].
    ///
    /// # Errors
    ///
    /// Returns I/O, serialization or [`Id3Error::InvalidTree`] errors.
    pub fn load<P: AsRef<Path>>(path: P, class_column: impl Into<String>) -> Result<Self> {
        let tree = crate::serialization::load(path)?;
        Ok(Self::from_tree(class_column, tree))
    }

    fn fitted(&self) -> Result<&Decision> {
        self.tree.as_ref().ok_or(Id3Error::NotFitted)
    }
}
