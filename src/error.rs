//! Error types for ID3 operations.
//!
//! Failures fall into three groups:
//! - invariant violations (a column that is not visible, a category the tree
//!   never saw) which mean the caller used a view or tree outside its contract
//! - input errors (malformed tables, empty training data)
//! - serialization errors (a persisted tree that does not decode)

use thiserror::Error;

/// Main error type for ID3 operations.
///
/// # Examples
///
/// ```
/// use id3::error::Id3Error;
///
/// let err = Id3Error::UnrecognizedCategory {
///     column: "outlook".to_string(),
///     value: "foggy".to_string(),
/// };
/// assert!(err.to_string().contains("foggy"));
/// assert!(err.is_invariant_violation());
/// ```
#[derive(Error, Debug)]
pub enum Id3Error {
    /// Column name is not visible in the view it was looked up in.
    #[error("column '{column}' not found (visible columns: {visible:?})")]
    ColumnNotFound {
        /// Requested column name
        column: String,
        /// Visible column names at the time of the lookup
        visible: Vec<String>,
    },

    /// The tree has no case for a value observed in a row.
    #[error("no rule for value '{value}' in column '{column}': category was not seen during training")]
    UnrecognizedCategory {
        /// Column the decision splits on
        column: String,
        /// Value found in the row
        value: String,
    },

    /// A row has fewer fields than the column set requires.
    #[error("row has {actual} fields, column '{column}' is at position {position}")]
    MalformedRow {
        /// Column being read
        column: String,
        /// Position of that column
        position: usize,
        /// Number of fields in the row
        actual: usize,
    },

    /// A partition is impure but no attribute is left to split it.
    #[error("inconsistent training data: rows at [{path}] share every attribute but disagree on the class")]
    Inconsistent {
        /// `column=value` steps leading to the partition
        path: String,
    },

    /// Tabular input is not usable (ragged rows, bad header, CSV syntax).
    #[error("malformed table at line {line}: {message}")]
    MalformedTable {
        /// 1-based line number (the header is line 1)
        line: usize,
        /// Error description
        message: String,
    },

    /// The training view has no rows.
    #[error("cannot learn from an empty dataset")]
    EmptyDataset,

    /// The training view has no attribute besides the class column.
    #[error("no attribute columns to split on besides class column '{class}'")]
    NoAttributes {
        /// Class column name
        class: String,
    },

    /// The classifier was used before `fit` or `load`.
    #[error("model not fitted: call fit() or load a tree first")]
    NotFitted,

    /// A persisted tree decoded into an invalid structure.
    #[error("invalid tree: {message}")]
    InvalidTree {
        /// Error description
        message: String,
    },

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Id3Error {
    /// Create a column lookup failure for `column` against `visible`.
    #[must_use]
    pub fn column_not_found(column: &str, visible: &[String]) -> Self {
        Self::ColumnNotFound {
            column: column.to_string(),
            visible: visible.to_vec(),
        }
    }

    /// Create a malformed table error.
    #[must_use]
    pub fn malformed_table(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedTable {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid tree error.
    #[must_use]
    pub fn invalid_tree(message: impl Into<String>) -> Self {
        Self::InvalidTree {
            message: message.into(),
        }
    }

    /// Check if this error signals misuse of a view or tree rather than bad
    /// input.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::ColumnNotFound { .. }
                | Self::UnrecognizedCategory { .. }
                | Self::MalformedRow { .. }
                | Self::Inconsistent { .. }
        )
    }
}

impl From<csv::Error> for Id3Error {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .map_or(0, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            _ => Self::malformed_table(line, message),
        }
    }
}

impl From<serde_json::Error> for Id3Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Id3Error>;
