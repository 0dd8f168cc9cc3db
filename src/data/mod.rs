//! Categorical tables and the views the learner reads them through.
//!
//! [`Table`] owns the rows and is the root of every view chain. Tables are
//! built from CSV text (via the `csv` crate) or from in-memory records; the
//! first record is always the header.

mod sample;
mod view;

pub use sample::{weather, WEATHER_CSV};
pub use view::{count_rows, field, find, DropView, SelectView, View};

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Id3Error, Result};

/// In-memory categorical table, and the base view over it.
///
/// # Examples
///
/// ```
/// use id3::data::{Table, View};
///
/// let csv = "outlook,play\nsunny,no\novercast,yes\n";
/// let mut table = Table::from_reader(csv.as_bytes()).expect("valid CSV");
/// assert_eq!(table.shape(), (2, 2));
/// assert_eq!(table.next_row(), Some(&["sunny".to_string(), "no".to_string()][..]));
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    next: usize,
    current: Option<usize>,
}

impl Table {
    /// Creates a table from a header and data rows.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::MalformedTable`] if a column name is empty or
    /// repeated, or if a row's field count differs from the header's.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Id3Error::malformed_table(1, "header row has no columns"));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if name.is_empty() {
                return Err(Id3Error::malformed_table(
                    1,
                    format!("column {i} has an empty name"),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(Id3Error::malformed_table(
                    1,
                    format!("duplicate column name '{name}'"),
                ));
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Id3Error::malformed_table(
                    i + 2,
                    format!("expected {} fields, found {}", columns.len(), row.len()),
                ));
            }
        }

        Ok(Self {
            columns,
            rows,
            next: 0,
            current: None,
        })
    }

    /// Creates a table from records whose first entry is the header.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::MalformedTable`] if there is no header or the rows
    /// are malformed (see [`Table::new`]).
    pub fn from_records(mut records: Vec<Vec<String>>) -> Result<Self> {
        if records.is_empty() {
            return Err(Id3Error::malformed_table(1, "missing header row"));
        }
        let columns = records.remove(0);
        Self::new(columns, records)
    }

    /// Reads CSV text whose first record is the header.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::MalformedTable`] on CSV syntax errors or ragged
    /// rows, and [`Id3Error::Io`] if reading fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            records.push(record.iter().map(str::to_string).collect());
        }
        Self::from_records(records)
    }

    /// Reads a CSV file whose first record is the header.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::Io`] if the file cannot be opened, otherwise as
    /// [`Table::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the header.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.columns
    }

    /// Returns the data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl View for Table {
    fn columns(&self) -> Cow<'_, [String]> {
        Cow::Borrowed(&self.columns)
    }

    fn reset(&mut self) {
        self.next = 0;
        self.current = None;
    }

    fn advance(&mut self) -> bool {
        if self.next < self.rows.len() {
            self.current = Some(self.next);
            self.next += 1;
            true
        } else {
            self.current = None;
            false
        }
    }

    fn current(&self) -> Option<&[String]> {
        self.current.map(|i| self.rows[i].as_slice())
    }

    fn select(&mut self, column: &str, value: &str) -> Result<SelectView<'_>> {
        SelectView::new(self, column, value)
    }

    fn drop_column(&mut self, column: &str) -> Result<DropView<'_>> {
        DropView::new(self, column)
    }
}

#[cfg(test)]
mod tests;
