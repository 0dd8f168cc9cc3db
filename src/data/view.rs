//! Lazy cursors over categorical tables.
//!
//! A [`View`] is a forward-only cursor over rows of string fields. Views
//! compose by wrapping a parent: [`SelectView`] keeps only rows whose field in
//! one column equals a value, [`DropView`] hides one column name. Neither
//! copies rows; both pull from their parent on demand.
//!
//! Column positions never change along a chain of views. A hidden column
//! keeps its slot in [`View::columns`] with an empty name, so field indices
//! resolved at any depth stay valid for the rows the base table hands out.

use std::borrow::Cow;

use crate::error::{Id3Error, Result};

/// Cursor over rows of categorical data.
///
/// The cursor starts before the first row. [`View::advance`] moves it forward
/// and [`View::current`] reads the row it rests on. [`View::reset`] moves it
/// back to before the first row.
///
/// A derived view holds an exclusive borrow of its parent, so the cursor of a
/// chain is only ever driven from one place.
///
/// # Examples
///
/// ```
/// use id3::data::{Table, View};
///
/// let mut table = Table::from_records(vec![
///     vec!["outlook".into(), "play".into()],
///     vec!["sunny".into(), "no".into()],
///     vec!["rain".into(), "yes".into()],
///     vec!["sunny".into(), "yes".into()],
/// ])
/// .expect("valid table");
///
/// let mut sunny = table.select("outlook", "sunny").expect("outlook is visible");
/// let mut plays = Vec::new();
/// while let Some(row) = sunny.next_row() {
///     plays.push(row[1].clone());
/// }
/// assert_eq!(plays, vec!["no", "yes"]);
/// ```
pub trait View {
    /// Returns the column names of this view.
    ///
    /// Hidden columns appear as empty names at their original position.
    fn columns(&self) -> Cow<'_, [String]>;

    /// Moves the cursor to before the first row.
    fn reset(&mut self);

    /// Moves the cursor to the next row of this view.
    ///
    /// Returns `false` once the view is exhausted.
    fn advance(&mut self) -> bool;

    /// Returns the row under the cursor, if any.
    fn current(&self) -> Option<&[String]>;

    /// Returns a view of the rows whose `column` field equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::ColumnNotFound`] if `column` is not visible.
    fn select(&mut self, column: &str, value: &str) -> Result<SelectView<'_>>;

    /// Returns a view with `column` hidden.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::ColumnNotFound`] if `column` is not visible.
    fn drop_column(&mut self, column: &str) -> Result<DropView<'_>>;

    /// Advances and returns the next row, or `None` when exhausted.
    fn next_row(&mut self) -> Option<&[String]> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }

    /// Returns the position of a visible column.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::ColumnNotFound`] if `column` is not visible.
    fn position(&self, column: &str) -> Result<usize> {
        find(&self.columns(), column)
    }
}

/// Linear search for `column` among `columns`.
///
/// The empty name marks a hidden column and never matches.
///
/// # Errors
///
/// Returns [`Id3Error::ColumnNotFound`] on a miss.
pub fn find(columns: &[String], column: &str) -> Result<usize> {
    if column.is_empty() {
        return Err(Id3Error::column_not_found(column, columns));
    }
    columns
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| Id3Error::column_not_found(column, columns))
}

/// Reads the field of `row` at `position`, the resolved position of `column`.
///
/// # Errors
///
/// Returns [`Id3Error::MalformedRow`] if the row is too short.
pub fn field<'r>(row: &'r [String], column: &str, position: usize) -> Result<&'r str> {
    row.get(position)
        .map(String::as_str)
        .ok_or_else(|| Id3Error::MalformedRow {
            column: column.to_string(),
            position,
            actual: row.len(),
        })
}

/// Resets `view` and counts its rows in one pass.
pub fn count_rows(view: &mut dyn View) -> usize {
    view.reset();
    let mut n = 0;
    while view.advance() {
        n += 1;
    }
    n
}

/// View keeping only the parent rows whose field at one position equals a
/// fixed value.
pub struct SelectView<'a> {
    parent: &'a mut (dyn View + 'a),
    index: usize,
    value: String,
}

impl<'a> SelectView<'a> {
    /// Wraps `parent`, filtering on `column == value`.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::ColumnNotFound`] if `column` is not visible in
    /// `parent`.
    pub fn new(parent: &'a mut (dyn View + 'a), column: &str, value: &str) -> Result<Self> {
        let index = parent.position(column)?;
        Ok(Self {
            parent,
            index,
            value: value.to_string(),
        })
    }

    /// The value rows must carry to pass this view.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl View for SelectView<'_> {
    fn columns(&self) -> Cow<'_, [String]> {
        self.parent.columns()
    }

    fn reset(&mut self) {
        self.parent.reset();
    }

    fn advance(&mut self) -> bool {
        while self.parent.advance() {
            let matched = self
                .parent
                .current()
                .and_then(|row| row.get(self.index))
                .map_or(false, |field| *field == self.value);
            if matched {
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<&[String]> {
        self.parent.current()
    }

    fn select(&mut self, column: &str, value: &str) -> Result<SelectView<'_>> {
        SelectView::new(self, column, value)
    }

    fn drop_column(&mut self, column: &str) -> Result<DropView<'_>> {
        DropView::new(self, column)
    }
}

/// View exposing the parent rows unchanged with one column name blanked.
pub struct DropView<'a> {
    parent: &'a mut (dyn View + 'a),
    index: usize,
}

impl<'a> DropView<'a> {
    /// Wraps `parent`, hiding `column`.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::ColumnNotFound`] if `column` is not visible in
    /// `parent`.
    pub fn new(parent: &'a mut (dyn View + 'a), column: &str) -> Result<Self> {
        let index = parent.position(column)?;
        Ok(Self { parent, index })
    }
}

impl View for DropView<'_> {
    fn columns(&self) -> Cow<'_, [String]> {
        let mut columns = self.parent.columns().into_owned();
        columns[self.index].clear();
        Cow::Owned(columns)
    }

    fn reset(&mut self) {
        self.parent.reset();
    }

    fn advance(&mut self) -> bool {
        self.parent.advance()
    }

    fn current(&self) -> Option<&[String]> {
        self.parent.current()
    }

    fn select(&mut self, column: &str, value: &str) -> Result<SelectView<'_>> {
        SelectView::new(self, column, value)
    }

    fn drop_column(&mut self, column: &str) -> Result<DropView<'_>> {
        DropView::new(self, column)
    }
}
