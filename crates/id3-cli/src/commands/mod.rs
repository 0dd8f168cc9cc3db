//! Subcommand implementations

pub(crate) mod classify;
pub(crate) mod inspect;
pub(crate) mod learn;

use std::path::Path;

use id3::data::Table;
use id3::Decision;

use crate::error::{CliError, Result};

pub(crate) fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Reads a CSV table whose first record is the header.
pub(crate) fn load_table(path: &Path) -> Result<Table> {
    validate_path(path)?;
    Ok(Table::from_path(path)?)
}

/// Reads a tree saved as JSON.
pub(crate) fn load_tree(path: &Path) -> Result<Decision> {
    validate_path(path)?;
    Ok(id3::serialization::load(path)?)
}
