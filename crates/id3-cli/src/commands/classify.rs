//! Classify command implementation

use std::path::Path;

use super::{load_table, load_tree};
use crate::error::Result;
use crate::output;

pub(crate) fn run(tree_path: &Path, file: &Path, json: bool, verbose: bool) -> Result<()> {
    let tree = load_tree(tree_path)?;
    let mut table = load_table(file)?;

    let labels = tree.predict(&mut table)?;
    if verbose {
        output::info(&format!(
            "classified {} rows with a depth {} tree on '{}'",
            labels.len(),
            tree.depth(),
            tree.column
        ));
    }

    if json {
        println!("{}", serde_json::to_string(&labels)?);
    } else {
        for label in &labels {
            println!("{label}");
        }
    }
    Ok(())
}
