//! Inspect command implementation
//!
//! Prints a saved tree as a rule listing together with its shape.

use std::path::Path;

use id3::Decision;
use serde::Serialize;

use super::load_tree;
use crate::error::Result;
use crate::output;

/// Tree inspection result for JSON output
#[derive(Serialize)]
struct InspectResult {
    file: String,
    root: String,
    depth: usize,
    leaves: usize,
    columns: Vec<String>,
    classes: Vec<String>,
    rules: Vec<String>,
}

impl InspectResult {
    fn new(path: &Path, tree: &Decision) -> Self {
        Self {
            file: path.display().to_string(),
            root: tree.column.clone(),
            depth: tree.depth(),
            leaves: tree.n_leaves(),
            columns: tree.columns_used().into_iter().map(str::to_string).collect(),
            classes: tree.classes().into_iter().map(str::to_string).collect(),
            rules: tree.to_string().lines().map(str::to_string).collect(),
        }
    }
}

pub(crate) fn run(path: &Path, json: bool, quiet: bool) -> Result<()> {
    let tree = load_tree(path)?;
    let result = InspectResult::new(path, &tree);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if !quiet {
        output::section("Tree");
        output::kv("File", &result.file);
        output::kv("Root split", &result.root);
        output::kv("Depth", result.depth);
        output::kv("Leaves", result.leaves);
        output::kv("Columns", result.columns.join(", "));
        output::kv("Classes", result.classes.join(", "));
        output::section("Rules");
    }
    for rule in &result.rules {
        println!("  {rule}");
    }
    Ok(())
}
