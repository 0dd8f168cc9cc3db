//! Learn command implementation
//!
//! Learns a tree from a CSV file and writes it as JSON, either to a file or
//! to stdout.

use std::path::Path;

use id3::data::View;
use id3::serialization::to_json;
use id3::stats::information_gain;
use id3::tree::{learn_with, ExhaustedPolicy, Id3Classifier, LearnOptions};
use serde::Serialize;

use super::load_table;
use crate::error::Result;
use crate::output;

/// Learn options collected from the command line.
pub(crate) struct LearnArgs<'a> {
    pub(crate) file: &'a Path,
    pub(crate) class: &'a str,
    pub(crate) output: Option<&'a Path>,
    pub(crate) strict: bool,
    pub(crate) json: bool,
    pub(crate) verbose: bool,
    pub(crate) quiet: bool,
}

/// Learning summary for JSON output
#[derive(Serialize)]
struct LearnResult {
    file: String,
    class: String,
    rows: usize,
    root: String,
    depth: usize,
    leaves: usize,
    accuracy: f64,
    output: String,
}

pub(crate) fn run(args: &LearnArgs<'_>) -> Result<()> {
    let mut table = load_table(args.file)?;
    let rows = table.n_rows();

    if args.verbose {
        output::info(&format!("{rows} rows, predicting '{}'", args.class));
        let columns = table.columns().into_owned();
        for column in columns.iter().filter(|c| *c != args.class) {
            let gain = information_gain(&mut table, column, args.class)?;
            output::info(&format!("gain({column}) = {gain:.4}"));
        }
    }

    let policy = if args.strict {
        ExhaustedPolicy::Reject
    } else {
        ExhaustedPolicy::MajorityClass
    };
    let options = LearnOptions::new().with_exhausted_policy(policy);
    let tree = learn_with(&mut table, args.class, &options)?;

    let root = tree.column.clone();
    let depth = tree.depth();
    let leaves = tree.n_leaves();
    let json = to_json(&tree, true)?;
    let accuracy = Id3Classifier::from_tree(args.class, tree).score(&mut table)?;

    let Some(path) = args.output else {
        println!("{json}");
        if args.verbose {
            output::info(&format!(
                "root '{root}', depth {depth}, {leaves} leaves, training accuracy {}",
                output::percent(accuracy)
            ));
        }
        return Ok(());
    };

    std::fs::write(path, &json)?;

    if args.quiet {
        return Ok(());
    }
    if args.json {
        let result = LearnResult {
            file: args.file.display().to_string(),
            class: args.class.to_string(),
            rows,
            root,
            depth,
            leaves,
            accuracy,
            output: path.display().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::section("Learned Tree");
    output::kv("Training data", args.file.display());
    output::kv("Rows", rows);
    output::kv("Class column", args.class);
    output::kv("Root split", &root);
    output::kv("Depth", depth);
    output::kv("Leaves", leaves);
    output::kv("Training accuracy", output::percent(accuracy));
    if accuracy < 1.0 {
        output::warning("training rows contradict each other; some leaves use the majority class");
    }
    output::success(&format!("tree written to {}", path.display()));
    Ok(())
}
