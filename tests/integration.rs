//! Integration tests for the id3 library.
//!
//! These tests verify end-to-end workflows: CSV on disk, learning, JSON
//! persistence and classification of unseen rows.

use std::io::Write;

use id3::data::{weather, SelectView, View, WEATHER_CSV};
use id3::prelude::*;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write CSV");
    file.flush().expect("flush CSV");
    file
}

#[test]
fn test_csv_learn_save_load_classify_workflow() {
    let file = csv_file(WEATHER_CSV);
    let mut table = Table::from_path(file.path()).expect("CSV parses");
    assert_eq!(table.shape(), (14, 5));

    let mut model = Id3Classifier::new("play");
    model.fit(&mut table).expect("fit");
    assert_eq!(model.score(&mut table).expect("score"), 1.0);

    let dir = tempfile::tempdir().expect("temp dir");
    let tree_path = dir.path().join("tree.json");
    model.save(&tree_path).expect("save");

    let loaded = Id3Classifier::load(&tree_path, "play").expect("load");
    let unseen = csv_file("wind,outlook,humidity\nstrong,rain,normal\nweak,sunny,normal\n");
    let mut unseen = Table::from_path(unseen.path()).expect("CSV parses");
    assert_eq!(
        loaded.predict(&mut unseen).expect("known categories"),
        vec!["no", "yes"]
    );
}

#[test]
fn test_learn_on_filtered_view_matches_learn_on_filtered_copy() {
    let mut table = weather().expect("weather parses");

    let mut rain: SelectView<'_> = table.select("outlook", "rain").expect("outlook visible");
    let mut rest = rain.drop_column("outlook").expect("outlook visible");
    let from_view = learn(&mut rest, "play").expect("learnable");

    let copy: Vec<Vec<String>> = WEATHER_CSV
        .lines()
        .filter(|line| line.starts_with("rain"))
        .map(|line| line.split(',').skip(1).map(str::to_string).collect())
        .collect();
    let columns = ["temperature", "humidity", "wind", "play"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    let mut copy = Table::new(columns, copy).expect("valid copy");
    let from_copy = learn(&mut copy, "play").expect("learnable");

    assert_eq!(from_view, from_copy);
    assert_eq!(from_view.column, "wind");
}

#[test]
fn test_views_leave_the_table_untouched() {
    let mut table = weather().expect("weather parses");
    {
        let mut sunny = table.select("outlook", "sunny").expect("outlook visible");
        let mut view = sunny.drop_column("humidity").expect("humidity visible");
        learn(&mut view, "play").expect("learnable");
    }
    assert_eq!(table.columns().len(), 5);
    assert!(table.columns().iter().all(|name| !name.is_empty()));
    assert_eq!(likelihood(&mut table, "outlook").expect("visible").len(), 3);
}

#[test]
fn test_ragged_csv_reports_line() {
    let file = csv_file("a,b,class\nx,y,1\nx,2\n");
    match Table::from_path(file.path()).unwrap_err() {
        Id3Error::MalformedTable { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_strict_learning_reports_contradiction_path() {
    let file = csv_file("colour,size,ripe\ngreen,small,no\ngreen,small,yes\nred,big,yes\n");
    let mut table = Table::from_path(file.path()).expect("CSV parses");
    let options = LearnOptions::new().with_exhausted_policy(ExhaustedPolicy::Reject);
    let err = learn_with(&mut table, "ripe", &options).unwrap_err();
    assert!(matches!(err, Id3Error::Inconsistent { .. }));
    assert!(err.to_string().contains("colour=green"));
}
