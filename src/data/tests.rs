//! Tests for tables and views.

use super::*;

fn collect(view: &mut dyn View) -> Vec<Vec<String>> {
    view.reset();
    let mut rows = Vec::new();
    while let Some(row) = view.next_row() {
        rows.push(row.to_vec());
    }
    rows
}

fn records(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| (*s).to_string()).collect())
        .collect()
}

#[test]
fn test_table_reads_weather() {
    let mut table = weather().expect("weather parses");
    assert_eq!(table.shape(), (14, 5));
    assert_eq!(table.header()[4], "play");

    let row = table.next_row().expect("first row");
    assert_eq!(row.len(), 5);
    assert_eq!(row[0], "sunny");
}

#[test]
fn test_table_header_only_is_empty() {
    let table = Table::from_reader("a,b\n".as_bytes()).expect("header only");
    assert!(table.is_empty());
    assert_eq!(table.shape(), (0, 2));
}

#[test]
fn test_table_rejects_ragged_rows() {
    let err = Table::from_reader("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
    assert!(matches!(err, Id3Error::MalformedTable { .. }));
}

#[test]
fn test_table_rejects_ragged_records_with_line() {
    let err = Table::from_records(records(&[&["a", "b"], &["1", "2"], &["3"]])).unwrap_err();
    match err {
        Id3Error::MalformedTable { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("expected 2 fields"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_table_rejects_duplicate_columns() {
    let err = Table::from_records(records(&[&["a", "a"], &["1", "2"]])).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn test_table_rejects_blank_column_name() {
    let err = Table::from_records(records(&[&["a", ""], &["1", "2"]])).unwrap_err();
    assert!(err.to_string().contains("empty name"));
}

#[test]
fn test_table_rejects_missing_header() {
    assert!(Table::from_records(Vec::new()).is_err());
    assert!(Table::from_reader("".as_bytes()).is_err());
}

#[test]
fn test_table_from_missing_path_is_io_error() {
    let err = Table::from_path("/nonexistent/weather.csv").unwrap_err();
    assert!(matches!(err, Id3Error::Io(_)));
}

#[test]
fn test_cursor_exhausts_and_resets() {
    let mut table = weather().expect("weather parses");
    assert_eq!(count_rows(&mut table), 14);
    assert!(table.next_row().is_none());
    assert!(table.current().is_none());

    table.reset();
    table.reset();
    assert_eq!(table.next_row().map(|row| row[0].clone()), Some("sunny".into()));
}

#[test]
fn test_select_overcast() {
    let mut table = weather().expect("weather parses");
    let mut overcast = table.select("outlook", "overcast").expect("outlook visible");
    overcast.reset();

    for _ in 0..4 {
        let row = overcast.next_row().expect("four overcast rows");
        assert_eq!(row[0], "overcast");
    }
    assert!(overcast.next_row().is_none());
}

#[test]
fn test_select_rain_rows() {
    let mut table = weather().expect("weather parses");
    let mut rain = table.select("outlook", "rain").expect("outlook visible");
    assert_eq!(collect(&mut rain).len(), 5);
}

#[test]
fn test_select_unknown_value_is_empty() {
    let mut table = weather().expect("weather parses");
    let mut foggy = table.select("outlook", "foggy").expect("outlook visible");
    assert!(collect(&mut foggy).is_empty());
}

#[test]
fn test_select_unknown_column_fails() {
    let mut table = weather().expect("weather parses");
    let err = table.select("pressure", "low").err().expect("pressure missing");
    assert!(matches!(err, Id3Error::ColumnNotFound { .. }));
}

#[test]
fn test_nested_select() {
    let mut table = weather().expect("weather parses");
    let mut sunny = table.select("outlook", "sunny").expect("outlook visible");
    let mut high = sunny.select("humidity", "high").expect("humidity visible");
    let rows = collect(&mut high);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row[0] == "sunny" && row[2] == "high"));
}

#[test]
fn test_drop_blanks_column_name_only() {
    let mut table = weather().expect("weather parses");
    let mut dropped = table.drop_column("outlook").expect("outlook visible");

    let columns = dropped.columns().into_owned();
    assert_eq!(columns.len(), 5);
    assert_eq!(columns[0], "");
    assert_eq!(columns[1], "temperature");

    let rows = collect(&mut dropped);
    assert_eq!(rows.len(), 14);
    assert_eq!(rows[0][0], "sunny");
}

#[test]
fn test_dropped_column_is_not_found() {
    let mut table = weather().expect("weather parses");
    let mut dropped = table.drop_column("outlook").expect("outlook visible");

    assert!(dropped.position("outlook").is_err());
    assert!(dropped.select("outlook", "sunny").is_err());
    assert!(dropped.drop_column("outlook").is_err());
    assert_eq!(dropped.position("play").expect("play visible"), 4);
}

#[test]
fn test_drop_survives_deeper_views() {
    let mut table = weather().expect("weather parses");
    let mut sunny = table.select("outlook", "sunny").expect("outlook visible");
    let mut dropped = sunny.drop_column("outlook").expect("outlook visible");
    let mut no_temp = dropped.drop_column("temperature").expect("temperature visible");
    let mut strong = no_temp.select("wind", "strong").expect("wind visible");

    let columns = strong.columns().into_owned();
    assert_eq!(columns, vec!["", "", "humidity", "wind", "play"]);
    assert!(strong.position("outlook").is_err());

    let rows = collect(&mut strong);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row[0] == "sunny" && row[3] == "strong"));
}

#[test]
fn test_find_never_matches_hidden_placeholder() {
    let columns = vec!["a".to_string(), String::new()];
    assert!(find(&columns, "").is_err());
    assert_eq!(find(&columns, "a").expect("a present"), 0);
}

#[test]
fn test_reset_is_repeatable() {
    let mut table = weather().expect("weather parses");
    let mut sunny = table.select("outlook", "sunny").expect("outlook visible");
    let first = collect(&mut sunny);
    let second = collect(&mut sunny);
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[test]
fn test_select_value_accessor() {
    let mut table = weather().expect("weather parses");
    let sunny = table.select("outlook", "sunny").expect("outlook visible");
    assert_eq!(sunny.value(), "sunny");
}
