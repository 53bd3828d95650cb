// src/query/mod.rs

use crate::table::Row;

/// Every value seen for `field` across `rows`, deduplicated by exact
/// (case-sensitive) equality and sorted ascending.
///
/// A row with no value for `field` contributes `None`, which participates in
/// dedup and sorting like any other value; `Option`'s ordering places it
/// before every present value. An empty string is a present value, distinct
/// from absent.
pub fn distinct_values(rows: &[Row], field: &str) -> Vec<Option<String>> {
    let mut values: Vec<Option<String>> = Vec::new();

    for row in rows {
        let value = row.get(field).cloned();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    values.sort();
    values
}

/// Rows whose value at `column` case-insensitively contains `term`, in
/// original order. An absent value never matches; an empty `term` matches
/// every row where the column is present. Duplicates are not collapsed.
pub fn find_by_column_and_value<'a>(rows: &'a [Row], column: &str, term: &str) -> Vec<&'a Row> {
    let needle = term.to_lowercase();

    rows.iter()
        .filter(|row| {
            row.get(column)
                .map(|value| value.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}

/// Rows where any column's value case-insensitively contains `term`, in
/// original order, each row at most once.
///
/// Columns are scanned in the row's own key order; the first hit includes the
/// row and skips its remaining columns. Rows with identical content collapse
/// to a single entry in the output.
pub fn find_by_value<'a>(rows: &'a [Row], term: &str) -> Vec<&'a Row> {
    let needle = term.to_lowercase();
    let mut results: Vec<&Row> = Vec::new();

    for row in rows {
        for value in row.values() {
            if value.to_lowercase().contains(&needle) {
                if !results.iter().any(|r| *r == row) {
                    results.push(row);
                }
                break;
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample() -> Vec<Row> {
        vec![
            row(&[("title", "Engineer"), ("city", "Reno")]),
            row(&[("title", "engineer II"), ("city", "Boise")]),
            row(&[("title", "Nurse"), ("city", "RENO")]),
        ]
    }

    #[test]
    fn test_distinct_values_sorted_case_sensitive() {
        let rows = sample();
        // ASCII sort: capitals before lowercase, so "RENO" < "Reno"
        assert_eq!(
            distinct_values(&rows, "city"),
            vec![
                Some("Boise".to_string()),
                Some("RENO".to_string()),
                Some("Reno".to_string())
            ]
        );
    }

    #[test]
    fn test_distinct_values_suppresses_duplicates() {
        let mut rows = sample();
        rows.push(row(&[("title", "Chef"), ("city", "Reno")]));
        let values = distinct_values(&rows, "city");
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_distinct_values_unknown_field_is_single_absent() {
        let rows = sample();
        assert_eq!(distinct_values(&rows, "salary"), vec![None]);
    }

    #[test]
    fn test_distinct_values_absent_sorts_first() {
        let mut rows = sample();
        rows.push(row(&[("title", "Chef")])); // no city
        let values = distinct_values(&rows, "city");
        assert_eq!(values[0], None);
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn test_distinct_values_empty_string_is_not_absent() {
        let rows = vec![row(&[("city", "")]), row(&[("title", "Chef")])];
        assert_eq!(
            distinct_values(&rows, "city"),
            vec![None, Some(String::new())]
        );
    }

    #[test]
    fn test_find_by_column_case_insensitive_in_order() {
        let rows = sample();
        let hits = find_by_column_and_value(&rows, "title", "engineer");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].get("city").map(String::as_str), Some("Reno"));
        assert_eq!(hits[1].get("city").map(String::as_str), Some("Boise"));
    }

    #[test]
    fn test_find_by_column_empty_term_matches_all_present() {
        let mut rows = sample();
        rows.push(row(&[("title", "Chef")])); // no city column
        let hits = find_by_column_and_value(&rows, "city", "");
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_find_by_column_absent_never_matches() {
        let rows = sample();
        assert!(find_by_column_and_value(&rows, "salary", "").is_empty());
    }

    #[test]
    fn test_find_by_column_keeps_identical_rows() {
        let rows = vec![
            row(&[("title", "Engineer")]),
            row(&[("title", "Engineer")]),
        ];
        assert_eq!(find_by_column_and_value(&rows, "title", "eng").len(), 2);
    }

    #[test]
    fn test_find_by_value_any_column_in_order() {
        let rows = sample();
        let hits = find_by_value(&rows, "reno");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].get("title").map(String::as_str), Some("Engineer"));
        assert_eq!(hits[1].get("title").map(String::as_str), Some("Nurse"));
    }

    #[test]
    fn test_find_by_value_row_included_once() {
        // "e" appears in both columns of the first row
        let rows = vec![row(&[("title", "Engineer"), ("city", "Reno")])];
        assert_eq!(find_by_value(&rows, "e").len(), 1);
    }

    #[test]
    fn test_find_by_value_collapses_identical_rows() {
        let rows = vec![
            row(&[("title", "Engineer")]),
            row(&[("title", "Engineer")]),
        ];
        assert_eq!(find_by_value(&rows, "eng").len(), 1);
    }

    #[test]
    fn test_find_by_value_empty_term() {
        let mut rows = sample();
        rows.push(Row::new()); // no columns at all
        let hits = find_by_value(&rows, "");
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_find_by_value_no_match() {
        let rows = sample();
        assert!(find_by_value(&rows, "plumber").is_empty());
    }
}
