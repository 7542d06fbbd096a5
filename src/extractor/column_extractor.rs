use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::definitions::{is_table_level_clause, split_definitions};
use crate::parser::normalize::normalize_escaped_newlines;
use crate::parser::table_body::{self, TableBody};

/// Leading backtick-quoted identifier of a column definition fragment.
static COLUMN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*`([^`]+)`").expect("column pattern is a valid regex"));

/// A table located in a dump, with its column names in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedTable {
    /// Table name without backticks.
    pub table_name: String,
    /// Column names in order of appearance. Duplicates are kept as-is.
    pub columns: Vec<String>,
}

/// Extract column names from the first `CREATE TABLE` statement in `sql`.
///
/// Returns the backtick-quoted identifiers leading each non-constraint
/// definition fragment, in source order. When no
/// `CREATE TABLE ... ENGINE` span matches, the result is empty.
pub fn extract_columns(sql: &str) -> Vec<String> {
    extract_table(sql).map_or_else(Vec::new, |table| table.columns)
}

/// Like [`extract_columns`], keeping the table name alongside the columns.
pub fn extract_table(sql: &str) -> Option<ExtractedTable> {
    let content = normalize_escaped_newlines(sql);
    table_body::find_table_body(&content).map(|body| collect_columns(&body))
}

/// Extract every table in a dump, in source order.
pub fn extract_tables(sql: &str) -> Vec<ExtractedTable> {
    let content = normalize_escaped_newlines(sql);
    table_body::find_table_bodies(&content)
        .map(|body| collect_columns(&body))
        .collect()
}

/// Strict variant of [`extract_table`]: absence of a matching span is an
/// error instead of a silent empty result.
pub fn extract_table_strict(sql: &str) -> Result<ExtractedTable, String> {
    extract_table(sql)
        .ok_or_else(|| "No CREATE TABLE ... ENGINE statement found in input".to_string())
}

fn collect_columns(body: &TableBody<'_>) -> ExtractedTable {
    let columns = split_definitions(body.body)
        .into_iter()
        .filter(|fragment| !is_table_level_clause(fragment))
        .filter_map(|fragment| {
            COLUMN_RE
                .captures(fragment)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect();

    ExtractedTable {
        table_name: body.table_name.to_string(),
        columns,
    }
}
