use std::sync::LazyLock;

use regex::Regex;

/// Matches `CREATE TABLE \`name\` ( body ) ENGINE` case-insensitively, with
/// the body allowed to cross line boundaries. The body capture is non-greedy,
/// so it ends at the first closing parenthesis immediately preceding the
/// `ENGINE` keyword.
static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)CREATE TABLE\s+`([^`]+)`\s*\((.+?)\)\s*ENGINE")
        .expect("table pattern is a valid regex")
});

/// A located `CREATE TABLE` span: the table name and its parenthesized body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBody<'a> {
    /// Table name without the surrounding backticks.
    pub table_name: &'a str,
    /// Text between the opening parenthesis and the `) ENGINE` terminator.
    pub body: &'a str,
}

/// Locate the first `CREATE TABLE ... ENGINE` span in `sql`.
pub fn find_table_body(sql: &str) -> Option<TableBody<'_>> {
    TABLE_RE.captures(sql).map(|caps| TableBody {
        table_name: caps.get(1).map_or("", |m| m.as_str()),
        body: caps.get(2).map_or("", |m| m.as_str()),
    })
}

/// Iterate every `CREATE TABLE ... ENGINE` span in a dump, in source order.
pub fn find_table_bodies<'a>(sql: &'a str) -> impl Iterator<Item = TableBody<'a>> + 'a {
    TABLE_RE.captures_iter(sql).map(|caps| TableBody {
        table_name: caps.get(1).map_or("", |m| m.as_str()),
        body: caps.get(2).map_or("", |m| m.as_str()),
    })
}
