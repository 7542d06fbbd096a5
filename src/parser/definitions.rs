/// Keywords marking a fragment as a table-level constraint or index clause
/// rather than a column definition. `KEY ` and `INDEX ` carry a trailing
/// space so column names containing those words do not match.
const TABLE_LEVEL_KEYWORDS: [&str; 6] = [
    "PRIMARY KEY",
    "UNIQUE KEY",
    "KEY ",
    "INDEX ",
    "CONSTRAINT",
    "FOREIGN KEY",
];

/// Split a table body into comma-separated definition fragments.
///
/// Commas inside parentheses (type parameters such as `decimal(10,2)`, key
/// column lists) and inside single-quoted strings (default values, comments)
/// do not split. Fragments are trimmed; empty fragments are dropped.
pub fn split_definitions(body: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut start = 0usize;

    for (idx, ch) in body.char_indices() {
        match ch {
            '\'' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => depth = depth.saturating_sub(1),
            ',' if !in_string && depth == 0 => {
                let fragment = body[start..idx].trim();
                if !fragment.is_empty() {
                    fragments.push(fragment);
                }
                start = idx + 1;
            }
            _ => {}
        }
    }

    let last = body[start..].trim();
    if !last.is_empty() {
        fragments.push(last);
    }
    fragments
}

/// True when the fragment describes a table-level constraint or index
/// rather than a column.
pub fn is_table_level_clause(fragment: &str) -> bool {
    let upper = fragment.to_ascii_uppercase();
    TABLE_LEVEL_KEYWORDS
        .iter()
        .any(|keyword| upper.contains(keyword))
}
