use std::borrow::Cow;

/// Replace literal `\n` escape sequences with real newlines.
///
/// Dump files exported through intermediate tooling sometimes store the
/// statement as a single line with two-character `\n` sequences where the
/// original had newlines. Borrows when nothing needs rewriting.
pub fn normalize_escaped_newlines(sql: &str) -> Cow<'_, str> {
    if sql.contains("\\n") {
        Cow::Owned(sql.replace("\\n", "\n"))
    } else {
        Cow::Borrowed(sql)
    }
}
