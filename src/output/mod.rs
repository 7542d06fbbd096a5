/// Writes per-table TSV header files and a JSON column manifest.
pub mod formatter;
/// Renders a TSV header line from extracted column names.
pub mod tsv;
