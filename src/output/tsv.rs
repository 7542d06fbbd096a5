use crate::extractor::column_extractor::ExtractedTable;

/// Join column names into a single tab-separated header line, no trailing
/// newline.
pub fn header_line(columns: &[String]) -> String {
    columns.join("\t")
}

/// Header line for an extracted table.
pub fn header_for_table(table: &ExtractedTable) -> String {
    header_line(&table.columns)
}
