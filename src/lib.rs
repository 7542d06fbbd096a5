//! Extract column names from `MySQL` `CREATE TABLE` dumps and generate TSV headers.
#![warn(missing_docs)]

/// Column extraction from located table definitions.
pub mod extractor;
/// TSV header rendering and output file writing.
pub mod output;
/// Text-level mechanics: normalization, table-body location, fragment splitting.
pub mod parser;
