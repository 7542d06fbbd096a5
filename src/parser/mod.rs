/// Fragment splitting and table-level clause detection.
pub mod definitions;
/// Escaped-newline normalization for dump text.
pub mod normalize;
/// Locates `CREATE TABLE ... ENGINE` spans in raw dump text.
pub mod table_body;
