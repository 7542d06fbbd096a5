/// Assembles column names from located table bodies.
pub mod column_extractor;
