use std::path::{Component, Path};

use crate::extractor::column_extractor::ExtractedTable;
use crate::output::tsv;

/// Write one `<table>.tsv` header file per extracted table plus a
/// `<name>_columns.json` manifest into the output directory.
///
/// Table names come from untrusted dump text and become file names, so both
/// the manifest name and every table name are validated against path
/// traversal before anything is written.
pub fn write_output(
    output_dir: &Path,
    name: &str,
    tables: &[ExtractedTable],
) -> Result<(), String> {
    validate_output_name(name)?;
    for table in tables {
        validate_output_name(&table.table_name)?;
    }

    std::fs::create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create output directory: {e}"))?;

    for table in tables {
        let tsv_path = output_dir.join(format!("{}.tsv", table.table_name));
        let mut header = tsv::header_for_table(table);
        header.push('\n');
        std::fs::write(&tsv_path, &header)
            .map_err(|e| format!("Failed to write {}: {e}", tsv_path.display()))?;
    }

    let manifest_path = output_dir.join(format!("{name}_columns.json"));
    let manifest = serde_json::to_string_pretty(tables)
        .map_err(|e| format!("Failed to serialize column manifest: {e}"))?;
    std::fs::write(&manifest_path, &manifest)
        .map_err(|e| format!("Failed to write {}: {e}", manifest_path.display()))?;

    Ok(())
}

fn validate_output_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Output name must not be empty".to_string());
    }
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return Err(format!(
            "Invalid output name '{name}': absolute paths are not allowed"
        ));
    }
    if candidate.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    }) {
        return Err(format!(
            "Invalid output name '{name}': traversal segments are not allowed"
        ));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!(
            "Invalid output name '{name}': path separators are not allowed"
        ));
    }
    Ok(())
}
