use ddl2tsv::extractor::column_extractor;
use ddl2tsv::output::{formatter, tsv};

fn unique_temp_dir(prefix: &str) -> std::path::PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{nanos}"))
}

#[test]
fn formatter_writes_the_same_header_as_the_tsv_helper() {
    let sql = std::fs::read_to_string("tests/fixtures/address.sql").unwrap();
    let tables = column_extractor::extract_tables(&sql);
    assert_eq!(tables.len(), 1);
    let expected = format!("{}\n", tsv::header_for_table(&tables[0]));

    let out_dir = unique_temp_dir("ddl2tsv_formatter");
    formatter::write_output(&out_dir, "address", &tables).unwrap();
    let written = std::fs::read_to_string(out_dir.join("Address.tsv")).unwrap();

    assert_eq!(
        written, expected,
        "output formatter should match tsv::header_for_table exactly"
    );
}

#[test]
fn formatter_writes_one_header_file_per_table() {
    let sql = std::fs::read_to_string("tests/fixtures/multi_table.sql").unwrap();
    let tables = column_extractor::extract_tables(&sql);

    let out_dir = unique_temp_dir("ddl2tsv_formatter_multi");
    formatter::write_output(&out_dir, "multi_table", &tables).unwrap();

    let entity = std::fs::read_to_string(out_dir.join("Entity.tsv")).unwrap();
    assert_eq!(entity, "entityId\tname\tbalance\tcreated\n");

    let location = std::fs::read_to_string(out_dir.join("EntityLocation.tsv")).unwrap();
    assert_eq!(location, "entityLocationId\tentityId\taddressId\n");

    let manifest =
        std::fs::read_to_string(out_dir.join("multi_table_columns.json")).unwrap();
    let parsed: Vec<column_extractor::ExtractedTable> =
        serde_json::from_str(&manifest).unwrap();
    assert_eq!(parsed, tables);
}
