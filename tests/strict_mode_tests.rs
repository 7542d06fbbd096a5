use ddl2tsv::extractor::column_extractor;

const NO_ENGINE: &str = "CREATE TABLE `t` (\n  `a` int\n)";
const NOT_DDL: &str = "SELECT `a` FROM `t`;";

#[test]
fn lenient_extraction_degrades_to_empty() {
    assert!(column_extractor::extract_columns(NO_ENGINE).is_empty());
    assert!(column_extractor::extract_columns(NOT_DDL).is_empty());
    assert!(column_extractor::extract_table(NO_ENGINE).is_none());
    assert!(column_extractor::extract_tables(NOT_DDL).is_empty());
}

#[test]
fn strict_extraction_surfaces_missing_span() {
    let err = column_extractor::extract_table_strict(NO_ENGINE)
        .expect_err("missing ENGINE terminator should fail in strict mode");
    assert!(err.contains("No CREATE TABLE ... ENGINE statement found"));

    let err = column_extractor::extract_table_strict(NOT_DDL)
        .expect_err("non-DDL input should fail in strict mode");
    assert!(err.contains("No CREATE TABLE ... ENGINE statement found"));
}

#[test]
fn strict_extraction_accepts_well_formed_input() {
    let sql = std::fs::read_to_string("tests/fixtures/address.sql").unwrap();
    let table = column_extractor::extract_table_strict(&sql).expect("Address table");
    assert_eq!(table.table_name, "Address");
}
