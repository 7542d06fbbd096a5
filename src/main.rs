//! CLI entry point for `ddl2tsv`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use ddl2tsv::extractor::column_extractor::{self, ExtractedTable};
use ddl2tsv::output::{formatter, tsv};

#[derive(Parser)]
#[command(
    name = "ddl2tsv",
    about = "Extract column names from MySQL CREATE TABLE dumps and generate TSV headers"
)]
struct Cli {
    /// Input SQL dump files
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Write one <table>.tsv header file per table plus a JSON column
    /// manifest into this directory instead of printing to stdout
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Fail on inputs with no CREATE TABLE ... ENGINE statement instead of
    /// skipping them
    #[arg(long)]
    strict: bool,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut tables: Vec<ExtractedTable> = Vec::new();
    let mut any_empty_input = false;

    for path in &cli.input {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(2);
            }
        };

        let extracted = column_extractor::extract_tables(&content);
        if extracted.is_empty() {
            if cli.strict {
                eprintln!(
                    "Error in {}: no CREATE TABLE ... ENGINE statement found",
                    path.display()
                );
                process::exit(2);
            }
            eprintln!(
                "Warning: {} contains no CREATE TABLE ... ENGINE statement",
                path.display()
            );
            any_empty_input = true;
        }

        if cli.verbose {
            let column_count: usize = extracted.iter().map(|t| t.columns.len()).sum();
            eprintln!(
                "Extracted {} tables, {} columns from {}",
                extracted.len(),
                column_count,
                path.display()
            );
        }
        tables.extend(extracted);
    }

    match &cli.output_dir {
        Some(output_dir) => {
            // Derive the manifest name from the first input file.
            let name = cli
                .input
                .first()
                .and_then(|p| p.file_stem())
                .and_then(|s| s.to_str())
                .unwrap_or("dump");

            if let Err(e) = formatter::write_output(output_dir, name, &tables) {
                eprintln!("Error writing output: {e}");
                process::exit(2);
            }
        }
        None => {
            for table in &tables {
                println!("{}: {}", table.table_name, tsv::header_for_table(table));
            }
        }
    }

    if any_empty_input {
        process::exit(1);
    }
}
