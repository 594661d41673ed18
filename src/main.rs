mod builtins;
mod cli;
mod error;
mod naming;
mod registry;
mod walker;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use error::SchemaError;
use registry::UserTypeRegistry;
use walker::{walk, WalkOptions};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let opts = WalkOptions {
        fail_on_unknown: cli.fail,
        normalize: !cli.as_is,
    };

    for path in &cli.xsd {
        match convert_file(path, opts) {
            Ok(sql) => println!("{sql}"),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// Translates one XSD file into a block of `CREATE TABLE` statements. Each
/// file gets a fresh type registry; declarations never leak across files.
fn convert_file(path: &Path, opts: WalkOptions) -> Result<String, SchemaError> {
    let text = std::fs::read_to_string(path)?;
    let doc = roxmltree::Document::parse(&text)?;
    let root = doc.root_element();

    let registry = UserTypeRegistry::from_schema(root);

    // The file-derived table name is normalized regardless of `--as-is`.
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("schema");
    let walked = walk(root, &naming::normalize(stem), 0, &registry, opts)?;
    if walked.sql.trim().is_empty() {
        return Err(SchemaError::EmptyOutput);
    }
    Ok(collapse_newlines(&walked.sql).trim_end().to_owned())
}

/// The walk interleaves subtree output with newline separators; runs of
/// consecutive newlines collapse to a single one before printing.
fn collapse_newlines(sql: &str) -> String {
    let mut out = sql.to_owned();
    while out.contains("\n\n") {
        out = out.replace("\n\n", "\n");
    }
    out
}
