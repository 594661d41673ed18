use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Create database DDL from an XSD schema. SQL is output to stdout.")]
pub struct Cli {
    #[arg(
        required = true,
        value_name = "FILE",
        help = "XSD file to base the database schema on"
    )]
    pub xsd: Vec<PathBuf>,

    #[arg(short = 'f', long, help = "Fail on finding a bad XS type")]
    pub fail: bool,

    #[arg(short = 'a', long = "as-is", help = "Don't normalize element names")]
    pub as_is: bool,
}
