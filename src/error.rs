use thiserror::Error;

use crate::walker::MAX_RECURSE_LEVEL;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// A column's declared type resolved through neither the built-in table
    /// nor the user type registry. Only raised in strict mode.
    #[error("{0} is an invalid XSD type")]
    InvalidType(String),

    #[error("schema nesting exceeds {} levels", MAX_RECURSE_LEVEL)]
    MaxRecursion,

    #[error("failed to read the schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("the schema failed to parse: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The walker returned no SQL for a syntactically valid schema root,
    /// which the core contract rules out.
    #[error("no tables could be derived from the schema")]
    EmptyOutput,
}
