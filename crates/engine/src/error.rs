use std::fmt;

use crate::extract::EXPECTED_FIELDS;

#[derive(Debug)]
pub enum RollupError {
    /// Normalized headers do not match the canonical six-field schema.
    SchemaMismatch { found: Vec<String> },
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// An ignore pattern failed to compile.
    PatternParse { pattern: String, message: String },
    /// IO error (CSV read, etc.).
    Io(String),
}

impl fmt::Display for RollupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaMismatch { found } => {
                write!(
                    f,
                    "unrecognized headers: [{}] (expected [{}])",
                    found.join(", "),
                    EXPECTED_FIELDS.join(", ")
                )
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::PatternParse { pattern, message } => {
                write!(f, "ignore pattern '{pattern}': {message}")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for RollupError {}
