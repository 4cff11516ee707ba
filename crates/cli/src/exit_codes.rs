//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of the
//! shell contract; scripts rely on them.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | General error (unspecified)               |
//! | 2    | CLI usage error (bad args)                |
//! | 3    | Input CSV schema mismatch                 |
//! | 4    | Invalid config (TOML or ignore pattern)   |
//! | 5    | Runtime / IO error                        |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
#[allow(dead_code)]
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
#[allow(dead_code)]
pub const EXIT_USAGE: u8 = 2;

/// Input CSV headers do not match the expected six-field export schema.
pub const EXIT_SCHEMA: u8 = 3;

/// Config failed to parse or validate (includes bad ignore patterns).
pub const EXIT_CONFIG: u8 = 4;

/// File IO or CSV read failure.
pub const EXIT_RUNTIME: u8 = 5;
