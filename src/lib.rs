//! Tokenizes and syntax-checks `SELECT ... FROM ... WHERE ...;` queries
//! before they are handed to whatever executes them.
//!
//! [`check`] runs the whole pipeline. A scan failure comes back as `Err`,
//! grammar problems come back as a list of [`Diagnostic`]s, and an empty
//! list means the text is accepted.

pub mod diagnostics;
pub mod sql;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, NullSink, TracingSink};
pub use sql::{ScanError, Scanner, Token, TokenKind, Validator};

/// Scans and validates `source` without reporting anywhere.
pub fn check(source: &str) -> Result<Vec<Diagnostic>, ScanError> {
    check_with_sink(source, &NullSink)
}

pub fn check_with_sink(
    source: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Diagnostic>, ScanError> {
    let tokens = Scanner::with_sink(source, sink).scan_tokens()?;
    Ok(Validator::with_sink(sink).validate(&tokens))
}
