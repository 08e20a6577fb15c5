//! Grammar diagnostics and the sink the scanner and validator report through.

use std::fmt;

use tracing::Level;

use crate::sql::token::{Token, TokenKind};
use crate::sql::validator::State;

/// The set of token kinds acceptable at some position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    pub kinds: &'static [TokenKind],
    /// Whether running out of tokens is acceptable here.
    pub end_of_input: bool,
}

impl Expected {
    pub const NOTHING: Expected = Expected::kinds(&[]);

    pub const fn kinds(kinds: &'static [TokenKind]) -> Self {
        Expected {
            kinds,
            end_of_input: false,
        }
    }

    pub const fn or_end(kinds: &'static [TokenKind]) -> Self {
        Expected {
            kinds,
            end_of_input: true,
        }
    }

    pub fn allows(&self, kind: TokenKind) -> bool {
        self.kinds.contains(&kind)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.kinds.iter().map(TokenKind::name).collect::<Vec<_>>();
        if self.end_of_input {
            names.push("end of input");
        }
        if names.is_empty() {
            return f.write_str("nothing");
        }
        f.write_str(&names.join(" or "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The first token of the input is not `SELECT`.
    MissingSelect,
    /// The next token's kind is not in the expected set.
    UnexpectedToken,
    /// The token needs a successor but it is the last one.
    UnexpectedEndOfInput,
    /// Something other than a new statement follows a `;`.
    TrailingToken,
    /// No grammar rule covers this token in the current state.
    UnhandledToken { state: State },
}

/// A soft grammar failure attached to the token that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub token: Token,
    pub expected: Expected,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, token: Token, expected: Expected) -> Self {
        Diagnostic {
            kind,
            token,
            expected,
        }
    }

    pub fn message(&self) -> String {
        let token = &self.token;
        match self.kind {
            DiagnosticKind::MissingSelect => format!(
                "expected {} at the start of a statement but got \"{}\" of type {}",
                self.expected, token.lexeme, token.kind
            ),
            DiagnosticKind::UnexpectedToken => format!(
                "expected {} but got \"{}\" of type {}",
                self.expected, token.lexeme, token.kind
            ),
            DiagnosticKind::UnexpectedEndOfInput => format!(
                "expected {} after \"{}\" but there are no more tokens",
                self.expected, token.lexeme
            ),
            DiagnosticKind::TrailingToken => format!(
                "expected {} after ';' but got \"{}\" of type {}",
                self.expected, token.lexeme, token.kind
            ),
            DiagnosticKind::UnhandledToken { state } => format!(
                "unhandled token \"{}\" of type {} in {state:?}",
                token.lexeme, token.kind
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token.location, self.message())
    }
}

/// Receives progress and error messages as they are produced.
pub trait DiagnosticSink {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _level: Level, _message: fmt::Arguments<'_>) {}
}

/// Forwards every message as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        if level == Level::ERROR {
            tracing::error!("{message}");
        } else if level == Level::WARN {
            tracing::warn!("{message}");
        } else if level == Level::INFO {
            tracing::info!("{message}");
        } else if level == Level::DEBUG {
            tracing::debug!("{message}");
        } else {
            tracing::trace!("{message}");
        }
    }
}
