use thiserror::Error;
use tracing::Level;

use super::{keywords, token::{Location, Token, TokenKind}};
use crate::diagnostics::{DiagnosticSink, NullSink};

const QUOTE: char = '\'';

/// Fatal lexical failures. Scanning stops at the first one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("unterminated string starting at {location}")]
    UnterminatedString { location: Location },
}

/// Turns query text into tokens, one [`Scanner::next_token`] call at a time.
pub struct Scanner<'a> {
    source: &'a str,
    sink: &'a dyn DiagnosticSink,
    start: usize,
    current: usize,
    line: usize,
    /// Characters consumed since the start of the current line.
    column: usize,
    halted: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner::with_sink(source, &NullSink)
    }

    pub fn with_sink(source: &'a str, sink: &'a dyn DiagnosticSink) -> Self {
        Scanner {
            source,
            sink,
            start: 0,
            current: 0,
            line: 1,
            column: 0,
            halted: false,
        }
    }

    /// Scans the whole input, or fails on the first fatal error without
    /// returning any of the tokens seen before it.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>, ScanError> {
        self.by_ref().collect()
    }

    /// Returns the next token, `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        if self.halted {
            return Ok(None);
        }
        self.skip_whitespace();

        if self.is_at_end() {
            self.sink.emit(
                Level::DEBUG,
                format_args!("reached end of input at {}", self.location()),
            );
            return Ok(None);
        }

        self.start = self.current;
        let location = self.location();
        let c = self.advance();
        let token = if let Some(kind) = TokenKind::punctuation(c) {
            // Checked first so '*' and friends never end up inside a symbol.
            Token::new(kind, c.to_string(), location)
        } else if c == QUOTE {
            self.string(location)?
        } else if c.is_ascii_digit() {
            self.number(location)
        } else {
            self.symbol(location)
        };

        self.sink.emit(Level::TRACE, format_args!("scanned {token}"));
        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.newline_aware_advance();
        }
    }

    fn string(&mut self, location: Location) -> Result<Token, ScanError> {
        while !self.is_at_end() && self.peek() != QUOTE {
            self.newline_aware_advance();
        }

        if self.is_at_end() {
            return Err(self.fail(ScanError::UnterminatedString { location }));
        }

        // The closing quote
        self.advance();

        let value = &self.source[self.start + QUOTE.len_utf8()..self.current - QUOTE.len_utf8()];
        Ok(Token::new(TokenKind::String, value.to_string(), location))
    }

    fn number(&mut self, location: Location) -> Token {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }
        let literal = &self.source[self.start..self.current];
        Token::new(TokenKind::Number, literal.to_string(), location)
    }

    fn symbol(&mut self, location: Location) -> Token {
        while !self.is_at_end() && is_symbol_char(self.peek()) {
            self.advance();
        }

        let text = self.source[self.start..self.current].to_uppercase();
        let kind = keywords::get(&text).unwrap_or(TokenKind::Symbol);
        Token::new(kind, text, location)
    }

    fn fail(&mut self, error: ScanError) -> ScanError {
        self.halted = true;
        self.sink.emit(Level::ERROR, format_args!("{error}"));
        error
    }

    /// Location of the character under the cursor.
    fn location(&self) -> Location {
        Location::new(self.line, self.column + 1)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += c.len_utf8();
        self.column += 1;
        c
    }

    fn newline_aware_advance(&mut self) {
        if self.advance() == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Characters allowed inside a symbol run: anything that is not whitespace,
/// punctuation or a string delimiter. `-1` and `:name` come out as symbols.
fn is_symbol_char(c: char) -> bool {
    !c.is_whitespace() && c != QUOTE && TokenKind::punctuation(c).is_none()
}
