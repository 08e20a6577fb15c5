use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Single-character tokens
    Equals, Greater, Less, Semicolon, Comma, Star, Dot, Exclamation,
    ParenOpen, ParenClose,

    // Keywords
    Select, From, Where, Null, And, Or,

    // Literals
    Symbol, Number, String,
}

impl TokenKind {
    /// Maps one of the fixed punctuation characters to its kind.
    pub fn punctuation(c: char) -> Option<TokenKind> {
        let kind = match c {
            '=' => TokenKind::Equals,
            '>' => TokenKind::Greater,
            '<' => TokenKind::Less,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '*' => TokenKind::Star,
            '.' => TokenKind::Dot,
            '!' => TokenKind::Exclamation,
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Equals => "EQUALS",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Star => "STAR",
            TokenKind::Dot => "DOT",
            TokenKind::Exclamation => "EXCLAMATION",
            TokenKind::ParenOpen => "PARENOPEN",
            TokenKind::ParenClose => "PARENCLOSE",
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::Null => "NULL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 1-based position of a token's first character.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Upper-cased for symbols and keywords, delimiters stripped for strings.
    pub lexeme: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, location: Location) -> Self {
        Token {
            kind,
            lexeme,
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - \"{}\" - {}", self.location, self.lexeme, self.kind)
    }
}
