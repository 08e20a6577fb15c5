use std::{collections::HashMap, sync::LazyLock};

use super::token::TokenKind;


static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    HashMap::from([
        ("SELECT", TokenKind::Select),
        ("FROM", TokenKind::From),
        ("WHERE", TokenKind::Where),
        ("NULL", TokenKind::Null),
        ("AND", TokenKind::And),
        ("OR", TokenKind::Or),
    ])
});

/// Looks up a reserved word, ignoring case.
pub fn get(text: &str) -> Option<TokenKind> {
    let keyword = text.to_uppercase();
    KEYWORDS.get(keyword.as_str()).copied()
}
