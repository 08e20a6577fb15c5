use soql_check::sql::Location;
use soql_check::{check, DiagnosticKind, ScanError, Scanner, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Scanner::new(source)
        .scan_tokens()
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn whitespace_only_input() {
    assert!(kinds(" \n\t ").is_empty());
    assert_eq!(check(" \n\t "), Ok(vec![]));
}

#[test]
fn valid_statement() {
    let source = "SELECT Id, Name FROM Account WHERE Id = '1';";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Select,
            TokenKind::Symbol,
            TokenKind::Comma,
            TokenKind::Symbol,
            TokenKind::From,
            TokenKind::Symbol,
            TokenKind::Where,
            TokenKind::Symbol,
            TokenKind::Equals,
            TokenKind::String,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(check(source), Ok(vec![]));
}

#[test]
fn invalid_statement() {
    let diagnostics = check("SELECT FROM Account;").unwrap();
    let diagnostic = diagnostics
        .iter()
        .find(|d| d.token.kind == TokenKind::From)
        .expect("no diagnostic for FROM");
    assert_eq!(diagnostic.kind, DiagnosticKind::UnexpectedToken);
    assert_eq!(
        diagnostic.expected.kinds,
        &[
            TokenKind::Symbol,
            TokenKind::Star,
            TokenKind::String,
            TokenKind::Number
        ]
    );
    assert_eq!(
        diagnostic.to_string(),
        "1:8: expected SYMBOL or STAR or STRING or NUMBER but got \"FROM\" of type FROM"
    );
}

#[test]
fn chained_statements() {
    assert_eq!(
        check("SELECT Id FROM Account;\nSELECT Name FROM Contact WHERE Id = 2;"),
        Ok(vec![])
    );

    let diagnostics = check("SELECT Id Name FROM Account;\nSELECT Name FROM Contact;").unwrap();
    assert!(!diagnostics.is_empty());
    assert!(diagnostics.iter().all(|d| d.token.location.line == 1));
}

#[test]
fn boolean_condition_lists() {
    assert_eq!(
        check("SELECT a FROM t WHERE a = 1 AND b = 2 OR c = 3;"),
        Ok(vec![])
    );

    let diagnostics = check("SELECT a FROM t WHERE a = 1 b b = 2 OR c = 3;").unwrap();
    assert_eq!(diagnostics[0].token.lexeme, "B");
    assert_eq!(diagnostics[0].token.location, Location::new(1, 29));
}

#[test]
fn unterminated_string_is_distinct_from_diagnostics() {
    assert_eq!(
        check("SELECT Id FROM Account WHERE Name = 'Acme;"),
        Err(ScanError::UnterminatedString {
            location: Location::new(1, 37)
        })
    );
}

#[test]
fn multi_line_query_locations() {
    let diagnostics = check("SELECT Id\nFROM Account\nWHERE Id = ;").unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].token.kind, TokenKind::Semicolon);
    assert_eq!(diagnostics[0].token.location, Location::new(3, 12));
}

#[test]
fn unusual_characters_are_soft_errors() {
    assert_eq!(
        check("SELECT Id FROM Opportunity WHERE Amount > -1 AND OwnerId = :owner;"),
        Ok(vec![])
    );

    let diagnostics = check("SELECT Id FROM Task WHERE d = 2020-01-01;").unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnexpectedToken);
    assert_eq!(diagnostics[0].token.lexeme, "-01-01");
    assert_eq!(diagnostics[0].token.location, Location::new(1, 35));
}
