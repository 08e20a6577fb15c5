use tracing::Level;

use super::token::{Token, TokenKind, TokenKind as K};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Expected, NullSink};

const SELECT_ITEMS: Expected = Expected::kinds(&[K::Symbol, K::Star, K::String, K::Number]);
const AFTER_SELECT_ITEM: Expected = Expected::kinds(&[K::Comma, K::From]);
const NEXT_SELECT_ITEM: Expected = Expected::kinds(&[K::Symbol, K::String, K::Number]);
const TABLE: Expected = Expected::kinds(&[K::Symbol]);
const AFTER_TABLE: Expected = Expected::kinds(&[K::Semicolon, K::Where]);
const OPERANDS: Expected = Expected::kinds(&[K::Symbol, K::String, K::Number]);
const OPERATORS: Expected = Expected::kinds(&[K::Exclamation, K::Equals, K::Less, K::Greater]);
const NOT_EQUALS: Expected = Expected::kinds(&[K::Equals]);
const OPERANDS_OR_NULL: Expected = Expected::kinds(&[K::Symbol, K::Null, K::String, K::Number]);
const AFTER_CONDITION: Expected = Expected::kinds(&[K::Semicolon, K::And, K::Or]);
const AFTER_STATEMENT: Expected = Expected::or_end(&[K::Select]);
const STATEMENT_START: Expected = Expected::kinds(&[K::Select]);

/// Where in a statement the validator currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    SelectList,
    FromClause,
    ConditionStart,
    ConditionContinuation,
}

/// What may follow a token, and the state it leaves the validator in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub expected: Expected,
    pub next: State,
}

/// The grammar as a table. `None` means no rule covers `kind` in `state`;
/// parentheses and `.` always land there.
pub fn transition(state: State, kind: TokenKind) -> Option<Transition> {
    let (expected, next) = match (state, kind) {
        (_, K::Select) => (SELECT_ITEMS, State::SelectList),
        (State::SelectList, K::Star | K::Symbol | K::String | K::Number) => {
            (AFTER_SELECT_ITEM, State::SelectList)
        }
        (_, K::Comma) => (NEXT_SELECT_ITEM, State::SelectList),
        (_, K::From) => (TABLE, State::FromClause),
        (State::FromClause, K::Symbol) => (AFTER_TABLE, State::FromClause),
        (_, K::Where) => (OPERANDS, State::ConditionStart),
        (State::ConditionStart, K::Symbol | K::String | K::Number) => {
            (OPERATORS, State::ConditionStart)
        }
        (_, K::Exclamation) => (NOT_EQUALS, State::ConditionStart),
        (_, K::Equals) => (OPERANDS_OR_NULL, State::ConditionContinuation),
        (_, K::Less | K::Greater) => (OPERANDS, State::ConditionContinuation),
        (State::ConditionContinuation, K::Symbol | K::String | K::Number) => {
            (AFTER_CONDITION, State::ConditionContinuation)
        }
        (_, K::And | K::Or) => (OPERANDS, State::ConditionStart),
        (_, K::Null) => (AFTER_CONDITION, State::ConditionContinuation),
        (_, K::Semicolon) => (AFTER_STATEMENT, State::Start),
        (
            _,
            K::Star | K::Symbol | K::String | K::Number | K::Dot | K::ParenOpen | K::ParenClose,
        ) => return None,
    };
    Some(Transition { expected, next })
}

/// Checks a token sequence against the statement grammar.
///
/// Every token is looked at once, together with the one after it. Errors
/// never stop the pass, so one run reports as many problems as it can.
pub struct Validator<'a> {
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Validator<'a> {
    pub fn new() -> Self {
        Validator::with_sink(&NullSink)
    }

    pub fn with_sink(sink: &'a dyn DiagnosticSink) -> Self {
        Validator { sink }
    }

    pub fn validate(&self, tokens: &[Token]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let Some(first) = tokens.first() else {
            return diagnostics;
        };

        if first.kind != K::Select {
            diagnostics.push(self.report(Diagnostic::new(
                DiagnosticKind::MissingSelect,
                first.clone(),
                STATEMENT_START,
            )));
        }

        let mut state = State::Start;
        for (index, token) in tokens.iter().enumerate() {
            self.sink
                .emit(Level::TRACE, format_args!("{token} in {state:?}"));

            let Some(rule) = transition(state, token.kind) else {
                diagnostics.push(self.report(Diagnostic::new(
                    DiagnosticKind::UnhandledToken { state },
                    token.clone(),
                    Expected::NOTHING,
                )));
                continue;
            };

            let expected = rule.expected;
            match tokens.get(index + 1) {
                Some(next) if !expected.allows(next.kind) => {
                    let kind = if expected.end_of_input {
                        DiagnosticKind::TrailingToken
                    } else {
                        DiagnosticKind::UnexpectedToken
                    };
                    diagnostics.push(self.report(Diagnostic::new(kind, next.clone(), expected)));
                }
                None if !expected.end_of_input => {
                    diagnostics.push(self.report(Diagnostic::new(
                        DiagnosticKind::UnexpectedEndOfInput,
                        token.clone(),
                        expected,
                    )));
                }
                _ => {}
            }
            state = rule.next;
        }
        diagnostics
    }

    fn report(&self, diagnostic: Diagnostic) -> Diagnostic {
        self.sink.emit(Level::ERROR, format_args!("{diagnostic}"));
        diagnostic
    }
}

impl Default for Validator<'_> {
    fn default() -> Self {
        Validator::new()
    }
}

/// [`Validator::validate`] with nothing listening.
pub fn validate(tokens: &[Token]) -> Vec<Diagnostic> {
    Validator::new().validate(tokens)
}
