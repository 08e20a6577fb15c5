pub mod keywords;
pub mod scanner;
pub mod token;
pub mod validator;

pub use scanner::{ScanError, Scanner};
pub use token::{Location, Token, TokenKind};
pub use validator::{validate, State, Validator};
