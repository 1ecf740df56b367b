pub mod cursor;
pub mod token;

mod scanner;

pub use scanner::{tokenize, Tokenizer};
pub use token::{Token, TokenKind, TokenValue};
