pub mod errors;
pub mod span;

pub use errors::LexError;
pub use span::{LineIndex, Position, Span};
