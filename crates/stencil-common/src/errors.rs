use thiserror::Error;

use crate::span::Position;

/// Errors raised while tokenizing template source text.
///
/// The tokenizer aborts on the first error; the caller never receives a
/// partial token list alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character with no lexical rule was found inside a `{@ ... @}` block.
    #[error("unsupported character '{ch}' in code block at {position}")]
    UnsupportedChar { ch: char, position: Position },

    /// A decimal literal too large for the integer token value.
    #[error("integer literal '{literal}' out of range at {position}")]
    IntegerOutOfRange { literal: String, position: Position },
}
