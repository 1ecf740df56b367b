//! Lexical front end for the Stencil template language.
//!
//! A template interleaves literal text, `{{ ... }}` value references, and
//! `{@ ... @}` statement blocks. This crate turns such a source text into
//! the flat token sequence a parser consumes; it performs no grammar
//! validation, name resolution, or evaluation.

pub mod lexer;

pub use lexer::{tokenize, Token, TokenKind, TokenValue, Tokenizer};
pub use stencil_common::{LexError, Position, Span};
