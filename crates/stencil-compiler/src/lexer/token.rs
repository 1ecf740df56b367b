use serde::{Deserialize, Serialize};
use std::fmt;
use stencil_common::Span;

/// A single token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: TokenValue::Text(value.into()),
            span,
        }
    }

    pub fn int(value: i64, span: Span) -> Self {
        Self {
            kind: TokenKind::IntegerLiteral,
            value: TokenValue::Int(value),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.value)
    }
}

/// Payload of a token: source text for every kind except integer literals,
/// which carry the parsed numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Int(i64),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TokenValue::Text(_) => None,
            TokenValue::Int(value) => Some(*value),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Int(value) => write!(f, "{}", value),
        }
    }
}

/// All token kinds in the Stencil template language.
///
/// This is the full vocabulary the downstream parser consumes; delimiter
/// tokens always bracket the region they open or close, and a `TextBlock`
/// is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === Literal output ===
    TextBlock,

    // === Region delimiters ===
    OpenCode,       // {@
    CloseCode,      // @}
    OpenReference,  // {{
    CloseReference, // }}

    // === Structural ===
    LParen, // (
    RParen, // )
    Comma,  // ,
    Colon,  // :

    // === Operators ===
    /// `.` `+` `-` `*` `/` `=` `++` `--`
    Operator,
    /// `==` `!=` `<` `<=` `>` `>=` `!`
    ComparisonOperator,

    // === Names ===
    Identifier,

    // === Keywords ===
    Import,
    If,
    Elif,
    Else,
    End,

    // === Literals ===
    StringLiteral,
    IntegerLiteral,
}

impl TokenKind {
    /// Try to match an identifier string to a keyword.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "import" => Some(TokenKind::Import),
            "if" => Some(TokenKind::If),
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "end" => Some(TokenKind::End),
            _ => None,
        }
    }

    /// True for the reserved-word kinds produced by identifier reclassification.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Import | TokenKind::If | TokenKind::Elif | TokenKind::Else | TokenKind::End
        )
    }
}
