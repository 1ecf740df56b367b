use stencil_common::{LexError, Position, Span};

use super::cursor::Cursor;
use super::token::{Token, TokenKind};

/// Top-level scanning mode.
///
/// Exactly one mode is active at a time; transitions are driven by the
/// two-character delimiters `{@`, `{{`, `@}` and `}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Text,
    Reference,
    Code,
}

/// Hand-written tokenizer for Stencil templates.
///
/// A template mixes three region kinds: literal text, `{{ ... }}` value
/// references, and `{@ ... @}` statement blocks. The tokenizer walks the
/// source one character at a time, dispatching on the current mode, and
/// hands multi-character tokens off to small sub-scanners that may look
/// one character ahead before settling on the final token shape.
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
}

/// Tokenize a template in one call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).tokenize()
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source, returning all tokens in source order.
    ///
    /// The scan ends at end of input regardless of mode: a code or
    /// reference block left unclosed is not an error, the stream simply
    /// stops. The only user-facing failures are an unsupported character
    /// inside a code block and an out-of-range integer literal.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut mode = ScanMode::Text;
        let mut text = String::new();
        let mut text_start = self.cursor.position();
        let mut text_end = text_start;

        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            let ch = self.cursor.take();
            match mode {
                ScanMode::Text => {
                    if ch == '{' && self.cursor.peek() == Some('@') {
                        self.flush_text(&mut text, text_start, text_end);
                        self.cursor.take(); // '@'
                        self.push(TokenKind::OpenCode, "{@", start);
                        mode = ScanMode::Code;
                    } else if ch == '{' && self.cursor.peek() == Some('{') {
                        self.flush_text(&mut text, text_start, text_end);
                        self.cursor.take(); // second '{'
                        self.push(TokenKind::OpenReference, "{{", start);
                        mode = ScanMode::Reference;
                    } else {
                        if text.is_empty() {
                            text_start = start;
                        }
                        text.push(ch);
                        text_end = self.cursor.position();
                    }
                }
                ScanMode::Reference => {
                    if ch == '}' && self.cursor.peek() == Some('}') {
                        self.cursor.take(); // second '}'
                        self.push(TokenKind::CloseReference, "}}", start);
                        mode = ScanMode::Text;
                    } else if is_identifier_char(ch) {
                        self.cursor.rewind();
                        self.scan_identifier();
                    } else if ch == '(' {
                        self.push(TokenKind::LParen, "(", start);
                    } else if ch == ')' {
                        self.push(TokenKind::RParen, ")", start);
                    } else if ch == '.' {
                        self.push(TokenKind::Operator, ".", start);
                    } else if ch == '"' {
                        self.cursor.rewind();
                        self.scan_string();
                    }
                    // Anything else, whitespace included, is dropped without
                    // emitting a token. Reference mode has no
                    // unsupported-character rule; only code mode rejects input.
                }
                ScanMode::Code => {
                    if ch == '@' && self.cursor.peek() == Some('}') {
                        self.cursor.take(); // '}'
                        self.push(TokenKind::CloseCode, "@}", start);
                        mode = ScanMode::Text;
                    } else if ch == '.' {
                        self.push(TokenKind::Operator, ".", start);
                    } else if ch == ',' {
                        self.push(TokenKind::Comma, ",", start);
                    } else if ch == '(' {
                        self.push(TokenKind::LParen, "(", start);
                    } else if ch == ')' {
                        self.push(TokenKind::RParen, ")", start);
                    } else if ch == ':' {
                        self.push(TokenKind::Colon, ":", start);
                    } else if ch == '=' {
                        self.cursor.rewind();
                        self.scan_operator(
                            '=',
                            '=',
                            (TokenKind::ComparisonOperator, "=="),
                            (TokenKind::Operator, "="),
                        );
                    } else if ch == '!' {
                        self.cursor.rewind();
                        self.scan_operator(
                            '!',
                            '=',
                            (TokenKind::ComparisonOperator, "!="),
                            (TokenKind::ComparisonOperator, "!"),
                        );
                    } else if ch == '<' {
                        self.cursor.rewind();
                        self.scan_operator(
                            '<',
                            '=',
                            (TokenKind::ComparisonOperator, "<="),
                            (TokenKind::ComparisonOperator, "<"),
                        );
                    } else if ch == '>' {
                        self.cursor.rewind();
                        self.scan_operator(
                            '>',
                            '=',
                            (TokenKind::ComparisonOperator, ">="),
                            (TokenKind::ComparisonOperator, ">"),
                        );
                    } else if ch == '+' {
                        self.cursor.rewind();
                        self.scan_operator(
                            '+',
                            '+',
                            (TokenKind::Operator, "++"),
                            (TokenKind::Operator, "+"),
                        );
                    } else if ch == '-' {
                        self.cursor.rewind();
                        self.scan_operator(
                            '-',
                            '-',
                            (TokenKind::Operator, "--"),
                            (TokenKind::Operator, "-"),
                        );
                    } else if ch == '*' {
                        self.push(TokenKind::Operator, "*", start);
                    } else if ch == '/' {
                        self.push(TokenKind::Operator, "/", start);
                    } else if ch == '"' {
                        self.cursor.rewind();
                        self.scan_string();
                    } else if ch.is_ascii_digit() {
                        self.cursor.rewind();
                        self.scan_integer()?;
                    } else if is_identifier_char(ch) {
                        self.cursor.rewind();
                        self.scan_identifier();
                    } else if ch.is_whitespace() {
                        // skipped
                    } else {
                        return Err(LexError::UnsupportedChar {
                            ch,
                            position: start,
                        });
                    }
                }
            }
        }

        self.flush_text(&mut text, text_start, text_end);
        Ok(self.tokens)
    }

    /// Emit the pending text buffer as a `TextBlock` if it is non-empty.
    fn flush_text(&mut self, buf: &mut String, start: Position, end: Position) {
        if !buf.is_empty() {
            let token = Token::new(TokenKind::TextBlock, std::mem::take(buf), Span::new(start, end));
            self.tokens.push(token);
        }
    }

    // ---------------------------------------------------------------
    // Sub-scanners
    //
    // Each one is entered with the cursor sitting on its trigger
    // character: the mode dispatcher rewound once before delegating.
    // ---------------------------------------------------------------

    /// Scan an operator that may extend to a two-character form.
    ///
    /// Consumes the trigger character, then looks one character ahead: if it
    /// matches `follow`, the combined form is emitted; otherwise the
    /// lookahead stays in the stream and the single-character form is
    /// emitted. A trigger mismatch is a dispatch bug, caught by assertion.
    fn scan_operator(
        &mut self,
        trigger: char,
        follow: char,
        double: (TokenKind, &str),
        single: (TokenKind, &str),
    ) {
        let start = self.cursor.position();
        let ch = self.cursor.take();
        assert_eq!(ch, trigger, "operator scanner dispatched on wrong character");

        if self.cursor.peek() == Some(follow) {
            self.cursor.take();
            self.push(double.0, double.1, start);
        } else {
            self.push(single.0, single.1, start);
        }
    }

    /// Scan a maximal run of identifier characters, then reclassify exact
    /// keyword matches through the static table.
    ///
    /// The run may begin with a digit: dispatch only asks "is this an
    /// identifier character", with no separate start class. Reference mode
    /// has no integer scanner, so `{{ 42 }}` yields an identifier.
    fn scan_identifier(&mut self) {
        let start = self.cursor.position();
        let mut value = String::new();
        while let Some(ch) = self.cursor.peek() {
            if !is_identifier_char(ch) {
                break;
            }
            value.push(self.cursor.take());
        }
        assert!(
            !value.is_empty(),
            "identifier scanner dispatched on non-identifier character"
        );

        let kind = TokenKind::keyword_from_str(&value).unwrap_or(TokenKind::Identifier);
        let span = self.cursor.span_from(start);
        self.tokens.push(Token::new(kind, value, span));
    }

    /// Scan a maximal run of decimal digits into an integer literal token
    /// carrying the parsed value.
    fn scan_integer(&mut self) -> Result<(), LexError> {
        let start = self.cursor.position();
        let mut digits = String::new();
        while let Some(ch) = self.cursor.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(self.cursor.take());
        }
        assert!(
            !digits.is_empty(),
            "integer scanner dispatched on non-digit character"
        );

        let value: i64 = digits.parse().map_err(|_| LexError::IntegerOutOfRange {
            literal: digits.clone(),
            position: start,
        })?;
        let span = self.cursor.span_from(start);
        self.tokens.push(Token::int(value, span));
        Ok(())
    }

    /// Scan a double-quoted string literal.
    ///
    /// Content is taken verbatim: there are no escape sequences. A literal
    /// left unterminated at end of input is silently closed rather than
    /// reported; downstream consumers rely on that.
    fn scan_string(&mut self) {
        let start = self.cursor.position();
        let quote = self.cursor.take();
        assert_eq!(quote, '"', "string scanner dispatched on wrong character");

        let mut value = String::new();
        while !self.cursor.is_at_end() {
            let ch = self.cursor.take();
            if ch == '"' {
                break;
            }
            value.push(ch);
        }
        let span = self.cursor.span_from(start);
        self.tokens.push(Token::new(TokenKind::StringLiteral, value, span));
    }

    fn push(&mut self, kind: TokenKind, text: &str, start: Position) {
        let span = self.cursor.span_from(start);
        self.tokens.push(Token::new(kind, text, span));
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
