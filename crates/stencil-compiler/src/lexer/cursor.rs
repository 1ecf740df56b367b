use stencil_common::{LineIndex, Position, Span};

/// Low-level character reader over template source text.
///
/// Holds an immutable view of the input and a mutable position into its
/// decoded character sequence, and provides the four primitives the
/// tokenizer needs: peek, take, rewind, end-of-input check.
pub struct Cursor<'src> {
    source: &'src str,
    /// Byte offset and character for every character in `source`.
    chars: Vec<(u32, char)>,
    /// Index of the next character to be consumed. Always in `0..=chars.len()`.
    pos: usize,
    line_index: LineIndex,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().map(|(i, ch)| (i as u32, ch)).collect(),
            pos: 0,
            line_index: LineIndex::new(source),
        }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, ch)| ch)
    }

    /// Consume and return the next character.
    ///
    /// Panics at end of input; callers check `is_at_end` (or `peek`) first.
    /// Reading past the end is a tokenizer bug, never an input error.
    pub fn take(&mut self) -> char {
        match self.chars.get(self.pos) {
            Some(&(_, ch)) => {
                self.pos += 1;
                ch
            }
            None => panic!("cursor read past end of input"),
        }
    }

    /// Push the most recently consumed character back onto the stream.
    ///
    /// One character of pushback is all the tokenizer ever needs: a mode
    /// dispatcher rewinds once before delegating to a sub-scanner that
    /// wants to re-examine the triggering character.
    pub fn rewind(&mut self) {
        assert!(self.pos > 0, "cursor rewound past start of input");
        self.pos -= 1;
    }

    /// True if there are no more characters.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.chars.len()
    }

    /// Byte offset of the next character to be consumed (input length at end).
    pub fn offset(&self) -> u32 {
        self.chars
            .get(self.pos)
            .map_or(self.source.len() as u32, |&(offset, _)| offset)
    }

    /// Current position, with line/column resolved through the line index.
    pub fn position(&self) -> Position {
        self.line_index.position(self.source, self.offset())
    }

    /// Build a Span from a start position to the current position.
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.position())
    }
}
