use ell_common::{Position, Span};

use super::error::{LexError, LexErrorKind};

/// Largest source, in bytes, whose offsets fit a `Position`.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

pub fn fits_offsets(len: usize) -> bool {
    len <= MAX_SOURCE_LEN
}

/// Low-level character reader over source text.
///
/// Tracks current position (line, column, byte offset) and provides
/// peek/advance primitives for the tokenizer. Line is 1-based; column is
/// 0-based and resets on every newline.
///
/// Offsets are `u32`, so sources longer than [`MAX_SOURCE_LEN`] bytes must be
/// rejected with [`Cursor::check_len`] before reading.
pub struct Cursor<'src> {
    source: &'src str,
    file: String,
    chars: std::str::Chars<'src>,
    /// Byte offset of the *next* character to be consumed.
    offset: u32,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str, file: impl Into<String>) -> Self {
        let start = Position::start();
        Self {
            source,
            file: file.into(),
            chars: source.chars(),
            offset: start.offset,
            line: start.line,
            column: start.column,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Current position in the source.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Peek at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Peek `n` characters past the next one; `peek_nth(0)` is `peek()`.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n)
    }

    /// Consume and return the next character.
    pub fn advance(&mut self) -> Result<char, LexError> {
        let ch = self
            .chars
            .next()
            .ok_or_else(|| self.fail(LexErrorKind::InvalidAdvance))?;
        self.step(ch);
        Ok(ch)
    }

    /// True if there are no more characters.
    pub fn is_eof(&self) -> bool {
        self.offset as usize >= self.source.len()
    }

    /// Fail with `SourceTooLarge` if byte offsets would overflow.
    pub fn check_len(&self) -> Result<(), LexError> {
        if fits_offsets(self.source.len()) {
            Ok(())
        } else {
            Err(self.fail(LexErrorKind::SourceTooLarge))
        }
    }

    /// Build an error of `kind` at the current position.
    pub fn fail(&self, kind: LexErrorKind) -> LexError {
        let err = LexError::new(kind, self.position());
        tracing::debug!(target: "ell::lexer", file = %self.file, "{}", err);
        err
    }

    /// Slice the source from byte offset `start` to the current offset.
    pub fn slice_from(&self, start: u32) -> &'src str {
        &self.source[start as usize..self.offset as usize]
    }

    /// Build a Span from a start position to the current position.
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(self.file.clone(), start, self.position())
    }

    /// Consume characters while `predicate` holds for the next one and
    /// return the consumed run. The first character failing the predicate
    /// is left in place.
    pub fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.chars.next();
            self.step(ch);
        }
        self.slice_from(start)
    }

    fn step(&mut self, ch: char) {
        self.offset += ch.len_utf8() as u32;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}
