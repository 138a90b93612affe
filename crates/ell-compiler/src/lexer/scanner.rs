use std::iter::FusedIterator;

use super::classify::{
    is_digit, is_ident_continue, is_ident_start, is_operator_char, is_string_delimiter,
    is_whitespace,
};
use super::cursor::Cursor;
use super::error::{LexError, LexErrorKind};
use super::keywords::KeywordSet;
use super::token::{Token, TokenKind};

/// Pull-based tokenizer for Ell source.
///
/// Tokens are scanned on demand, one at a time, with a single token of
/// lookahead. The first failure is terminal: it is returned once and the
/// tokenizer then reports end of input.
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    keywords: KeywordSet,
    /// `Some(None)` caches a peeked end of input.
    peeked: Option<Option<Token>>,
    failed: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str, file: impl Into<String>, keywords: KeywordSet) -> Self {
        Self {
            cursor: Cursor::new(source, file),
            keywords,
            peeked: None,
            failed: false,
        }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Position of the underlying character stream.
    pub fn position(&self) -> ell_common::Position {
        self.cursor.position()
    }

    /// Return the next token without consuming it. `None` means end of input.
    pub fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        if self.peeked.is_none() {
            let token = self.read_next()?;
            self.peeked = Some(token);
        }
        Ok(self.peeked.as_ref().and_then(Option::as_ref))
    }

    /// Consume and return the next token. `None` means end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.read_next(),
        }
    }

    pub fn at_end(&mut self) -> Result<bool, LexError> {
        Ok(self.peek()?.is_none())
    }

    /// Scan the remaining input into a vector.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn read_next(&mut self) -> Result<Option<Token>, LexError> {
        if self.failed {
            return Ok(None);
        }
        let result = self.scan_token();
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    fn scan_token(&mut self) -> Result<Option<Token>, LexError> {
        self.cursor.check_len()?;
        self.cursor.read_while(is_whitespace);

        let Some(ch) = self.cursor.peek() else {
            return Ok(None);
        };
        let start = self.cursor.position();

        let kind = if is_digit(ch) {
            self.cursor.read_while(is_digit);
            TokenKind::Number
        } else if is_ident_start(ch) {
            let word = self.cursor.read_while(is_ident_continue);
            if self.keywords.contains(word) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            }
        } else if is_operator_char(ch) {
            self.cursor.read_while(is_operator_char);
            TokenKind::Operator
        } else if is_string_delimiter(ch) {
            self.scan_string()?;
            TokenKind::String
        } else {
            return Err(self.cursor.fail(LexErrorKind::UnrecognizedCharacter(ch)));
        };

        let token = Token::new(
            kind,
            self.cursor.slice_from(start.offset),
            self.cursor.span_from(start),
        );
        tracing::trace!(
            target: "ell::lexer",
            line = start.line,
            column = start.column,
            "{}",
            token
        );
        Ok(Some(token))
    }

    /// Consume a string literal, both delimiters included. Content is taken
    /// verbatim; there are no escapes.
    fn scan_string(&mut self) -> Result<(), LexError> {
        self.cursor.advance()?;
        self.cursor.read_while(|c| !is_string_delimiter(c));
        if self.cursor.is_eof() {
            return Err(self.cursor.fail(LexErrorKind::UnterminatedString));
        }
        self.cursor.advance()?;
        Ok(())
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenize a whole source text with the given keyword set.
pub fn tokenize(
    source: &str,
    file: impl Into<String>,
    keywords: &KeywordSet,
) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source, file, keywords.clone()).tokenize()
}
