use ell_common::{Diagnostic, Position, Span};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(char),
    #[error("cannot advance past end of input")]
    InvalidAdvance,
    #[error("source is larger than 4 GiB")]
    SourceTooLarge,
}

/// A terminal lexer failure, stamped with the position it was raised at.
///
/// Renders as `<message> (<line>:<column>)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} ({position})")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Span of the offending text: the character for
    /// `UnrecognizedCharacter`, a point otherwise.
    pub fn span(&self, file: impl Into<String>) -> Span {
        let end = match self.kind {
            LexErrorKind::UnrecognizedCharacter(ch) => Position {
                line: self.position.line,
                column: self.position.column + 1,
                offset: self.position.offset + ch.len_utf8() as u32,
            },
            LexErrorKind::UnterminatedString
            | LexErrorKind::InvalidAdvance
            | LexErrorKind::SourceTooLarge => self.position,
        };
        Span::new(file, self.position, end)
    }

    pub fn to_diagnostic(&self, file: impl Into<String>) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string())
            .with_span(self.span(file))
            .with_label(self.kind.to_string());
        match self.kind {
            LexErrorKind::UnterminatedString => diag.with_help("add a closing '\"'"),
            LexErrorKind::UnrecognizedCharacter(ch) if ch.is_ascii_uppercase() => {
                diag.with_help("identifiers may only contain lowercase letters, digits and '_'")
            }
            _ => diag,
        }
    }
}
