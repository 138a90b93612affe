use serde::Serialize;

/// Source position within a file (1-based line, 0-based column and byte offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 0-based column, reset on every newline.
    pub column: u32,
    /// 0-based byte offset from start of file.
    pub offset: u32,
}

impl Position {
    /// Position of the first character of a file.
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 0,
            offset: 0,
        }
    }
}

/// A range in source code, from `start` to `end` in a given file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub file: String,
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    pub fn new(file: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            file: file.into(),
            start,
            end,
        }
    }

    /// Placeholder span for values not tied to source text.
    pub fn dummy() -> Self {
        Self {
            file: String::new(),
            start: Position::default(),
            end: Position::default(),
        }
    }

    /// Zero-width span at `position`.
    pub fn point(file: impl Into<String>, position: Position) -> Self {
        Self::new(file, position, position)
    }

    /// Byte range covered by this span.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.start)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
