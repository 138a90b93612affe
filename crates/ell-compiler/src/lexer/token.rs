use ell_common::Span;
use serde::Serialize;
use std::fmt;

/// A single token produced by the tokenizer.
///
/// `text` is the exact source slice the token was scanned from; it is never
/// empty. String tokens keep their surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

/// Token classes of the Ell language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Run of decimal digits.
    Number,
    Identifier,
    /// Identifier-shaped word found in the configured keyword set.
    Keyword,
    /// Run of operator characters, e.g. `=`, `==`, `!=`, `+=`.
    Operator,
    /// Double-quoted literal, quotes included.
    String,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::String => "string",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
