use crate::span::Span;

/// A diagnostic ready to be rendered by a front-end.
///
/// The lexer stops at its first failure, so a diagnostic is always an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Option<Span>,
    /// Short text attached to the span itself.
    pub label: Option<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
            label: None,
            help: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)?;
        if let Some(ref span) = self.span {
            write!(f, "\n  --> {}", span)?;
        }
        if let Some(ref help) = self.help {
            write!(f, "\n   = help: {}", help)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn display_without_span() {
        let diag = Diagnostic::error("something broke");
        assert_eq!(diag.to_string(), "error: something broke");
    }

    #[test]
    fn display_with_span_and_help() {
        let diag = Diagnostic::error("unterminated string literal (1:4)")
            .with_span(Span::point("main.l", Position { line: 1, column: 4, offset: 4 }))
            .with_label("unterminated string literal")
            .with_help("add a closing '\"'");
        assert_eq!(diag.label.as_deref(), Some("unterminated string literal"));
        assert_eq!(
            diag.to_string(),
            "error: unterminated string literal (1:4)\n  --> main.l:1:4\n   = help: add a closing '\"'"
        );
    }
}
