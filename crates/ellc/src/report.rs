//! Diagnostic rendering with ariadne.

use std::io;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use ell_common::Diagnostic;

/// Render `diag` against `source`.
///
/// Spans carry byte offsets, so the report indexes by byte. Lexer columns
/// count from 0 while ariadne's header counts from 1; a note states the
/// lexer's column so both numbers are explained.
pub fn write_diagnostic<W: io::Write>(
    diag: &Diagnostic,
    source: &str,
    file_name: &str,
    color: bool,
    mut out: W,
) -> io::Result<()> {
    let Some(ref span) = diag.span else {
        return writeln!(out, "{}", diag);
    };

    let start = span.start.offset as usize;
    let end = (span.end.offset as usize).max(start + 1);
    let label = diag.label.as_deref().unwrap_or(&diag.message);

    let mut report = Report::build(ReportKind::Error, file_name, start)
        .with_config(
            Config::default()
                .with_index_type(IndexType::Byte)
                .with_color(color),
        )
        .with_message(&diag.message)
        .with_label(
            Label::new((file_name, start..end))
                .with_message(label)
                .with_color(Color::Red),
        )
        .with_note(format!(
            "line {}, column {} (columns count from 0)",
            span.start.line, span.start.column
        ));

    if let Some(ref help) = diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((file_name, Source::from(source)), &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ell_compiler::lexer::{tokenize, KeywordSet};

    fn render(source: &str) -> String {
        let err = tokenize(source, "main.l", &KeywordSet::default()).unwrap_err();
        let mut out = Vec::new();
        write_diagnostic(&err.to_diagnostic("main.l"), source, "main.l", false, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn ascii_source_shows_snippet_and_label() {
        let text = render("\"eeeee\" @ x");
        assert!(text.contains("unrecognized character '@' (1:8)"), "{text}");
        assert!(text.contains("\"eeeee\" @ x"), "{text}");
        assert!(text.contains("main.l:1:9"), "{text}");
        assert!(text.contains("line 1, column 8 (columns count from 0)"), "{text}");
    }

    #[test]
    fn multibyte_source_keeps_snippet() {
        for source in ["\"ééé\" @ x", "\"ééééé\" @ x"] {
            let text = render(source);
            assert!(text.contains(source), "snippet missing for {source:?}:\n{text}");
            assert!(text.contains("unrecognized character '@'"), "{text}");
        }
    }

    #[test]
    fn label_omits_position() {
        let text = render("var x = @");
        let label_lines: Vec<&str> = text
            .lines()
            .filter(|l| l.contains("unrecognized character '@'"))
            .collect();
        assert!(label_lines.iter().any(|l| !l.contains("(1:8)")), "{text}");
    }

    #[test]
    fn spanless_diagnostic_is_plain() {
        let mut out = Vec::new();
        write_diagnostic(&Diagnostic::error("boom"), "", "main.l", false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "error: boom\n");
    }
}
