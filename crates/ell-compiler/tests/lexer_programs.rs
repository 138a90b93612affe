//! Whole-program scans through the public API.

use ell_compiler::ast::BinaryOperator;
use ell_compiler::lexer::{tokenize, KeywordSet, LexErrorKind, Token, TokenKind, Tokenizer};

fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

#[test]
fn small_program() {
    let source = "var total = 0\nvar step = 15\ntotal = total + step\nprint total\nprint \"done\"\n";
    let tokens = tokenize(source, "main.l", &KeywordSet::default()).unwrap();

    assert_eq!(
        kinds_and_texts(&tokens),
        vec![
            (TokenKind::Keyword, "var"),
            (TokenKind::Identifier, "total"),
            (TokenKind::Operator, "="),
            (TokenKind::Number, "0"),
            (TokenKind::Keyword, "var"),
            (TokenKind::Identifier, "step"),
            (TokenKind::Operator, "="),
            (TokenKind::Number, "15"),
            (TokenKind::Identifier, "total"),
            (TokenKind::Operator, "="),
            (TokenKind::Identifier, "total"),
            (TokenKind::Operator, "+"),
            (TokenKind::Identifier, "step"),
            (TokenKind::Keyword, "print"),
            (TokenKind::Identifier, "total"),
            (TokenKind::Keyword, "print"),
            (TokenKind::String, "\"done\""),
        ]
    );

    let last = tokens.last().unwrap();
    assert_eq!((last.span.start.line, last.span.start.column), (5, 6));
}

#[test]
fn operator_tokens_map_to_ast_operators() {
    let tokens = tokenize("x = y + 1", "main.l", &KeywordSet::default()).unwrap();
    let ops: Vec<Option<BinaryOperator>> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| BinaryOperator::from_symbol(&t.text))
        .collect();
    assert_eq!(ops, vec![Some(BinaryOperator::Assign), Some(BinaryOperator::Plus)]);
}

#[test]
fn error_on_third_line() {
    let err = tokenize("var a = 1\nvar b = 2\nvar c = {", "main.l", &KeywordSet::default())
        .unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('{'));
    assert_eq!(err.to_string(), "unrecognized character '{' (3:8)");

    let diag = err.to_diagnostic("main.l");
    assert_eq!(diag.span.unwrap().range(), 28..29);
}

#[test]
fn lazily_pulls_until_failure() {
    let mut tokenizer = Tokenizer::new("print 1 ~", "main.l", KeywordSet::default());
    let first = tokenizer.next_token().unwrap().unwrap();
    assert_eq!((first.kind, first.text.as_str()), (TokenKind::Keyword, "print"));
    let second = tokenizer.next_token().unwrap().unwrap();
    assert_eq!((second.kind, second.text.as_str()), (TokenKind::Number, "1"));
    // `~` has not been looked at yet.
    assert_eq!(tokenizer.position().offset, 7);
    assert!(tokenizer.next_token().is_err());
}

#[test]
fn json_shape() {
    let tokens = tokenize("var x", "main.l", &KeywordSet::default()).unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["kind"], "keyword");
    assert_eq!(json[0]["text"], "var");
    assert_eq!(json[1]["span"]["start"]["column"], 4);
    assert_eq!(json[1]["span"]["file"], "main.l");
}
