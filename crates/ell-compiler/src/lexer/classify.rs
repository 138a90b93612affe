//! Character classes used by the tokenizer.

/// Characters that may appear in an operator run.
pub const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '=', '&', '|', '<', '>', '!', '?'];

pub const STRING_DELIMITER: char = '"';

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c)
}

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

pub fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

pub fn is_string_delimiter(c: char) -> bool {
    c == STRING_DELIMITER
}

/// True if `word` would scan as a single identifier token.
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => is_ident_start(first) && chars.all(is_ident_continue),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_start_is_lowercase_or_underscore() {
        assert!(is_ident_start('a'));
        assert!(is_ident_start('z'));
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('A'));
        assert!(!is_ident_start('1'));
    }

    #[test]
    fn identifier_continue_adds_digits() {
        assert!(is_ident_continue('9'));
        assert!(is_ident_continue('_'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn operator_set() {
        for c in "+-*/%=&|<>!?".chars() {
            assert!(is_operator_char(c), "{c} should be an operator char");
        }
        for c in "(){}[];:,.@#^~\"".chars() {
            assert!(!is_operator_char(c), "{c} should not be an operator char");
        }
    }

    #[test]
    fn whitespace_is_ascii_only() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\r'));
        assert!(!is_whitespace('\u{a0}'));
    }

    #[test]
    fn identifier_words() {
        assert!(is_identifier("var"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("Print"));
        assert!(!is_identifier("a-b"));
    }
}
