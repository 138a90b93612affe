pub mod classify;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod token;

mod scanner;

pub use error::{LexError, LexErrorKind};
pub use keywords::{KeywordError, KeywordSet, DEFAULT_KEYWORDS};
pub use scanner::{tokenize, Tokenizer};
pub use token::{Token, TokenKind};
