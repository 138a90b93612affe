//! Ell language front-end.
//!
//! The [`lexer`] turns source text into a lazily produced stream of
//! [`lexer::Token`]s; the [`ast`] module holds the node shapes those tokens
//! feed.

pub mod ast;
pub mod lexer;
