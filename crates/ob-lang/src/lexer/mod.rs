//! Lexer utilities and tokenization.

pub mod cursor;
pub mod tokenizer;
pub(crate) mod winnow;

pub use cursor::TokenCursor;
pub use tokenizer::{lex, Keyword, Span, Token, TokenKind};
