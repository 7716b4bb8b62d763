//! Lexical tokens and their kinds.

#[allow(clippy::module_inception)]
mod token;
mod token_kind;

pub use token::Token;
pub use token_kind::TokenKind;
