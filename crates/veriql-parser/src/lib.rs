//! Lexical analysis for GraphQL documents.
//!
//! This crate provides the front half of a GraphQL engine's language layer:
//! a [`Source`] wrapper over raw request text, a pull-based [`Lexer`] that
//! produces one [`Token`](token::Token) per call, and a [`SyntaxError`] type
//! whose rendered message (location line plus caret snippet) is a
//! compatibility surface shared with other GraphQL tooling.
//!
//! Parsing (AST construction from tokens) lives downstream of this crate;
//! consumers drive the lexer by calling
//! [`Lexer::next_token`] repeatedly until an
//! [`Eof`](token::TokenKind::Eof) token is returned.

mod lexer;
mod source;
mod source_location;
mod syntax_error;
pub mod token;

pub use lexer::Lexer;
pub use source::Source;
pub use source_location::SourceLocation;
pub use syntax_error::SyntaxError;

#[cfg(test)]
mod tests;
