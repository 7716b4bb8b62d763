mod lexer_property_tests;

use crate::Lexer;
use crate::Source;
use crate::SyntaxError;
use crate::token::Token;

/// Lexes the first token of `body` with a default-named source.
pub(crate) fn lex_one(body: &str) -> Result<Token, SyntaxError> {
    Lexer::new(Source::new(body)).next_token()
}

/// Lexes the first token, panicking on a syntax error.
pub(crate) fn lex_one_ok(body: &str) -> Token {
    lex_one(body).expect("expected body to lex cleanly")
}

/// Lexes the first token and returns the rendered error message.
pub(crate) fn lex_one_err(body: &str) -> String {
    lex_one(body)
        .expect_err("expected a syntax error")
        .message
}
