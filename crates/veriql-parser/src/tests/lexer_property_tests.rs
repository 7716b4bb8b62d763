//! Universally-quantified lexer properties, checked with proptest.

use crate::Lexer;
use crate::Source;
use crate::token::Token;
use crate::token::TokenKind;
use proptest::prelude::*;

/// Lexes `body` to completion, stopping at EOF or the first syntax error.
fn lex_all(body: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(Source::new(body));
    let mut tokens = vec![];
    loop {
        match lexer.next_token() {
            Ok(token) => {
                let at_eof = token.kind == TokenKind::Eof;
                tokens.push(token);
                if at_eof {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    tokens
}

/// The code-point substring `body[start..end)`.
fn char_slice(body: &str, start: usize, end: usize) -> String {
    body.chars().skip(start).take(end - start).collect()
}

proptest! {
    /// Token spans never overlap, never decrease, and never exceed the
    /// input length; scanning always terminates at EOF or an error.
    #[test]
    fn token_spans_are_monotone(body in any::<String>()) {
        let char_len = body.chars().count();
        let mut prev_end = 0;
        for token in lex_all(&body) {
            prop_assert!(token.start <= token.end);
            prop_assert!(token.start >= prev_end);
            prop_assert!(token.end <= char_len);
            prev_end = token.end;
        }
    }

    /// Once EOF is produced, every subsequent call produces the identical
    /// EOF token.
    #[test]
    fn eof_is_absorbing(body in any::<String>()) {
        let mut lexer = Lexer::new(Source::new(body));
        let eof = loop {
            match lexer.next_token() {
                Ok(token) if token.kind == TokenKind::Eof => break token,
                Ok(_) => {}
                Err(_) => return Ok(()),
            }
        };
        for _ in 0..2 {
            let again = lexer.next_token();
            prop_assert_eq!(again.as_ref(), Ok(&eof));
        }
    }

    /// Name, int, and float token values are the exact source substring;
    /// string token values are the source substring after escape decoding
    /// and quote stripping (checked here only for escape-free strings).
    #[test]
    fn values_round_trip_to_source_slices(body in any::<String>()) {
        for token in lex_all(&body) {
            match token.kind {
                TokenKind::Name | TokenKind::Int | TokenKind::Float => {
                    let slice = char_slice(&body, token.start, token.end);
                    prop_assert_eq!(
                        token.value.as_deref(),
                        Some(slice.as_str()),
                    );
                }
                TokenKind::Str => {
                    let raw = char_slice(&body, token.start, token.end);
                    if !raw.contains('\\') {
                        let inner = char_slice(&body, token.start + 1, token.end - 1);
                        prop_assert_eq!(token.value.as_deref(), Some(inner.as_str()));
                    }
                }
                _ => prop_assert_eq!(token.value, None),
            }
        }
    }

    /// Lexing a valid name surrounded by arbitrary ignored characters
    /// yields exactly that name.
    #[test]
    fn names_survive_surrounding_trivia(
        padding in proptest::collection::vec(
            prop_oneof![
                Just(" ".to_string()),
                Just("\t".to_string()),
                Just("\n".to_string()),
                Just("\r\n".to_string()),
                Just(",".to_string()),
                Just("#comment\n".to_string()),
            ],
            0..6,
        ),
        name in "[_A-Za-z][_0-9A-Za-z]{0,10}",
    ) {
        let body = format!("{}{}", padding.concat(), name);
        let token = Lexer::new(Source::new(body))
            .next_token()
            .expect("padded name should lex");
        prop_assert_eq!(token.kind, TokenKind::Name);
        prop_assert_eq!(token.value.as_deref(), Some(name.as_str()));
    }
}
