use crate::Source;
use crate::SyntaxError;
use crate::token::Token;
use crate::token::TokenKind;

/// A pull-based lexer over a [`Source`].
///
/// Each call to [`next_token`](Lexer::next_token) scans exactly one token
/// starting at the cursor, advances the cursor past it, and returns it; once
/// the end of input is reached it returns an [`Eof`](TokenKind::Eof) token
/// forever. There is no lookahead buffering.
///
/// A `Lexer` carries mutable cursor state, so it must not be shared across
/// concurrent callers; construct one per `Source`.
///
/// All offsets (token spans, error positions) count Unicode code points
/// from the start of the body.
pub struct Lexer {
    source: Source,
    chars: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        let chars = source.body().chars().collect();
        Self {
            source,
            chars,
            position: 0,
        }
    }

    /// The source being lexed.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Scans and returns the next token, advancing the cursor past it.
    ///
    /// Fails with a [`SyntaxError`] on an unscannable byte sequence; the
    /// cursor is left at its pre-call position in that case, so the caller
    /// decides whether to abort or not.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        let token = self.read_token(self.position)?;
        self.position = token.end;
        Ok(token)
    }

    // =========================================================================
    // Scanning helpers
    // =========================================================================

    fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// The body text between two code-point offsets.
    fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    fn error(&self, position: usize, description: &str) -> SyntaxError {
        SyntaxError::new(&self.source, position, description)
    }

    // =========================================================================
    // Token dispatch
    // =========================================================================

    fn read_token(&self, from: usize) -> Result<Token, SyntaxError> {
        let position = self.position_after_whitespace(from);

        let Some(ch) = self.char_at(position) else {
            return Ok(Token::new(TokenKind::Eof, position, position));
        };

        if (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r') {
            return Err(self.error(
                position,
                &format!("Invalid character {}.", print_char(Some(ch))),
            ));
        }

        let punctuator = |kind| Ok(Token::new(kind, position, position + 1));
        match ch {
            '!' => punctuator(TokenKind::Bang),
            '$' => punctuator(TokenKind::Dollar),
            '(' => punctuator(TokenKind::ParenL),
            ')' => punctuator(TokenKind::ParenR),
            ':' => punctuator(TokenKind::Colon),
            '=' => punctuator(TokenKind::Equals),
            '@' => punctuator(TokenKind::At),
            '[' => punctuator(TokenKind::BracketL),
            ']' => punctuator(TokenKind::BracketR),
            '{' => punctuator(TokenKind::BraceL),
            '}' => punctuator(TokenKind::BraceR),
            '|' => punctuator(TokenKind::Pipe),

            // Exactly three dots form a spread; anything less falls through
            // to the unexpected-character error at the first dot.
            '.' if self.char_at(position + 1) == Some('.')
                && self.char_at(position + 2) == Some('.') =>
            {
                Ok(Token::new(TokenKind::Spread, position, position + 3))
            }

            '_' | 'A'..='Z' | 'a'..='z' => Ok(self.read_name(position)),
            '-' | '0'..='9' => self.read_number(position, ch),
            '"' => self.read_string(position),

            _ => Err(self.error(
                position,
                &format!("Unexpected character {}.", print_char(Some(ch))),
            )),
        }
    }

    /// Skips ignored characters: BOM, whitespace, line terminators, commas,
    /// and `#` comments (through end of line).
    ///
    /// A control character inside a comment stops the comment scan so that
    /// token dispatch reports it as an invalid character.
    fn position_after_whitespace(&self, from: usize) -> usize {
        let mut position = from;
        while let Some(ch) = self.char_at(position) {
            match ch {
                '\u{FEFF}' | '\t' | ' ' | ',' | '\n' => position += 1,
                '\r' => {
                    if self.char_at(position + 1) == Some('\n') {
                        position += 2;
                    } else {
                        position += 1;
                    }
                }
                '#' => {
                    position += 1;
                    while let Some(c) = self.char_at(position) {
                        if matches!(c, '\n' | '\r') || ((c as u32) <= 0x1F && c != '\t') {
                            break;
                        }
                        position += 1;
                    }
                }
                _ => break,
            }
        }
        position
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Reads `/[_A-Za-z][_0-9A-Za-z]*/`, longest match.
    fn read_name(&self, start: usize) -> Token {
        let mut end = start + 1;
        while let Some(c) = self.char_at(end) {
            if c == '_' || c.is_ascii_alphanumeric() {
                end += 1;
            } else {
                break;
            }
        }
        Token::with_value(TokenKind::Name, start, end, self.slice(start, end))
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Reads an int or float literal:
    ///
    /// ```text
    /// -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
    /// ```
    ///
    /// The token value is the exact matched substring, sign and all,
    /// unnormalized. Presence of a fraction or exponent selects
    /// [`Float`](TokenKind::Float).
    fn read_number(&self, start: usize, first: char) -> Result<Token, SyntaxError> {
        let mut position = start;
        let mut ch = Some(first);
        let mut is_float = false;

        if ch == Some('-') {
            position += 1;
            ch = self.char_at(position);
        }

        if ch == Some('0') {
            position += 1;
            ch = self.char_at(position);
            if let Some(c) = ch
                && c.is_ascii_digit()
            {
                return Err(self.error(
                    position,
                    &format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        print_char(ch),
                    ),
                ));
            }
        } else {
            position = self.read_digits(position)?;
            ch = self.char_at(position);
        }

        if ch == Some('.') {
            is_float = true;
            position = self.read_digits(position + 1)?;
            ch = self.char_at(position);
        }

        if matches!(ch, Some('e' | 'E')) {
            is_float = true;
            position += 1;
            if matches!(self.char_at(position), Some('+' | '-')) {
                position += 1;
            }
            position = self.read_digits(position)?;
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Ok(Token::with_value(
            kind,
            start,
            position,
            self.slice(start, position),
        ))
    }

    /// Consumes one-or-more digits starting at `start`, returning the offset
    /// past the last one.
    fn read_digits(&self, start: usize) -> Result<usize, SyntaxError> {
        match self.char_at(start) {
            Some(c) if c.is_ascii_digit() => {
                let mut position = start + 1;
                while matches!(self.char_at(position), Some(c) if c.is_ascii_digit()) {
                    position += 1;
                }
                Ok(position)
            }
            other => Err(self.error(
                start,
                &format!("Invalid number, expected digit but got: {}.", print_char(other)),
            )),
        }
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Reads a `"`-delimited string literal, resolving escape sequences.
    ///
    /// The token value is the decoded content; the span covers the full
    /// literal including quotes. A line terminator or end-of-input before
    /// the closing quote is an unterminated-string error pointing at the
    /// offending position.
    fn read_string(&self, start: usize) -> Result<Token, SyntaxError> {
        let mut position = start + 1;
        let mut chunk_start = position;
        let mut value = String::new();
        let mut terminated = false;

        loop {
            let ch = match self.char_at(position) {
                None | Some('\n') | Some('\r') => break,
                Some('"') => {
                    terminated = true;
                    break;
                }
                Some(c) => c,
            };

            if (ch as u32) < 0x20 && ch != '\t' {
                return Err(self.error(
                    position,
                    &format!("Invalid character within String: {}.", print_char(Some(ch))),
                ));
            }

            position += 1;
            if ch == '\\' {
                value.push_str(&self.slice(chunk_start, position - 1));
                match self.char_at(position) {
                    Some('"') => value.push('"'),
                    Some('/') => value.push('/'),
                    Some('\\') => value.push('\\'),
                    Some('b') => value.push('\u{0008}'),
                    Some('f') => value.push('\u{000C}'),
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some('u') => match self.unicode_escape_at(position + 1) {
                        Some(decoded) => {
                            value.push(decoded);
                            position += 4;
                        }
                        None => {
                            let end = (position + 5).min(self.chars.len());
                            return Err(self.error(
                                position,
                                &format!(
                                    "Invalid character escape sequence: \\u{}.",
                                    self.slice(position + 1, end),
                                ),
                            ));
                        }
                    },
                    Some(other) => {
                        return Err(self.error(
                            position,
                            &format!("Invalid character escape sequence: \\{other}."),
                        ));
                    }
                    // Backslash at end of input; the string can no longer
                    // be terminated.
                    None => return Err(self.error(position, "Unterminated string.")),
                }
                position += 1;
                chunk_start = position;
            }
        }

        if !terminated {
            return Err(self.error(position, "Unterminated string."));
        }

        value.push_str(&self.slice(chunk_start, position));
        Ok(Token::with_value(TokenKind::Str, start, position + 1, value))
    }

    /// Decodes the 4-hex-digit tail of a `\uXXXX` escape starting at
    /// `start`. Returns `None` on missing/non-hex digits or a code point
    /// that is not a valid scalar value.
    fn unicode_escape_at(&self, start: usize) -> Option<char> {
        let mut code = 0u32;
        for offset in 0..4 {
            let digit = self.char_at(start + offset)?.to_digit(16)?;
            code = code * 16 + digit;
        }
        char::from_u32(code)
    }
}

// =============================================================================
// Character rendering for error messages
// =============================================================================

/// Renders a character the way error descriptions name it: `<EOF>` for end
/// of input, the quoted character for printable ASCII, and a quoted
/// `\uXXXX` form (uppercase hex, zero-padded to 4) for everything else.
fn print_char(ch: Option<char>) -> String {
    match ch {
        None => "<EOF>".to_string(),
        Some('"') => "\"\\\"\"".to_string(),
        Some('\\') => "\"\\\\\"".to_string(),
        Some(c) if (' '..='\u{7E}').contains(&c) => format!("\"{c}\""),
        Some(c) => format!("\"\\u{:04X}\"", c as u32),
    }
}
