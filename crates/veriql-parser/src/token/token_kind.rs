/// The kind of a lexical token.
///
/// This is a closed enumeration: the lexer can produce nothing outside this
/// set, and parsers may match on it exhaustively.
///
/// Each kind has a fixed display string (the `Display` impl below) used when
/// tokens are named inside error messages, e.g. `"<EOF>"` or `"Name"`. That
/// table is part of the error-text compatibility surface shared with other
/// GraphQL implementations and must not drift.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TokenKind {
    Eof,
    Bang,
    Dollar,
    ParenL,
    ParenR,
    Spread,
    Colon,
    Equals,
    At,
    BracketL,
    BracketR,
    BraceL,
    BraceR,
    Pipe,
    Name,
    Int,
    Float,
    Str,
    Comment,
}

impl TokenKind {
    /// The fixed display string for this kind.
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::Eof => "<EOF>",
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::ParenL => "(",
            TokenKind::ParenR => ")",
            TokenKind::Spread => "...",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::At => "@",
            TokenKind::BracketL => "[",
            TokenKind::BracketR => "]",
            TokenKind::BraceL => "{",
            TokenKind::BraceR => "}",
            TokenKind::Pipe => "|",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::Str => "String",
            TokenKind::Comment => "Comment",
        }
    }

    /// Returns `true` if tokens of this kind carry a decoded literal value.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Name | TokenKind::Int | TokenKind::Float | TokenKind::Str,
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
