use crate::token::TokenKind;

/// A single lexical unit of a GraphQL document.
///
/// `start` and `end` are half-open code-point offsets into the
/// [`Source`](crate::Source) body the token was lexed from. `value` is
/// `Some` only for [`Name`](TokenKind::Name), [`Int`](TokenKind::Int),
/// [`Float`](TokenKind::Float), and [`Str`](TokenKind::Str) tokens:
/// the matched text verbatim for the first three, and the decoded content
/// (escape sequences resolved, quotes stripped) for strings. Punctuators
/// and EOF carry `None`, not an empty string.
///
/// Tokens are immutable values compared by structural equality.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: Option<String>,
}

impl Token {
    /// A valueless token (punctuator or EOF).
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            value: None,
        }
    }

    /// A token carrying a literal value.
    pub fn with_value(
        kind: TokenKind,
        start: usize,
        end: usize,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            value: Some(value.into()),
        }
    }
}

impl std::fmt::Display for Token {
    /// Renders the token the way parsers name it in error messages: the
    /// kind's display string, plus the literal value when one is present
    /// (e.g. `Name "foo"`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} \"{}\"", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}
