/// A GraphQL request body paired with a display name.
///
/// The name appears in rendered [`SyntaxError`](crate::SyntaxError) messages
/// (e.g. `Syntax Error GraphQL request (1:1) ...`) and defaults to
/// `"GraphQL request"`. A `Source` is immutable once constructed.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    /// Wraps `body` with the default display name.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: "GraphQL request".to_string(),
        }
    }

    /// Wraps `body` with an explicit display name (typically a file path or
    /// endpoint label).
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }

    /// The raw request text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The display name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }
}
