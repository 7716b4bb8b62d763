use thiserror::Error;
use veriql_parser::SourceLocation;

/// A recoverable document-validation finding.
///
/// Unlike [`SyntaxError`](veriql_parser::SyntaxError) and
/// [`SchemaBuildError`](crate::SchemaBuildError), these never abort
/// anything: rules report them into the shared context and validation
/// carries on, so one pass surfaces every problem in the document.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub locations: Vec<SourceLocation>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, locations: Vec<SourceLocation>) -> Self {
        Self {
            message: message.into(),
            locations,
        }
    }
}
