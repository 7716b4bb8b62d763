use crate::Source;

/// A 1-based line/column position within a [`Source`] body.
///
/// Every user-visible error message embeds one of these; both fields count
/// from 1 (the first character of a document is line 1, column 1).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Converts a code-point offset into `source.body()` to a line/column
    /// position.
    ///
    /// Line breaks are LF, CR, and CRLF (counted as a single break). The
    /// column counts code points since the most recent break, so it matches
    /// what text editors display even for multi-byte characters.
    pub fn from_position(source: &Source, position: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        let mut prev_was_cr = false;

        for ch in source.body().chars().take(position) {
            match ch {
                '\n' => {
                    if prev_was_cr {
                        // The \n of a \r\n pair; the break was already
                        // counted at the \r.
                        prev_was_cr = false;
                    } else {
                        line += 1;
                        column = 1;
                    }
                }
                '\r' => {
                    line += 1;
                    column = 1;
                    prev_was_cr = true;
                }
                _ => {
                    column += 1;
                    prev_was_cr = false;
                }
            }
        }

        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
