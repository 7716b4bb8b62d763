use crate::Source;
use crate::SourceLocation;

/// A fatal lexical (or parse) error, positioned within a [`Source`].
///
/// The rendered `message` embeds the source name, a 1-based line/column
/// location, and a caret snippet of the offending source text:
///
/// ```text
/// Syntax Error GraphQL request (3:5) Unexpected character "?".
///
/// 2:
/// 3:     ?
///        ^
/// 4:
/// ```
///
/// This exact rendering is a compatibility surface other tooling depends
/// on; higher layers surface it unchanged to users.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    /// The fully-rendered message, caret snippet included.
    pub message: String,

    /// Line/column locations of the error (usually exactly one).
    pub locations: Vec<SourceLocation>,

    /// Code-point offsets corresponding to `locations`.
    pub positions: Vec<usize>,

    /// The source the error was raised against.
    pub source: Source,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SyntaxError {}

impl SyntaxError {
    /// Builds a syntax error at a code-point offset into `source`.
    pub fn new(source: &Source, position: usize, description: &str) -> Self {
        let location = SourceLocation::from_position(source, position);
        let message = format!(
            "Syntax Error {} ({}:{}) {}\n\n{}",
            source.name(),
            location.line,
            location.column,
            description,
            highlight_source_at_location(source, &location),
        );
        Self {
            message,
            locations: vec![location],
            positions: vec![position],
            source: source.clone(),
        }
    }
}

/// Renders up to three source lines centered on `location`, each prefixed
/// with a right-aligned 1-based line number, plus a caret line aligned under
/// the error column.
fn highlight_source_at_location(source: &Source, location: &SourceLocation) -> String {
    let line = location.line;
    let lines = split_lines(source.body());
    let pad_len = (line + 1).to_string().len();

    let fmt_line =
        |line_number: usize, text: &str| format!("{line_number:>pad_len$}: {text}\n");

    let mut result = String::new();
    if line >= 2 {
        result.push_str(&fmt_line(line - 1, lines[line - 2]));
    }
    if line <= lines.len() {
        result.push_str(&fmt_line(line, lines[line - 1]));
        result.push_str(&" ".repeat(1 + pad_len + location.column));
        result.push_str("^\n");
    }
    if line < lines.len() {
        result.push_str(&fmt_line(line + 1, lines[line]));
    }
    result
}

/// Splits a body into lines on LF, CR, and CRLF terminators.
///
/// Terminators are not included in the returned slices and a trailing
/// terminator does not produce a final empty line.
fn split_lines(body: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut line_start = 0;
    let mut chars = body.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\n' => {
                lines.push(&body[line_start..idx]);
                line_start = idx + 1;
            }
            '\r' => {
                lines.push(&body[line_start..idx]);
                line_start = idx + 1;
                if let Some(&(next_idx, '\n')) = chars.peek() {
                    chars.next();
                    line_start = next_idx + 1;
                }
            }
            _ => {}
        }
    }
    if line_start < body.len() {
        lines.push(&body[line_start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::split_lines;

    #[test]
    fn split_lines_handles_all_terminators() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
    }
}
