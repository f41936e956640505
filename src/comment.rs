//! Turns plain text into `//` line comments.

/// Line comment marker prefixed to every line.
pub const COMMENT_MARKER: &str = "//";

/// Prefixes each line of `text` with `// `.
///
/// Lines already starting with `//` are kept as they are and blank lines
/// become a bare `//`. Lines are joined back with `\n` and no trailing newline
/// is appended, so an input ending in `\n` ends in a bare `//` line.
pub fn commentify(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.starts_with(COMMENT_MARKER) {
                line.to_string()
            } else if line.is_empty() {
                COMMENT_MARKER.to_string()
            } else {
                format!("{COMMENT_MARKER} {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
