/// Pure string processing utilities for command input

/// Check if a string is empty after trimming
pub fn is_empty_or_whitespace(text: &str) -> bool {
    text.trim().is_empty()
}

/// Split a line into a lowercase keyword and its positional arguments
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    if is_empty_or_whitespace(line) {
        return None;
    }
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?.to_lowercase();
    Some((keyword, tokens.collect()))
}
