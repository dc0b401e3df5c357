//! Splitting a line of player input into a verb and its arguments.

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub verb: String,
    pub args: Vec<String>,
}

/// Parse a line of input.
///
/// Surrounding whitespace is trimmed and the rest is split on single spaces, so
/// repeated spaces produce empty arguments. Returns `None` for a blank line.
pub fn parse_line(line: &str) -> Option<CommandLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let mut tokens = line.split(' ').map(str::to_string);
    let verb = tokens.next()?;
    Some(CommandLine {
        verb,
        args: tokens.collect(),
    })
}
