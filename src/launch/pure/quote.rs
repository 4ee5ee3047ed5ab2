//! Shell-style quoting
//!
//! Every token is wrapped in double quotes with inner `"` and `\` escaped, so
//! paths with spaces or quotes survive being joined into one command line and
//! split back with a POSIX tokenizer.

use crate::error::LaunchError;

pub fn quote_arg(arg: &str) -> String {
    format!("\"{}\"", escape_quoted(arg))
}

/// Backslash-escape `"` and `\` so `text` can sit between double quotes
pub fn escape_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Quote each token and join them with single spaces
pub fn quote_command_line<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| quote_arg(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a command line back into tokens
pub fn split_command_line(line: &str) -> Result<Vec<String>, LaunchError> {
    shell_words::split(line)
        .map_err(|e| LaunchError::Config(format!("cannot parse command line {line}: {e}")))
}
