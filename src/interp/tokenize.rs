//! interp::tokenize
//!
//! Whitespace tokenization of command lines.
//!
//! Tokens are capped at [`MAX_TOKEN_LEN`] characters; the tail of an
//! over-long token is discarded rather than re-scanned as a fresh token.

use crate::core::types::MAX_TOKEN_LEN;

/// Split an argument blob into whitespace-delimited tokens.
///
/// Each token is capped at [`MAX_TOKEN_LEN`] characters. An empty or
/// all-whitespace blob yields no tokens.
pub fn tokens(blob: &str) -> impl Iterator<Item = &str> {
    blob.split_whitespace().map(cap)
}

/// Split a line into its command keyword and the argument blob.
///
/// The keyword is the line's first token (length-capped like any other);
/// the blob is the remainder of the line, verbatim. Returns `None` for a
/// blank line.
pub fn split_command(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }
    match line.find(char::is_whitespace) {
        Some(at) => Some((cap(&line[..at]), &line[at..])),
        None => Some((cap(line), "")),
    }
}

/// Cap a token at [`MAX_TOKEN_LEN`] characters.
fn cap(token: &str) -> &str {
    match token.char_indices().nth(MAX_TOKEN_LEN) {
        Some((at, _)) => &token[..at],
        None => token,
    }
}
