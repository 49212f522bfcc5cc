// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word n-gram generation.
//!
//! The whole corpus is flattened into one token stream (lines joined by
//! a single space); token windows of every size within bounds are
//! emitted, then re-emitted over alphanumeric-stripped tokens. Windows
//! truncate at the end of the stream rather than being dropped.

use std::io::{self, Write};

use crate::sink::write_line;

/// Flatten corpus lines into the token stream. Tokens are separated by
/// single spaces; empty tokens are dropped.
pub fn tokenize<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        for token in line.as_ref().split(' ') {
            if !token.is_empty() {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}

/// Strip each token to its alphanumeric characters. Tokens that lose
/// every character stay in the stream as empty strings.
pub fn alphanumeric_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.chars().filter(|c| c.is_alphanumeric()).collect())
        .collect()
}

/// Emit every window of each size in `min..=max`, starting at every
/// position except the last.
pub fn write_windows<W: Write>(
    tokens: &[String],
    min: usize,
    max: usize,
    out: &mut W,
) -> io::Result<()> {
    if tokens.len() < 2 {
        return Ok(());
    }
    // Zero-size windows would only produce blank lines.
    for size in min.max(1)..=max {
        for start in 0..tokens.len() - 1 {
            let end = (start + size).min(tokens.len());
            write_line(out, &tokens[start..end].join(" "))?;
        }
    }
    Ok(())
}

/// Full word-gram run: the raw pass followed by the
/// alphanumeric-stripped pass.
pub fn generate<W: Write>(tokens: &[String], min: usize, max: usize, out: &mut W) -> io::Result<()> {
    write_windows(tokens, min, max, out)?;
    let stripped = alphanumeric_tokens(tokens);
    write_windows(&stripped, min, max, out)
}

#[cfg(test)]
#[path = "ngram_tests.rs"]
mod tests;
