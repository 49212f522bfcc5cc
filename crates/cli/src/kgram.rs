// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character k-gram generation.
//!
//! Rolling mode emits every substring with length within bounds into a
//! single sink. Positional mode walks a grow-then-slide cursor over the
//! word and splits the grams into three groups: prefixes shorter than
//! the maximum (start), every maximum-length window (mid), and suffixes
//! shorter than the maximum (end).

use std::io::{self, Write};

use crate::sink::write_line;

/// Lines longer than this are skipped by the positional walk.
pub const MAX_POSITIONAL_LINE: usize = 256;

/// Positional gram groups for one word.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Buckets<'a> {
    pub start: Vec<&'a str>,
    pub mid: Vec<&'a str>,
    pub end: Vec<&'a str>,
}

/// Byte offsets of each character boundary, including the end of the
/// string.
fn char_boundaries(s: &str) -> Vec<usize> {
    let mut idx: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
    idx.push(s.len());
    idx
}

/// Emit every substring with length in `min..=max`.
pub fn rolling<W: Write>(line: &str, min: usize, max: usize, out: &mut W) -> io::Result<()> {
    let idx = char_boundaries(line);
    let chars = idx.len() - 1;
    for size in min..=max {
        if size == 0 || size > chars {
            continue;
        }
        for at in 0..=chars - size {
            write_line(out, &line[idx[at]..idx[at + size]])?;
        }
    }
    Ok(())
}

/// Walk `word` with a grow-then-slide cursor, collecting start, mid and
/// end grams with length at least `min`. Words no longer than `min`
/// produce nothing.
pub fn positional(word: &str, min: usize, max: usize) -> Buckets<'_> {
    let mut buckets = Buckets::default();
    let idx = char_boundaries(word);
    let chars = idx.len() - 1;
    if chars <= min {
        return buckets;
    }

    let (mut from, mut to) = (0usize, 1usize);
    while from < chars {
        let width = to - from;
        let gram = &word[idx[from]..idx[to]];
        if width == max && to < chars {
            // Full-width window sliding through the interior.
            if width >= min {
                buckets.mid.push(gram);
            }
            from += 1;
            to += 1;
        } else if width == max && to == chars {
            // Full-width window flush with the end; start shrinking.
            if width >= min {
                buckets.mid.push(gram);
            }
            from += 1;
        } else if from == 0 && to < chars && width <= max && width < chars - 1 {
            // Growing prefix.
            if width >= min {
                buckets.start.push(gram);
            }
            to += 1;
        } else if from == 0 && to < chars && width <= max && width == chars - 1 {
            // Longest prefix; switch to the suffix leg.
            if width >= min {
                buckets.start.push(gram);
            }
            from += 1;
            to += 1;
        } else if from > 0 && to == chars && width < max {
            // Shrinking suffix.
            if width >= min {
                buckets.end.push(gram);
            }
            from += 1;
        } else {
            // Cursor state the walk never visits for valid bounds.
            break;
        }
    }
    buckets
}

#[cfg(test)]
#[path = "kgram_tests.rs"]
mod tests;
