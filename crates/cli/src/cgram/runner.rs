// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-line charset pipeline.
//!
//! For every classification pass: segment the line, write the in-bounds
//! segments to the primary sink, apply every filter spec, then glue
//! one-character separators generation by generation, re-filtering each
//! generation's freshly merged strings.

use std::io::{self, Write};

use crate::cgram::class::Ruleset;
use crate::cgram::filter::FilterSpec;
use crate::cgram::glue;
use crate::cgram::rule;
use crate::cgram::segmenter::{self, Bounds};
use crate::sink::write_line;

/// One filter spec bound to its open destination. In rulify runs the
/// destination is the spec's `.rule` sink, otherwise its wordlist sink.
pub struct FilterSink<W: Write> {
    pub spec: FilterSpec,
    pub writer: W,
}

/// Charset pipeline over one set of open sinks.
pub struct Runner<W: Write> {
    bounds: Bounds,
    passes: &'static [Ruleset],
    rulify: bool,
    primary: W,
    filters: Vec<FilterSink<W>>,
}

impl<W: Write> Runner<W> {
    pub fn new(
        bounds: Bounds,
        mixed: bool,
        rulify: bool,
        primary: W,
        filters: Vec<FilterSink<W>>,
    ) -> Self {
        Self {
            bounds,
            passes: Ruleset::passes(mixed),
            rulify,
            primary,
            filters,
        }
    }

    /// Run every classification pass over one decoded line.
    pub fn process_line(&mut self, line: &str) -> io::Result<()> {
        for &ruleset in self.passes {
            self.process_pass(line, ruleset)?;
        }
        Ok(())
    }

    fn process_pass(&mut self, line: &str, ruleset: Ruleset) -> io::Result<()> {
        let segmented = segmenter::segment(line, ruleset, self.bounds);
        for gram in &segmented.matches {
            write_line(&mut self.primary, gram)?;
        }
        self.apply_filters(&segmented.matches)?;
        self.glue(&segmented.all)
    }

    /// Apply every configured filter spec to one match sequence.
    fn apply_filters(&mut self, matches: &[&str]) -> io::Result<()> {
        let rulify = self.rulify;
        for sink in &mut self.filters {
            if rulify {
                if let Some(line) = rule::prepend_rule(&sink.spec, matches) {
                    write_line(&mut sink.writer, &line)?;
                }
                if let Some(line) = rule::overwrite_rule(&sink.spec, matches) {
                    write_line(&mut sink.writer, &line)?;
                }
            } else if let Some(pieces) = sink.spec.pieces(matches) {
                for piece in &pieces {
                    write_line(&mut sink.writer, piece)?;
                }
            }
        }
        Ok(())
    }

    /// Drive the glue pass to its fixed point over the unfiltered
    /// segment sequence.
    fn glue(&mut self, all: &[&str]) -> io::Result<()> {
        let mut seq: Vec<String> = all.iter().map(|s| (*s).to_string()).collect();
        while let Some((next, merged)) = glue::merge_generation(&seq) {
            let bounds = self.bounds;
            let in_bounds: Vec<&str> = merged
                .iter()
                .map(String::as_str)
                .filter(|m| bounds.accepts(m))
                .collect();
            for gram in &in_bounds {
                write_line(&mut self.primary, gram)?;
            }
            self.apply_filters(&in_bounds)?;
            seq = next;
        }
        Ok(())
    }

    /// Flush all sinks. Consumes the runner; nothing may be written
    /// after this.
    pub fn finish(self) -> io::Result<()> {
        self.into_sinks().map(|_| ())
    }

    /// Flush and hand the sinks back to the caller.
    pub fn into_sinks(mut self) -> io::Result<(W, Vec<FilterSink<W>>)> {
        self.primary.flush()?;
        for sink in &mut self.filters {
            sink.writer.flush()?;
        }
        Ok((self.primary, self.filters))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
