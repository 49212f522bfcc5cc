// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output sinks and the file naming convention.
//!
//! Every destination is opened once, in append mode, before the first
//! line is processed; repeated runs accumulate, so callers must treat
//! output paths as append-only logs.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open a buffered append-mode sink, creating the file if missing.
pub fn append_writer(path: &Path) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(BufWriter::new(file))
}

/// Write one candidate line.
pub fn write_line<W: Write>(out: &mut W, s: &str) -> io::Result<()> {
    out.write_all(s.as_bytes())?;
    out.write_all(b"\n")
}

/// Output file names derived from the user-supplied output name.
pub mod names {
    /// Word n-gram sink.
    pub fn word(output: &str) -> String {
        format!("n_{output}")
    }

    /// Rolling character k-gram sink.
    pub fn rolling(output: &str) -> String {
        format!("k_rolling.{output}")
    }

    /// Positional character k-gram sinks.
    pub fn k_start(output: &str) -> String {
        format!("k_start.{output}")
    }
    pub fn k_mid(output: &str) -> String {
        format!("k_mid.{output}")
    }
    pub fn k_end(output: &str) -> String {
        format!("k_end.{output}")
    }

    /// Charset primary sink.
    pub fn charset_primary(output: &str) -> String {
        format!("c_{output}")
    }

    /// Charset filter sink for one spec.
    pub fn charset_filter(spec: &str, output: &str) -> String {
        format!("c_{spec}_{output}")
    }

    /// Charset rule sink for one spec.
    pub fn charset_rule(spec: &str, output: &str) -> String {
        format!("c_{spec}_{output}.rule")
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
