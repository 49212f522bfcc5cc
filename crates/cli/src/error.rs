// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy and process exit codes.
//!
//! Configuration problems are fatal and detected before any output file
//! is created; per-line decode problems are handled where they occur
//! (the line is skipped); sink I/O errors abort the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::cgram::filter::FilterSpecError;

/// Fatal configuration problems. All variants are reported before any
/// output file exists, so a failed run leaves no partial output.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input file does not exist: {0}")]
    InputMissing(PathBuf),

    #[error("min length {min} must be smaller or equal to max length {max}")]
    InvertedBounds { min: usize, max: usize },

    #[error(transparent)]
    Filter(#[from] FilterSpecError),

    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// The run started but failed (typically sink I/O).
    Failure = 1,
    /// Invalid configuration; nothing was written.
    Config = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
