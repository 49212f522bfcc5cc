// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `gramify word` command: token-window n-grams.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use gramify::cli::{Cli, WordArgs};
use gramify::config;
use gramify::corpus;
use gramify::error::ExitCode;
use gramify::file_reader::CorpusBytes;
use gramify::ngram;
use gramify::sink::{self, names};

pub fn run(cli: &Cli, args: &WordArgs) -> anyhow::Result<ExitCode> {
    let file = config::load_file_config(cli.config.as_deref())?;
    let cfg = config::resolve_word(args, &file)?;
    config::check_input(&args.input)?;

    let bytes = CorpusBytes::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let tokens = ngram::tokenize(corpus::lines(bytes.as_bytes()));

    let name = names::word(&args.output);
    let mut out =
        sink::append_writer(Path::new(&name)).with_context(|| format!("failed to open {name}"))?;
    println!("Writing output to: {name}");

    ngram::generate(&tokens, cfg.min, cfg.max, &mut out)?;
    out.flush().context("failed to flush output")?;
    tracing::info!(tokens = tokens.len(), "word run complete");

    super::print_sort_hint();
    Ok(ExitCode::Success)
}
