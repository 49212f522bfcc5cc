// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `gramify character` command: sliding-window k-grams.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use gramify::cli::{CharacterArgs, Cli};
use gramify::config;
use gramify::corpus;
use gramify::error::ExitCode;
use gramify::file_reader::CorpusBytes;
use gramify::kgram;
use gramify::sink::{self, names, write_line};

pub fn run(cli: &Cli, args: &CharacterArgs) -> anyhow::Result<ExitCode> {
    let file = config::load_file_config(cli.config.as_deref())?;
    let cfg = config::resolve_character(args, &file)?;
    config::check_input(&args.input)?;

    let bytes = CorpusBytes::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    if cfg.rolling {
        let name = names::rolling(&args.output);
        let mut out = sink::append_writer(Path::new(&name))
            .with_context(|| format!("failed to open {name}"))?;
        println!("Writing output to: {name}");

        for line in corpus::lines(bytes.as_bytes()) {
            kgram::rolling(&line, cfg.min, cfg.max, &mut out)?;
        }
        out.flush().context("failed to flush output")?;
    } else {
        let start_name = names::k_start(&args.output);
        let mid_name = names::k_mid(&args.output);
        let end_name = names::k_end(&args.output);
        let mut start = sink::append_writer(Path::new(&start_name))
            .with_context(|| format!("failed to open {start_name}"))?;
        let mut mid = sink::append_writer(Path::new(&mid_name))
            .with_context(|| format!("failed to open {mid_name}"))?;
        let mut end = sink::append_writer(Path::new(&end_name))
            .with_context(|| format!("failed to open {end_name}"))?;
        println!("Writing output to: {start_name}");
        println!("Writing output to: {mid_name}");
        println!("Writing output to: {end_name}");

        for line in corpus::lines(bytes.as_bytes()) {
            // The positional walk is quadratic in line length; skip
            // pathological records.
            if line.chars().count() > kgram::MAX_POSITIONAL_LINE {
                continue;
            }
            let buckets = kgram::positional(&line, cfg.min, cfg.max);
            for gram in &buckets.start {
                write_line(&mut start, gram)?;
            }
            for gram in &buckets.mid {
                write_line(&mut mid, gram)?;
            }
            for gram in &buckets.end {
                write_line(&mut end, gram)?;
            }
        }
        start.flush().context("failed to flush output")?;
        mid.flush().context("failed to flush output")?;
        end.flush().context("failed to flush output")?;
    }

    super::print_sort_hint();
    Ok(ExitCode::Success)
}
