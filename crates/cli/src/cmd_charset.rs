// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `gramify charset` command: the c-gram pipeline.
//!
//! Resolves and validates configuration, opens the sink set, then
//! streams the corpus through the per-line runner.

use std::path::Path;

use anyhow::Context;

use gramify::cgram::runner::{FilterSink, Runner};
use gramify::cli::{CharsetArgs, Cli};
use gramify::config;
use gramify::corpus;
use gramify::error::ExitCode;
use gramify::file_reader::CorpusBytes;
use gramify::sink::{self, names};

pub fn run(cli: &Cli, args: &CharsetArgs) -> anyhow::Result<ExitCode> {
    let file = config::load_file_config(cli.config.as_deref())?;
    let cfg = config::resolve_charset(args, &file)?;
    config::check_input(&args.input)?;

    let bytes = CorpusBytes::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let primary_name = names::charset_primary(&args.output);
    let primary = sink::append_writer(Path::new(&primary_name))
        .with_context(|| format!("failed to open {primary_name}"))?;
    println!("Writing output to: {primary_name}");

    let mut filters = Vec::with_capacity(cfg.filters.len());
    for spec in &cfg.filters {
        let name = if cfg.rulify {
            names::charset_rule(spec.as_str(), &args.output)
        } else {
            names::charset_filter(spec.as_str(), &args.output)
        };
        let writer =
            sink::append_writer(Path::new(&name)).with_context(|| format!("failed to open {name}"))?;
        println!("Writing output to: {name}");
        filters.push(FilterSink {
            spec: spec.clone(),
            writer,
        });
    }

    let mut lines = 0u64;
    let mut runner = Runner::new(cfg.bounds, cfg.mixed, cfg.rulify, primary, filters);
    for line in corpus::lines(bytes.as_bytes()) {
        runner.process_line(&line)?;
        lines += 1;
    }
    runner.finish().context("failed to flush output")?;
    tracing::info!(lines, "charset run complete");

    super::print_sort_hint();
    Ok(ExitCode::Success)
}
