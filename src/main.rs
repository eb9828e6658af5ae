// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

use slotchain::{timing, IndexedList, TimingConfig, TimingReport};

mod cli;
use cli::display::{self, both_views, row, section_bot, section_top};
use cli::menu::Menu;
use cli::{logger, Cli, Commands, TimingArgs};

fn main() {
    let cli = Cli::parse();
    let env_level = std::env::var(logger::LOG_ENV).ok();
    logger::init(logger::level_from(
        cli.verbose,
        cli.quiet,
        env_level.as_deref(),
    ));

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout());
            menu.run().context("menu session failed")?;
            log::debug!("menu closed with {} values", menu.list().len());
            Ok(())
        }
        Commands::Timing(args) => run_timing(&args),
        Commands::Demo => run_demo(&mut io::stdout().lock()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TIMING
// ═══════════════════════════════════════════════════════════════════════════

fn run_timing(args: &TimingArgs) -> Result<()> {
    let config = args.config();
    config.validate().context("invalid timing parameters")?;

    let report = sweep(&config)?;
    let shown = if args.raw {
        report
    } else {
        report.smoothed()
    };

    if let Some(path) = &args.output {
        write_report(&shown, Path::new(path))?;
    }

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &shown).context("failed to encode report")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", display::timing_table(&shown, !args.raw))?;
    }
    Ok(())
}

/// Create a progress style for the sweep progress bar
#[cfg(feature = "progress")]
fn create_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )?
    .progress_chars("━━╸"))
}

#[cfg(feature = "progress")]
fn sweep(config: &TimingConfig) -> Result<TimingReport> {
    let pb = ProgressBar::new(config.sizes.count() as u64);
    pb.set_style(create_progress_style()?);
    pb.set_prefix("Timing");

    let report = timing::run_with_progress(config, |r| {
        pb.set_message(format!("n={}", r.size));
        pb.inc(1);
    })?;

    pb.finish_and_clear();
    Ok(report)
}

#[cfg(not(feature = "progress"))]
fn sweep(config: &TimingConfig) -> Result<TimingReport> {
    Ok(timing::run(config)?)
}

fn write_report(report: &TimingReport, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(report).context("failed to encode report")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote timing report to {}", path.display());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// DEMO
// ═══════════════════════════════════════════════════════════════════════════

enum Step {
    Insert(usize, &'static str),
    Remove(usize),
}

const DEMO: [Step; 4] = [
    Step::Insert(0, "a"),
    Step::Insert(1, "b"),
    Step::Insert(1, "c"),
    Step::Remove(0),
];

fn run_demo(out: &mut impl Write) -> Result<()> {
    let mut list = IndexedList::new();

    for step in DEMO {
        let label = match step {
            Step::Insert(index, value) => {
                list.insert_at(index, value)?;
                format!("insert_at({}, {:?})", index, value)
            }
            Step::Remove(index) => {
                let value = list.remove_at(index)?;
                format!("remove_at({}) -> {:?}", index, value)
            }
        };
        list.check_invariants()
            .with_context(|| format!("list corrupted after {}", label))?;

        writeln!(out, "{}", section_top(&label))?;
        for line in both_views(&list).lines() {
            writeln!(out, "{}", row(&format!(" {}", line)))?;
        }
        writeln!(out, "{}", section_bot())?;
    }

    let past_end = list.len();
    if let Err(e) = list.get(past_end) {
        writeln!(out, "get({}) -> error: {}", past_end, e)?;
    }
    Ok(())
}
