// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the slotchain command-line interface.
//!
//! Three subcommands: `menu` for an interactive session against one list,
//! `timing` to sweep random-index operations across list sizes and compare the
//! indexed list with the naive baseline, and `demo` to replay the canonical
//! insert/remove walkthrough with both views printed after every step.

pub mod display;
pub mod logger;
pub mod menu;

use clap::{Args, Parser, Subcommand};
use slotchain::{SizeRange, TimingConfig};

#[derive(Parser)]
#[command(
    name = "slotchain",
    about = "Singly linked list with O(1) positional insert, remove and get",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu: insert, get, remove and show a list of strings
    Menu,

    /// Time random-index operations on the indexed and naive lists
    Timing(TimingArgs),

    /// Replay the a/b/c walkthrough, printing array and chain views
    Demo,
}

#[derive(Args, Debug, Clone)]
pub struct TimingArgs {
    /// Smallest list size
    #[arg(long, default_value = "10")]
    pub start: usize,

    /// Largest list size (exclusive)
    #[arg(long, default_value = "5000")]
    pub end: usize,

    /// Distance between consecutive sizes
    #[arg(long, default_value = "20")]
    pub step: usize,

    /// Insert/remove/get rounds per size
    #[arg(short, long, default_value = "20")]
    pub trials: usize,

    /// Moving-average window for the smoothed report
    #[arg(short, long, default_value = "5")]
    pub window: usize,

    /// Fixed RNG seed for reproducible index sequences
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report raw per-size averages instead of the smoothed series
    #[arg(long)]
    pub raw: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<String>,
}

impl TimingArgs {
    pub fn config(&self) -> TimingConfig {
        TimingConfig {
            sizes: SizeRange {
                start: self.start,
                end: self.end,
                step: self.step,
            },
            trials: self.trials,
            window: self.window,
            seed: self.seed,
        }
    }
}
