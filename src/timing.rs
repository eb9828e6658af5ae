// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random-index timing sweep: indexed list vs. naive baseline.
//!
//! For every size `n` in the configured range, each list is prefilled with
//! `n` head insertions and then driven through `trials` rounds of one random
//! insert, one random remove and one random get. Each call is timed on its own
//! and the per-operation mean is recorded. Indices are always drawn inside the
//! valid range for the list's current length; a list that still rejects one
//! aborts the sweep with [`TimingError::List`].
//!
//! The naive list should grow linearly with `n`; the indexed list should stay
//! flat. Rendering a plot is left to whatever consumes the JSON report.
//!
//! Both lists see the same index sequence for a given size: the RNG is seeded
//! from `seed ^ n` separately for each of them.

use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::baseline::NaiveList;
use crate::error::IndexError;
use crate::list::IndexedList;
use crate::positional::PositionalList;

/// Value used for the timed insertions.
pub const PROBE_VALUE: u64 = 999;

/// Half-open range of list sizes, `start..end` stepping by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl SizeRange {
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        (self.start..self.end).step_by(self.step.max(1))
    }

    /// Number of sizes the sweep will visit.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            start: 10,
            end: 5000,
            step: 20,
        }
    }
}

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub sizes: SizeRange,
    /// Rounds of insert/remove/get per size.
    pub trials: usize,
    /// Moving-average window applied by [`TimingReport::smoothed`].
    pub window: usize,
    /// Fixed seed for reproducible runs; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sizes: SizeRange::default(),
            trials: 20,
            window: 5,
            seed: None,
        }
    }
}

/// Rejected sweep parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroStep,
    ZeroTrials,
    EmptyRange { start: usize, end: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroStep => write!(f, "size step must be at least 1"),
            ConfigError::ZeroTrials => write!(f, "trials must be at least 1"),
            ConfigError::EmptyRange { start, end } => {
                write!(f, "size range {}..{} is empty", start, end)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Why a sweep stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingError {
    Config(ConfigError),
    /// A list rejected an index drawn inside its own range.
    List { size: usize, error: IndexError },
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingError::Config(e) => write!(f, "{}", e),
            TimingError::List { size, error } => {
                write!(f, "list of size {} rejected an in-range call: {}", size, error)
            }
        }
    }
}

impl std::error::Error for TimingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimingError::Config(e) => Some(e),
            TimingError::List { error, .. } => Some(error),
        }
    }
}

impl From<ConfigError> for TimingError {
    fn from(e: ConfigError) -> Self {
        TimingError::Config(e)
    }
}

impl TimingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.sizes.start >= self.sizes.end {
            return Err(ConfigError::EmptyRange {
                start: self.sizes.start,
                end: self.sizes.end,
            });
        }
        Ok(())
    }
}

/// Mean nanoseconds per call, one field per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpTimings {
    pub insert_ns: f64,
    pub remove_ns: f64,
    pub get_ns: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRow {
    pub size: usize,
    pub naive: OpTimings,
    pub indexed: OpTimings,
}

/// Result of a sweep. `config.seed` always holds the seed actually used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    pub config: TimingConfig,
    pub rows: Vec<TimingRow>,
}

impl TimingReport {
    /// Apply the configured moving average to every series.
    ///
    /// The result has `window - 1` fewer rows; each row is labelled with the
    /// size at the end of its window.
    pub fn smoothed(&self) -> TimingReport {
        let window = self.config.window;
        let series = |pick: fn(&TimingRow) -> f64| -> Vec<f64> {
            smooth(&self.rows.iter().map(pick).collect::<Vec<_>>(), window)
        };

        let naive_insert = series(|r| r.naive.insert_ns);
        let naive_remove = series(|r| r.naive.remove_ns);
        let naive_get = series(|r| r.naive.get_ns);
        let indexed_insert = series(|r| r.indexed.insert_ns);
        let indexed_remove = series(|r| r.indexed.remove_ns);
        let indexed_get = series(|r| r.indexed.get_ns);

        let skip = self.rows.len() - naive_insert.len();
        let rows = self.rows[skip..]
            .iter()
            .enumerate()
            .map(|(i, row)| TimingRow {
                size: row.size,
                naive: OpTimings {
                    insert_ns: naive_insert[i],
                    remove_ns: naive_remove[i],
                    get_ns: naive_get[i],
                },
                indexed: OpTimings {
                    insert_ns: indexed_insert[i],
                    remove_ns: indexed_remove[i],
                    get_ns: indexed_get[i],
                },
            })
            .collect();

        TimingReport {
            config: self.config.clone(),
            rows,
        }
    }
}

/// Moving average over `window` consecutive samples.
///
/// Returns `series.len() - window + 1` values. A window of 0 or 1, or one
/// longer than the series, returns the series unchanged.
pub fn smooth(series: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 || window > series.len() {
        return series.to_vec();
    }
    series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Prefill `list` with `n` insertions at position 0 (values `0..n`).
pub fn prefill<L: PositionalList<u64>>(list: &mut L, n: usize) -> Result<(), IndexError> {
    for value in 0..n as u64 {
        list.insert_at(0, value)?;
    }
    Ok(())
}

/// Time `trials` rounds of random insert/remove/get on a list of size `n`.
pub fn measure<L>(n: usize, trials: usize, rng: &mut StdRng) -> Result<OpTimings, IndexError>
where
    L: PositionalList<u64> + Default,
{
    let mut list = L::default();
    prefill(&mut list, n)?;

    let (mut insert, mut remove, mut get) = (0u128, 0u128, 0u128);
    for _ in 0..trials {
        let index = rng.gen_range(0..list.len().max(1));
        let start = Instant::now();
        let inserted = black_box(list.insert_at(index, PROBE_VALUE));
        insert += start.elapsed().as_nanos();
        inserted?;

        let index = rng.gen_range(0..list.len());
        let start = Instant::now();
        let removed = black_box(list.remove_at(index));
        remove += start.elapsed().as_nanos();
        removed?;

        if !list.is_empty() {
            let index = rng.gen_range(0..list.len());
            let start = Instant::now();
            let got = black_box(list.get(index));
            get += start.elapsed().as_nanos();
            got?;
        }
    }

    let trials = trials.max(1) as f64;
    Ok(OpTimings {
        insert_ns: insert as f64 / trials,
        remove_ns: remove as f64 / trials,
        get_ns: get as f64 / trials,
    })
}

/// Run the full sweep.
pub fn run(config: &TimingConfig) -> Result<TimingReport, TimingError> {
    run_with_progress(config, |_| {})
}

/// Run the full sweep, calling `on_row` after each size completes.
pub fn run_with_progress(
    config: &TimingConfig,
    mut on_row: impl FnMut(&TimingRow),
) -> Result<TimingReport, TimingError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "timing sweep: sizes {}..{} step {}, {} trials, seed {}",
        config.sizes.start,
        config.sizes.end,
        config.sizes.step,
        config.trials,
        seed
    );

    let mut rows = Vec::with_capacity(config.sizes.count());
    for n in config.sizes.iter() {
        let size_seed = seed ^ n as u64;
        let at_size = |error| TimingError::List { size: n, error };
        let naive =
            measure::<NaiveList<u64>>(n, config.trials, &mut StdRng::seed_from_u64(size_seed))
                .map_err(at_size)?;
        let indexed =
            measure::<IndexedList<u64>>(n, config.trials, &mut StdRng::seed_from_u64(size_seed))
                .map_err(at_size)?;
        let row = TimingRow {
            size: n,
            naive,
            indexed,
        };
        log::debug!(
            "n={}: naive {:.0}/{:.0}/{:.0} ns, indexed {:.0}/{:.0}/{:.0} ns",
            n,
            naive.insert_ns,
            naive.remove_ns,
            naive.get_ns,
            indexed.insert_ns,
            indexed.remove_ns,
            indexed.get_ns
        );
        on_row(&row);
        rows.push(row);
    }

    Ok(TimingReport {
        config: TimingConfig {
            seed: Some(seed),
            ..config.clone()
        },
        rows,
    })
}
