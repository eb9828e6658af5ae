// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the slotchain CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `SLOTCHAIN_THEME` first (for explicit control), then `COLORFGBG` (set by
//! some terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY
//! detection for pipelines.
//!
//! Everything here returns `String`s; callers decide where they go. The two
//! list views are the ones the menu and the demo print:
//!
//! ```text
//! Array view:  [a, c, b]
//! Linked list: c -> b -> a -> None
//! ```

use std::fmt::Display;
use std::sync::OnceLock;

use slotchain::{IndexedList, OpTimings, TimingReport};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 82;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SLOTCHAIN_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on stdout
pub fn use_colors() -> bool {
    colors_for(atty::Stream::Stdout)
}

/// Check if colors should be used on `stream`
pub fn colors_for(stream: atty::Stream) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(stream)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Remove ANSI escape sequences
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            out.push(c);
        }
    }
    out
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Content line: │ content          │
pub fn row(content: &str) -> String {
    let border = themed(GRAY, &[], "│");
    format!("{}{}{}", border, pad_right(content, BOX_WIDTH), border)
}

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    )
}

/// Section footer: └──────────────────┘
pub fn section_bot() -> String {
    themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// LIST VIEWS
// ═══════════════════════════════════════════════════════════════════════════

/// Logical order, as `[x0, x1, ...]`
pub fn logical_view<T: Display>(list: &IndexedList<T>) -> String {
    let items: Vec<String> = list.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Physical order from the head, as `a -> b -> None`
pub fn chain_view<T: Display>(list: &IndexedList<T>) -> String {
    let mut out = String::new();
    for value in list.chain() {
        out.push_str(&value.to_string());
        out.push_str(" -> ");
    }
    out.push_str("None");
    out
}

/// Both views, one per line, labelled like the menu prints them
pub fn both_views<T: Display>(list: &IndexedList<T>) -> String {
    format!(
        "{} {}\n{} {}",
        themed(BLUE, &[BOLD], "Array view: "),
        logical_view(list),
        themed(MAGENTA, &[BOLD], "Linked list:"),
        chain_view(list)
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// TIMING REPORT
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded nanosecond value (green=fast, yellow=medium, red=slow)
pub fn timing_ns(value: f64) -> String {
    let text = format!("{:>10.0}", value);
    let color: fn() -> String = if value < 200.0 {
        GREEN
    } else if value < 2_000.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

/// Naive / indexed ratio, e.g. `  12.3x`
pub fn speedup(naive: f64, indexed: f64) -> String {
    if indexed <= 0.0 {
        return themed(GRAY, &[], "    n/a");
    }
    let ratio = naive / indexed;
    let text = format!("{:>6.1}x", ratio);
    if ratio >= 2.0 {
        themed(GREEN, &[BOLD], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

fn op_cells(t: &OpTimings) -> String {
    format!(
        "{}{}{}",
        timing_ns(t.insert_ns),
        timing_ns(t.remove_ns),
        timing_ns(t.get_ns)
    )
}

/// Table of mean ns per call, naive vs. indexed, one row per size.
pub fn timing_table(report: &TimingReport, smoothed: bool) -> String {
    let label = if smoothed {
        format!("TIMING (window {})", report.config.window)
    } else {
        "TIMING (raw)".to_string()
    };
    let mut lines = vec![section_top(&label)];
    lines.push(row(&themed(
        GRAY,
        &[DIM],
        &format!(
            " {:>6} │{:>10}{:>10}{:>10} │{:>10}{:>10}{:>10} │{:>7}",
            "n", "ins", "rem", "get", "ins", "rem", "get", "ins"
        ),
    )));
    lines.push(row(&themed(
        GRAY,
        &[DIM],
        &format!(" {:>6} │{:^30} │{:^30} │", "", "naive (ns)", "indexed (ns)"),
    )));
    for r in &report.rows {
        lines.push(row(&format!(
            " {:>6} │{} │{} │{}",
            r.size,
            op_cells(&r.naive),
            op_cells(&r.indexed),
            speedup(r.naive.insert_ns, r.indexed.insert_ns)
        )));
    }
    lines.push(section_bot());
    lines.join("\n")
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use slotchain::{SizeRange, TimingConfig, TimingRow};

    #[test]
    fn visible_len_ignores_escapes() {
        assert_eq!(visible_len("hello"), 5);
        assert_eq!(visible_len("\x1b[32mhello\x1b[0m"), 5);
        assert_eq!(visible_len(""), 0);
    }

    #[test]
    fn rgb_format() {
        assert_eq!(rgb(255, 128, 64), "\x1b[38;2;255;128;64m");
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(onedark::RED, onelight::RED);
        assert_ne!(onedark::GRAY, onelight::GRAY);
    }

    #[test]
    fn views_show_logical_and_physical_order() {
        let mut list = IndexedList::new();
        list.insert_at(0, "a").unwrap();
        list.insert_at(1, "b").unwrap();
        list.insert_at(1, "c").unwrap();
        assert_eq!(logical_view(&list), "[a, c, b]");
        assert_eq!(chain_view(&list), "c -> b -> a -> None");

        let both = strip_ansi(&both_views(&list));
        assert_eq!(both, "Array view:  [a, c, b]\nLinked list: c -> b -> a -> None");
    }

    #[test]
    fn empty_views() {
        let list: IndexedList<u8> = IndexedList::new();
        assert_eq!(logical_view(&list), "[]");
        assert_eq!(chain_view(&list), "None");
    }

    #[test]
    fn table_rows_have_uniform_width() {
        let report = TimingReport {
            config: TimingConfig {
                sizes: SizeRange {
                    start: 10,
                    end: 30,
                    step: 10,
                },
                ..TimingConfig::default()
            },
            rows: vec![
                TimingRow {
                    size: 10,
                    naive: OpTimings {
                        insert_ns: 900.0,
                        remove_ns: 800.0,
                        get_ns: 500.0,
                    },
                    indexed: OpTimings {
                        insert_ns: 90.0,
                        remove_ns: 80.0,
                        get_ns: 20.0,
                    },
                },
                TimingRow {
                    size: 20,
                    naive: OpTimings::default(),
                    indexed: OpTimings::default(),
                },
            ],
        };
        let table = strip_ansi(&timing_table(&report, false));
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == BOX_WIDTH + 2), "{:?}", widths);
        assert!(table.contains("10.0x"));
        assert!(table.contains("n/a"));
    }
}
