//! Custom cargo commands for the slotchain crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (no Kani, no fuzzing)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [target] [seconds]
//!   cargo xtask kani      - Run Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["op_sequence", "drain"];
const DEFAULT_FUZZ_SECONDS: u64 = 60;

/// Minimum number of `Contract violation` messages expected in src/verify.
const MIN_CONTRACT_MARKERS: usize = 5;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.get(1).map(String::as_str), args.get(2))?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + Kani)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run fuzz targets: fuzz [op_sequence|drain] [seconds]
  kani      Run Kani proofs only
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("slotchain Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/5] Running Rust tests (debug, contracts on)...");
    run_cargo(&project_root()?, &["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running Rust tests (release, contracts off)...");
    run_cargo(&project_root()?, &["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(
        &project_root()?,
        &["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"],
    )?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    let root = project_root()?;
    run_cargo(&root, &["test"])?;
    run_cargo(&root.join("kani-proofs"), &["test"])
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    let root = project_root()?;
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&root, &["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&root, &["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&root, &["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&project_root()?, &["bench"])
}

/// Run one fuzz target, or all of them, for a bounded time each.
fn fuzz(target: Option<&str>, seconds: Option<&String>) -> Result<()> {
    let seconds = match seconds {
        Some(s) => s
            .parse::<u64>()
            .with_context(|| format!("invalid fuzz duration '{}'", s))?,
        None => DEFAULT_FUZZ_SECONDS,
    };
    let targets: Vec<&str> = match target {
        Some(t) if FUZZ_TARGETS.contains(&t) => vec![t],
        Some(t) => bail!("unknown fuzz target '{}' (known: {})", t, FUZZ_TARGETS.join(", ")),
        None => FUZZ_TARGETS.to_vec(),
    };

    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", seconds);
    for target in targets {
        println!("Fuzzing {} for {}s...", target, seconds);
        run_cargo(
            &fuzz_dir,
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }
    Ok(())
}

/// Run Kani proofs, skipping when cargo-kani is not installed
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    let installed = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    if !installed {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    run_cargo(&kani_dir, &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = root.join("src/verify/contracts.rs");
    let source = std::fs::read_to_string(&contracts)
        .with_context(|| format!("Failed to read {}", contracts.display()))?;

    let count = count_markers(&source);
    if count < MIN_CONTRACT_MARKERS {
        bail!(
            "Expected at least {} contract checks, found {}. Someone may have removed them!",
            MIN_CONTRACT_MARKERS,
            count
        );
    }
    if !source.contains("INVARIANTS") {
        bail!("contracts.rs lost its INVARIANTS table");
    }

    Ok(())
}

fn count_markers(source: &str) -> usize {
    source
        .lines()
        .filter(|line| line.contains("\"Contract violation:"))
        .count()
}
