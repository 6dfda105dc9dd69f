//! Shared helpers for running cargo and reporting the outcome.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// Run `cargo <args>`, capture its output, and report the elapsed time.
pub fn run(label: &str, args: &[&str]) -> Result<(Output, f64)> {
    println!("{}", format!("  {label}...").cyan());
    let start = Instant::now();
    let output = Command::new("cargo")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;
    Ok((output, start.elapsed().as_secs_f64()))
}

/// Print a failed step's captured stderr and bail.
pub fn fail(label: &str, output: &Output) -> Result<()> {
    eprintln!("{}", format!("  ✗ {label} failed").red().bold());
    eprintln!();
    eprintln!("{}", String::from_utf8_lossy(&output.stderr));
    anyhow::bail!("{label} failed")
}

/// Sum every `test result:` line of a cargo test run.
///
/// Returns `None` if no result line was found.
pub fn test_summary(output: &str) -> Option<(u32, u32)> {
    let mut found = false;
    let (mut passed, mut failed) = (0u32, 0u32);
    for line in output.lines() {
        let Some(rest) = line.split("test result:").nth(1) else {
            continue;
        };
        found = true;
        for part in rest.split(';') {
            let mut words = part.split_whitespace().rev();
            let (Some(kind), Some(count)) = (words.next(), words.next()) else {
                continue;
            };
            let Ok(n) = count.parse::<u32>() else {
                continue;
            };
            match kind {
                "passed" => passed = passed.saturating_add(n),
                "failed" => failed = failed.saturating_add(n),
                _ => {}
            }
        }
    }
    found.then_some((passed, failed))
}
