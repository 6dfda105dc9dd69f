use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::{cargo, TARGET};

/// A build check: failing ones abort, advisory ones only report.
struct Step {
    label: &'static str,
    args: &'static [&'static str],
    fatal: bool,
}

const STEPS: &[Step] = &[
    Step {
        label: "Hardware target (SAMD21, thumbv6m)",
        args: &["check", "-p", "firmware", "--target", TARGET, "--features", "hardware"],
        fatal: true,
    },
    Step {
        label: "Emulator target (host)",
        args: &["check", "-p", "firmware", "--features", "emulator", "--examples"],
        fatal: true,
    },
    Step {
        label: "Firmware with defmt alone",
        args: &["check", "-p", "firmware", "--target", TARGET, "--features", "defmt"],
        fatal: true,
    },
    Step {
        label: "Platform crate (no_std)",
        args: &["check", "-p", "platform", "--target", TARGET, "--no-default-features"],
        fatal: true,
    },
    Step {
        label: "Clippy",
        args: &[
            "clippy", "-p", "platform", "-p", "firmware", "-p", "xtask", "--features",
            "firmware/emulator", "--all-targets", "--", "-D", "warnings",
        ],
        fatal: false,
    },
    Step {
        label: "Formatting",
        args: &["fmt", "--all", "--check"],
        fatal: false,
    },
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for step in STEPS {
        let (output, secs) = cargo::run(step.label, step.args)?;
        if output.status.success() {
            println!("{}", format!("  ✓ {} passed in {secs:.2}s", step.label).green());
        } else if step.fatal {
            return cargo::fail(step.label, &output);
        } else {
            eprintln!("{}", format!("  ⚠ {} reported issues", step.label).yellow().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        }
        println!();
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
