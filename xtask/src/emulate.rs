use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

pub fn run(log: &str) -> Result<()> {
    println!();
    println!("{}", "🖥  Starting tone emulator...".cyan().bold());
    println!("   {}", format!("RUST_LOG={log}").dimmed());
    println!();

    let status = Command::new("cargo")
        .args([
            "run",
            "-p",
            "firmware",
            "--example",
            "tone_emulator",
            "--features",
            "emulator",
        ])
        .env("RUST_LOG", log)
        .status()
        .context("Failed to run the tone emulator")?;

    if !status.success() {
        anyhow::bail!("Emulator exited with {status}");
    }
    Ok(())
}
