// Desktop/tooling crate — unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod cargo;
mod check;
mod emulate;
mod flash;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Cross-compilation target of the SAMD21G18A (Cortex-M0+).
pub const TARGET: &str = "thumbv6m-none-eabi";

/// probe-rs chip name.
pub const CHIP: &str = "ATSAMD21G18A";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "SAMD21 I2S tone development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the firmware and flash it to the SAMD21 via probe-rs
    Flash {
        /// Build and flash release version
        #[arg(short, long)]
        release: bool,
    },
    /// Run the tone emulator (full boot against register-file mocks)
    Emulate {
        /// tracing filter passed as RUST_LOG
        #[arg(long, default_value = "info")]
        log: String,
    },
    /// Check the hardware build, the emulator build, and the no_std platform crate
    Check,
    /// Run unit and integration tests on the host
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Flash { release } => flash::run(release),
        Commands::Emulate { log } => emulate::run(&log),
        Commands::Check => check::run(),
        Commands::Test { unit, integration } => test::run(unit, integration),
    }
}
