//! SAMD21 I2S tone firmware
//!
//! Brings up the SAMD21 I2S peripheral and streams a precomputed sine tone
//! to a PCM5102 DAC by polling TXRDY.
//!
//! # Architecture
//!
//! ```text
//! main.rs (claims hardware, calls boot)
//!         ↓
//! boot (table → clock gate → bring-up → stream)
//!         ↓
//! clock / i2s drivers (typestate sequencer, polling transmitter)
//!         ↓
//! ClockTree / I2sRegisters traits ── Samd21* (MMIO) | Mock* (host)
//!         ↓
//! platform (samples, register values, wait policies, stream)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for the SAMD21G18A (cortex-m-rt, defmt-rtt, MMIO drivers)
//! - `emulator` - Desktop run against the register-file mocks (tracing)
//! - `std` - Enable standard library (for emulator and testing)
//! - `defmt` - defmt logging in the library code
//!
//! # Examples
//!
//! ## Hardware Target
//!
//! ```bash
//! cargo xtask flash
//! ```
//!
//! ## Emulator Target
//!
//! ```bash
//! cargo run -p firmware --example tone_emulator --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
// unsafe fn body is not implicitly unsafe block
// Logging discipline (allow println in tests via clippy.toml)
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
// Pedantic lints too noisy for firmware application code:
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod boot;
pub mod clock;
pub mod error;
pub mod hal;
pub mod i2s;

// Re-export key types
pub use boot::{start_tone, BootError, ToneOutput, BOOT_SEQUENCE_STEPS};
pub use clock::{enable_peripheral_clock, ClockGateToken, ClockTree, MockClockTree};
pub use error::{BringUpError, Stage};
pub use i2s::{bring_up, I2sBringUp, I2sRegisters, I2sSettings, MockI2s, PollingTx, ReentryPolicy};

#[cfg(feature = "hardware")]
pub use clock::Samd21Clocks;

#[cfg(feature = "hardware")]
pub use i2s::Samd21I2s;
