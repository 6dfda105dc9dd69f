//! Hardware-independent core of the SAMD21 I2S tone firmware
//!
//! Everything here is pure computation or a trait seam, so it builds and
//! tests on the host. Register access lives in the `firmware` crate.
//!
//! # Architecture Layers
//!
//! ```text
//! firmware  (bring-up sequencer, polling transmitter, MMIO, entry point)
//!     ↓
//! platform  (this crate: samples, slot codec, sine table, register values,
//!            wait policies, streaming loop)
//! ```
//!
//! # Modules
//!
//! - [`audio_types`] - `AudioSample`, `SampleRateHz`, `ToneHz`
//! - [`audio_config`] - `ToneConfig` and its reference preset
//! - [`slot`] - sample ⇄ 32-bit slot word
//! - [`sine_table`] - one-shot sine table generation
//! - [`translate`] - ADC code → DAC sample
//! - [`i2s_regs`] / [`clock_regs`] - register map and packed register values
//! - [`busy_wait`] - `Spin` and `Bounded` polling policies
//! - [`stream`] - the steady-state streaming loop
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls and the [`mocks`] module
//! - `defmt`: `defmt::Format` derives on all public types

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_code)] // no register access in this crate
#![warn(clippy::print_stdout)]
#![allow(clippy::doc_markdown)] // register and field names in doc comments
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod audio_config;
pub mod audio_types;
pub mod busy_wait;
pub mod clock_regs;
pub mod i2s_regs;
pub mod mocks;
pub mod sine_table;
pub mod slot;
pub mod stream;
pub mod translate;

pub use audio_config::{ToneConfig, ToneConfigError};
pub use audio_types::{AudioSample, OutOfRangeError, SampleRateHz, ToneHz};
pub use busy_wait::{Bounded, BusyWait, Spin, WaitTimeout};
pub use clock_regs::GenericClockRoute;
pub use i2s_regs::{ClockUnitConfig, SerializerConfig};
pub use sine_table::{Pcm5102SineTable, SineTable};
pub use slot::{decode_slot, encode_slot};
pub use stream::{FrameSink, SineStream, StreamCursor, StreamError};
pub use translate::translate;
