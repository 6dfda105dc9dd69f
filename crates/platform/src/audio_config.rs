//! Tone and stream configuration for the PCM5102 test-tone output.
//!
//! The tone is precomputed into a table once at boot, so every parameter
//! here is fixed at compile time. There is no runtime reconfiguration.
//!
//! # Reference setting
//!
//! ```text
//! 48 000 Hz / 1 000 Hz = 48 samples per cycle
//! 2 cycles             = 96 table entries
//! amplitude 0.8        = 6 710 886 peak (of 8 388 607)
//! ```

use crate::audio_types::{OutOfRangeError, SampleRateHz, ToneHz};

/// Largest table the firmware will generate (entries).
///
/// 96 entries × 4 bytes = 384 bytes of the SAMD21's 32 KB RAM.
pub const MAX_TABLE_LEN: usize = 1024;

/// Parameters of a single-frequency sine table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneConfig {
    /// Serializer frame rate.
    pub sample_rate: SampleRateHz,
    /// Tone frequency; must divide `sample_rate` exactly.
    pub tone: ToneHz,
    /// Peak level as a fraction of full scale, `0.0..=1.0`.
    pub amplitude: f64,
    /// Number of whole cycles stored in the table.
    pub cycles: u32,
}

/// Why a [`ToneConfig`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneConfigError {
    /// The tone does not divide the sample rate, so the table would not loop cleanly.
    NotWholeCycle,
    /// Amplitude outside `0.0..=1.0`; the clamp would be doing the level control.
    Amplitude,
    /// Zero cycles requested.
    NoCycles,
    /// Table longer than [`MAX_TABLE_LEN`], or not the length the caller provided.
    TableLength(OutOfRangeError),
}

impl core::fmt::Display for ToneConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotWholeCycle => write!(f, "tone does not divide the sample rate"),
            Self::Amplitude => write!(f, "amplitude must be within 0.0..=1.0"),
            Self::NoCycles => write!(f, "at least one cycle is required"),
            Self::TableLength(e) => write!(f, "table length {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ToneConfigError {}

impl ToneConfig {
    /// 1 kHz at 48 kHz, 80 % of full scale, two cycles (96 entries).
    ///
    /// 80 % leaves headroom below the PCM5102 clip point.
    pub const PCM5102_1KHZ: Self = Self {
        sample_rate: SampleRateHz::from_const(48_000),
        tone: ToneHz::from_const(1_000),
        amplitude: 0.8,
        cycles: 2,
    };

    /// Samples in one cycle (`sample_rate / tone`), if it divides exactly.
    #[must_use]
    pub const fn samples_per_cycle(&self) -> Option<u32> {
        let rate = self.sample_rate.get();
        let tone = self.tone.get();
        match rate.checked_rem(tone) {
            Some(0) => rate.checked_div(tone),
            _ => None,
        }
    }

    /// Total table entries (`samples_per_cycle × cycles`), if valid.
    #[must_use]
    pub const fn table_len(&self) -> Option<usize> {
        match self.samples_per_cycle() {
            Some(per_cycle) => match per_cycle.checked_mul(self.cycles) {
                Some(len) => Some(len as usize),
                None => None,
            },
            None => None,
        }
    }

    /// Check every invariant the sine generator relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ToneConfigError`] found.
    pub fn validate(&self) -> Result<(), ToneConfigError> {
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(ToneConfigError::Amplitude);
        }
        if self.cycles == 0 {
            return Err(ToneConfigError::NoCycles);
        }
        let len = self.table_len().ok_or(ToneConfigError::NotWholeCycle)?;
        if len > MAX_TABLE_LEN {
            return Err(ToneConfigError::TableLength(OutOfRangeError {
                value: len as i64,
                min: 1,
                max: MAX_TABLE_LEN as i64,
            }));
        }
        Ok(())
    }
}
