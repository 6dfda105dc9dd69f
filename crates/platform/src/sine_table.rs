//! Precomputed sine table for the polling stream.
//!
//! The Cortex-M0+ has no FPU, so `sin` is far too slow to evaluate per
//! frame at 48 kHz. The table is filled once at boot and only read after.
//!
//! ```text
//! angle[i]  = 2π · i / (sample_rate / tone)
//! sample[i] = round(amplitude · (2^23 − 1) · sin(angle[i]))   clamped to 24 bits
//! ```
//!
//! Rounding is half away from zero (`libm::round`). The clamp only catches
//! rounding at full scale; [`ToneConfig::validate`] keeps amplitude ≤ 1.0.

use core::f64::consts::PI;

use crate::audio_config::{ToneConfig, ToneConfigError};
use crate::audio_types::{AudioSample, OutOfRangeError, SampleRateHz, ToneHz};

/// Fill `table` with consecutive sine samples.
///
/// The table may hold any number of samples; it loops cleanly only when its
/// length is a whole number of cycles.
#[allow(clippy::cast_precision_loss)] // indices stay far below 2^52
#[allow(clippy::cast_possible_truncation)] // rounded value is clamped below
#[allow(clippy::arithmetic_side_effects)] // float math cannot overflow here
pub fn generate(table: &mut [AudioSample], sample_rate: SampleRateHz, tone: ToneHz, amplitude: f64) {
    let samples_per_cycle = f64::from(sample_rate.get()) / f64::from(tone.get());
    let peak = amplitude * f64::from(AudioSample::MAX);

    for (i, slot) in table.iter_mut().enumerate() {
        let angle = 2.0 * PI * (i as f64) / samples_per_cycle;
        let value = libm::round(peak * libm::sin(angle));
        *slot = AudioSample::saturating(value as i64);
    }
}

/// A fixed-length sine table, generated once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineTable<const N: usize> {
    samples: [AudioSample; N],
}

impl<const N: usize> SineTable<N> {
    /// Build a table for `config`, which must describe exactly `N` samples.
    ///
    /// # Errors
    ///
    /// Returns [`ToneConfigError`] if `config` is invalid or its length
    /// is not `N`.
    pub fn new(config: &ToneConfig) -> Result<Self, ToneConfigError> {
        config.validate()?;
        match config.table_len() {
            Some(len) if len == N => {}
            other => {
                return Err(ToneConfigError::TableLength(OutOfRangeError {
                    value: other.map_or(0, |len| len as i64),
                    min: N as i64,
                    max: N as i64,
                }))
            }
        }

        let mut samples = [AudioSample::ZERO; N];
        generate(&mut samples, config.sample_rate, config.tone, config.amplitude);
        Ok(Self { samples })
    }

    /// All samples in playback order.
    #[must_use]
    pub fn as_slice(&self) -> &[AudioSample] {
        &self.samples
    }

    /// Number of samples (always `N`).
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` only for the degenerate `N = 0` table.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

/// Table length for [`ToneConfig::PCM5102_1KHZ`].
pub const PCM5102_TABLE_LEN: usize = 96;

/// The reference 1 kHz / 48 kHz two-cycle table.
pub type Pcm5102SineTable = SineTable<PCM5102_TABLE_LEN>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn reference() -> Pcm5102SineTable {
        SineTable::new(&ToneConfig::PCM5102_1KHZ).unwrap()
    }

    #[test]
    fn starts_at_zero_crossing() {
        assert_eq!(reference().as_slice()[0], AudioSample::ZERO);
    }

    #[test]
    fn quarter_cycle_is_positive_peak() {
        // 0.8 × 8 388 607 = 6 710 885.6 → 6 710 886
        assert_eq!(reference().as_slice()[12].get(), 6_710_886);
    }

    #[test]
    fn three_quarter_cycle_is_negative_peak() {
        assert_eq!(reference().as_slice()[36].get(), -6_710_886);
    }

    #[test]
    fn second_cycle_repeats_first() {
        let table = reference();
        let s = table.as_slice();
        for i in 0..48 {
            assert_eq!(s[i], s[i + 48], "sample {i} differs between cycles");
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = SineTable::<48>::new(&ToneConfig::PCM5102_1KHZ).unwrap_err();
        assert!(matches!(err, ToneConfigError::TableLength(_)));
    }

    #[test]
    fn full_scale_stays_in_range() {
        let cfg = ToneConfig {
            amplitude: 1.0,
            ..ToneConfig::PCM5102_1KHZ
        };
        let table = SineTable::<96>::new(&cfg).unwrap();
        assert_eq!(table.as_slice()[12].get(), AudioSample::MAX);
        assert_eq!(table.as_slice()[36].get(), -AudioSample::MAX);
    }
}
