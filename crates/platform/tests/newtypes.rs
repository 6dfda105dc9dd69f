//! Type system enforcement tests for the tone domain newtypes.
//! These newtypes keep out-of-range samples and rates from reaching the
//! sine generator or the slot encoder.

#![allow(clippy::unwrap_used)]

// ── AudioSample ──────────────────────────────────────────────────────────────

#[test]
fn audio_sample_accepts_full_24_bit_range() {
    use platform::AudioSample;
    assert_eq!(AudioSample::new(AudioSample::MAX).unwrap().get(), 8_388_607);
    assert_eq!(AudioSample::new(AudioSample::MIN).unwrap().get(), -8_388_608);
    assert_eq!(AudioSample::new(0).unwrap(), AudioSample::ZERO);
}

#[test]
fn audio_sample_rejects_25_bit_values() {
    use platform::AudioSample;
    assert!(AudioSample::new(8_388_608).is_err());
    assert!(AudioSample::new(-8_388_609).is_err());
    assert!(AudioSample::new(i32::MAX).is_err());
}

#[test]
fn audio_sample_try_from_matches_new() {
    use platform::AudioSample;
    assert_eq!(AudioSample::try_from(42), AudioSample::new(42));
    assert!(AudioSample::try_from(1 << 24).is_err());
}

#[test]
fn audio_sample_is_one_word() {
    use platform::AudioSample;
    assert_eq!(core::mem::size_of::<AudioSample>(), 4);
}

#[test]
fn out_of_range_error_reports_limits() {
    use platform::AudioSample;
    let err = AudioSample::new(9_000_000).unwrap_err();
    assert_eq!(err.value, 9_000_000);
    assert_eq!(err.min, -8_388_608);
    assert_eq!(err.max, 8_388_607);
}

// ── SampleRateHz ─────────────────────────────────────────────────────────────

#[test]
fn sample_rate_hz_rejects_zero() {
    use platform::SampleRateHz;
    assert!(SampleRateHz::new(0).is_err());
}

#[test]
fn sample_rate_hz_rejects_below_minimum() {
    use platform::SampleRateHz;
    assert!(SampleRateHz::new(7_999).is_err());
}

#[test]
fn sample_rate_hz_accepts_standard_rates() {
    use platform::SampleRateHz;
    for hz in [8_000, 32_000, 44_100, 48_000, 96_000, 192_000] {
        assert_eq!(SampleRateHz::new(hz).unwrap().get(), hz, "{hz} Hz");
    }
}

#[test]
fn sample_rate_hz_rejects_above_maximum() {
    use platform::SampleRateHz;
    assert!(SampleRateHz::new(192_001).is_err());
    assert!(SampleRateHz::new(384_000).is_err());
}

// ── ToneHz ───────────────────────────────────────────────────────────────────

#[test]
fn tone_hz_rejects_zero() {
    use platform::{SampleRateHz, ToneHz};
    let rate = SampleRateHz::new(48_000).unwrap();
    assert!(ToneHz::new(0, rate).is_err());
}

#[test]
fn tone_hz_accepts_nyquist_but_not_above() {
    use platform::{SampleRateHz, ToneHz};
    let rate = SampleRateHz::new(48_000).unwrap();
    assert_eq!(ToneHz::new(24_000, rate).unwrap().get(), 24_000);
    let err = ToneHz::new(24_001, rate).unwrap_err();
    assert_eq!(err.max, 24_000);
}

// ── ToneConfig ───────────────────────────────────────────────────────────────

#[test]
fn tone_config_rejects_tone_that_does_not_divide_rate() {
    use platform::{SampleRateHz, ToneConfig, ToneConfigError, ToneHz};
    let rate = SampleRateHz::new(44_100).unwrap();
    let cfg = ToneConfig {
        sample_rate: rate,
        tone: ToneHz::new(1_000, rate).unwrap(),
        ..ToneConfig::PCM5102_1KHZ
    };
    assert_eq!(cfg.validate(), Err(ToneConfigError::NotWholeCycle));
}

#[test]
fn tone_config_rejects_amplitude_above_full_scale() {
    use platform::{ToneConfig, ToneConfigError};
    let cfg = ToneConfig {
        amplitude: 1.01,
        ..ToneConfig::PCM5102_1KHZ
    };
    assert_eq!(cfg.validate(), Err(ToneConfigError::Amplitude));
}

#[test]
fn tone_config_rejects_zero_cycles() {
    use platform::{ToneConfig, ToneConfigError};
    let cfg = ToneConfig {
        cycles: 0,
        ..ToneConfig::PCM5102_1KHZ
    };
    assert_eq!(cfg.validate(), Err(ToneConfigError::NoCycles));
}

#[test]
fn tone_config_rejects_oversized_table() {
    use platform::{ToneConfig, ToneConfigError};
    let cfg = ToneConfig {
        cycles: 100,
        ..ToneConfig::PCM5102_1KHZ
    };
    assert!(matches!(
        cfg.validate(),
        Err(ToneConfigError::TableLength(e)) if e.value == 4_800
    ));
}
