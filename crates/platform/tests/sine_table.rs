//! Reference-table tests for the sine generator.
//!
//! The expected values are computed independently with `std` floating point.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::f64::consts::PI;

use platform::audio_config::ToneConfig;
use platform::audio_types::{AudioSample, SampleRateHz, ToneHz};
use platform::sine_table::{generate, Pcm5102SineTable, SineTable};

fn expected(i: usize, amplitude: f64, per_cycle: f64) -> i32 {
    let angle = 2.0 * PI * (i as f64) / per_cycle;
    let v = (amplitude * 8_388_607.0 * angle.sin()).round();
    v.clamp(-8_388_608.0, 8_388_607.0) as i32
}

#[test]
fn first_cycle_matches_rounded_reference() {
    let table = Pcm5102SineTable::new(&ToneConfig::PCM5102_1KHZ).unwrap();
    for i in 0..48 {
        assert_eq!(
            table.as_slice()[i].get(),
            expected(i, 0.8, 48.0),
            "sample {i}"
        );
    }
}

#[test]
fn table_is_odd_symmetric_over_a_cycle() {
    let table = Pcm5102SineTable::new(&ToneConfig::PCM5102_1KHZ).unwrap();
    let s = table.as_slice();
    for i in 1..24 {
        assert_eq!(s[i].get(), -s[48 - i].get(), "sample {i}");
    }
}

#[test]
fn over_unity_amplitude_clamps_instead_of_wrapping() {
    let rate = SampleRateHz::new(48_000).unwrap();
    let tone = ToneHz::new(1_000, rate).unwrap();
    let mut table = [AudioSample::ZERO; 48];
    generate(&mut table, rate, tone, 1.5);
    assert_eq!(table[12].get(), AudioSample::MAX);
    assert_eq!(table[36].get(), AudioSample::MIN);
}

#[test]
fn other_dividing_rates_build() {
    let rate = SampleRateHz::new(32_000).unwrap();
    let cfg = ToneConfig {
        sample_rate: rate,
        tone: ToneHz::new(500, rate).unwrap(),
        amplitude: 0.5,
        cycles: 1,
    };
    let table = SineTable::<64>::new(&cfg).unwrap();
    assert_eq!(table.as_slice()[16].get(), expected(16, 0.5, 64.0));
}
