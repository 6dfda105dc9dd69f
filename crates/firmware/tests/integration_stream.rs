//! Integration test: boot on mocks and stream the tone.
//!
//! Tests that:
//!   1. DATA1 receives each table entry twice (left, right) as slot words
//!   2. The indicator toggles exactly once per table pass
//!   3. A stalled transmitter ends `run` with a sink error and no writes
//!   4. Translated ADC words reach DATA1 unchanged by the slot encoder
//!
//! Run with: cargo test -p firmware --test integration_stream

// Integration test file -- intentional test patterns permitted.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::cast_possible_truncation,
    clippy::arithmetic_side_effects,
)]

use embedded_hal_mock::eh1::delay::NoopDelay;

use firmware::boot::build_table;
use firmware::{start_tone, I2sSettings, MockClockTree, MockI2s};
use platform::audio_config::ToneConfig;
use platform::busy_wait::{Bounded, WaitTimeout};
use platform::mocks::MockIndicator;
use platform::sine_table::{Pcm5102SineTable, PCM5102_TABLE_LEN};
use platform::slot::encode_slot;
use platform::stream::StreamError;
use platform::translate::{adc_code_from_unit, left_justify, translate_sample};
use platform::AudioSample;

fn table() -> Pcm5102SineTable {
    build_table::<PCM5102_TABLE_LEN>(&ToneConfig::PCM5102_1KHZ).unwrap()
}

#[test]
fn one_pass_writes_each_entry_to_both_slots() {
    let table = table();
    let mut clocks = MockClockTree::new();
    let mut i2s = MockI2s::new().with_tx_latency(3);
    let mut led = MockIndicator::new();

    let mut out = start_tone(
        &mut clocks,
        &mut i2s,
        Bounded::new(8),
        &mut NoopDelay::new(),
        &I2sSettings::PCM5102,
        table.as_slice(),
    )
    .unwrap();
    for _ in 0..PCM5102_TABLE_LEN {
        out.step(&mut led).unwrap();
    }
    assert_eq!(out.stream.cursor().index(), 0);
    drop(out);

    let expected: Vec<u32> = table
        .as_slice()
        .iter()
        .flat_map(|&s| [encode_slot(s), encode_slot(s)])
        .collect();
    assert_eq!(i2s.data_words(), expected.as_slice());
    assert_eq!(led.toggles(), 1);
    assert_eq!(i2s.violations(), 0);
}

#[test]
fn indicator_toggles_once_per_pass() {
    let table = table();
    let mut i2s = MockI2s::new();
    let mut led = MockIndicator::new();
    let mut out = start_tone(
        &mut MockClockTree::new(),
        &mut i2s,
        Bounded::new(4),
        &mut NoopDelay::new(),
        &I2sSettings::PCM5102,
        table.as_slice(),
    )
    .unwrap();

    let mut wraps = 0;
    for _ in 0..(3 * PCM5102_TABLE_LEN - 1) {
        if out.step(&mut led).unwrap() {
            wraps += 1;
        }
    }
    assert_eq!(wraps, 2);
    assert_eq!(led.toggles(), 2);
    assert_eq!(out.stream.cursor().index(), PCM5102_TABLE_LEN - 1);
}

#[test]
fn stalled_transmitter_ends_run_with_sink_error() {
    let table = table();
    let mut i2s = MockI2s::new().with_tx_stalled();
    let mut led = MockIndicator::new();
    let mut out = start_tone(
        &mut MockClockTree::new(),
        &mut i2s,
        Bounded::new(6),
        &mut NoopDelay::new(),
        &I2sSettings::PCM5102,
        table.as_slice(),
    )
    .unwrap();

    let err = out.run(&mut led).unwrap_err();
    assert!(matches!(err, StreamError::Sink(WaitTimeout { polls: 6 })));
    assert_eq!(out.stream.cursor().index(), 0);
    drop(out);

    assert_eq!(i2s.data_writes(), 0);
    assert_eq!(led.toggles(), 0);
}

#[test]
fn translated_adc_words_reach_data1() {
    let mut clocks = MockClockTree::new();
    let mut i2s = MockI2s::new();
    // A one-entry table is enough to obtain the running transmitter.
    let silence = [AudioSample::ZERO];
    let mut out = start_tone(
        &mut clocks,
        &mut i2s,
        Bounded::new(4),
        &mut NoopDelay::new(),
        &I2sSettings::PCM5102,
        &silence,
    )
    .unwrap();

    let stimulus = [-1.0_f32, -0.5, 0.0, 0.5, 1.0];
    let mut expected = Vec::new();
    for x in stimulus {
        let raw = left_justify(adc_code_from_unit(x));
        let sample = translate_sample(raw, 0);
        out.tx.send_stereo_frame(sample, sample).unwrap();
        expected.push(encode_slot(sample));
        expected.push(encode_slot(sample));
    }
    drop(out);

    assert_eq!(i2s.data_words(), expected.as_slice());
    // -1.0 maps to the bottom code, which translates to silence.
    assert_eq!(i2s.data_words()[0], 0);
    // Full scale lands just under the positive rail.
    let top = AudioSample::from_slot(i2s.data_words()[8]).get();
    assert!((AudioSample::MAX - 1..=AudioSample::MAX).contains(&top), "{top}");
}
