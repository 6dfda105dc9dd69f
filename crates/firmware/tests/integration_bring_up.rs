//! Integration test: the full I2S bring-up against the mock register file.
//!
//! Tests that:
//!   1. Registers are written in the one order the peripheral accepts
//!   2. Each wait that never completes reports the stage it belongs to
//!   3. Settle delays are requested with the documented durations
//!   4. A second bring-up converges (Reapply) or is refused (Reject)
//!   5. Arbitrary synchronization latencies never change the end state
//!
//! Does NOT require physical hardware.
//!
//! Run with: cargo test -p firmware --test integration_bring_up

// Integration test file -- intentional test patterns permitted.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]

use embedded_hal::delay::DelayNs;
use embedded_hal_mock::eh1::delay::NoopDelay;

use firmware::clock::{enable_peripheral_clock, ClockGateToken, MockClockTree};
use firmware::i2s::bring_up::{CLOCK_SETTLE_US, SERIALIZER_SETTLE_US};
use firmware::i2s::mock::RegWrite;
use firmware::{bring_up, BringUpError, I2sSettings, MockI2s, ReentryPolicy, Stage};
use platform::busy_wait::Bounded;
use platform::i2s_regs::{
    ClockUnit, ClockUnitConfig, Serializer, SerializerConfig, CTRLA_CKEN0, CTRLA_ENABLE,
    CTRLA_SEREN0, CTRLA_SEREN1, CTRLA_SWRST, SYNCBUSY_ENABLE, SYNCBUSY_SEREN0, SYNCBUSY_SEREN1,
    SYNCBUSY_SWRST,
};

// -- Helpers ---------------------------------------------------------------

fn token() -> ClockGateToken {
    enable_peripheral_clock(&mut MockClockTree::new(), &mut Bounded::new(4)).unwrap()
}

fn run(i2s: &mut MockI2s, settings: &I2sSettings) -> Result<(), BringUpError> {
    bring_up(i2s, Bounded::new(32), &mut NoopDelay::new(), &token(), settings).map(|_| ())
}

/// Records every nanosecond delay request.
#[derive(Default)]
struct RecordingDelay {
    requests: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.requests.push(ns);
    }
}

const RUNNING: u8 = CTRLA_ENABLE | CTRLA_CKEN0 | CTRLA_SEREN0 | CTRLA_SEREN1;

// -- Write order -----------------------------------------------------------

#[test]
fn registers_are_written_in_hardware_order() {
    let mut i2s = MockI2s::new();
    run(&mut i2s, &I2sSettings::PCM5102).unwrap();

    assert_eq!(
        i2s.writes(),
        &[
            RegWrite::Ctrla(CTRLA_SWRST),
            RegWrite::Clkctrl(ClockUnit::Unit0, ClockUnitConfig::PCM5102.to_bits()),
            RegWrite::Ctrla(CTRLA_CKEN0 | CTRLA_ENABLE),
            RegWrite::Serctrl(Serializer::Ser0, SerializerConfig::ADC_RX.to_bits()),
            RegWrite::Serctrl(Serializer::Ser1, SerializerConfig::DAC_TX.to_bits()),
            RegWrite::Ctrla(CTRLA_CKEN0 | CTRLA_ENABLE | CTRLA_SEREN0),
            RegWrite::Ctrla(RUNNING),
        ]
    );
    assert_eq!(i2s.violations(), 0);
}

#[test]
fn clock_unit_word_is_the_pcm5102_pattern() {
    let mut i2s = MockI2s::new();
    run(&mut i2s, &I2sSettings::PCM5102).unwrap();
    assert_eq!(
        i2s.clkctrl(ClockUnit::Unit0),
        (3 << 19) | (1 << 18) | (1 << 7) | (1 << 2) | 3
    );
    assert_eq!(i2s.serctrl(Serializer::Ser1), (1 << 4) | 1);
}

#[test]
fn settle_delays_follow_core_and_rx_enable() {
    let mut i2s = MockI2s::new();
    let mut delay = RecordingDelay::default();
    bring_up(
        &mut i2s,
        Bounded::new(8),
        &mut delay,
        &token(),
        &I2sSettings::PCM5102,
    )
    .unwrap();
    assert_eq!(
        delay.requests,
        vec![CLOCK_SETTLE_US * 1_000, SERIALIZER_SETTLE_US * 1_000]
    );
}

// -- Timeouts name their stage ---------------------------------------------

#[test]
fn stuck_software_reset_reports_software_reset() {
    let mut i2s = MockI2s::new().with_swrst_stuck();
    let err = run(&mut i2s, &I2sSettings::PCM5102).unwrap_err();
    assert_eq!(err, BringUpError::Timeout(Stage::SoftwareReset));
    assert_eq!(i2s.writes(), &[RegWrite::Ctrla(CTRLA_SWRST)]);
}

#[test]
fn stuck_reset_sync_reports_reset_sync() {
    let mut i2s = MockI2s::new().with_syncbusy_stuck(SYNCBUSY_SWRST);
    let err = run(&mut i2s, &I2sSettings::PCM5102).unwrap_err();
    assert_eq!(err, BringUpError::Timeout(Stage::ResetSync));
}

#[test]
fn stuck_enable_sync_reports_core_enable_and_skips_serializers() {
    let mut i2s = MockI2s::new().with_syncbusy_stuck(SYNCBUSY_ENABLE);
    let err = run(&mut i2s, &I2sSettings::PCM5102).unwrap_err();
    assert_eq!(err, BringUpError::Timeout(Stage::CoreEnable));
    assert!(!i2s
        .writes()
        .iter()
        .any(|w| matches!(w, RegWrite::Serctrl(..))));
}

#[test]
fn stuck_rx_enable_reports_rx_stage() {
    let mut i2s = MockI2s::new().with_syncbusy_stuck(SYNCBUSY_SEREN0);
    let err = run(&mut i2s, &I2sSettings::PCM5102).unwrap_err();
    assert_eq!(err, BringUpError::Timeout(Stage::RxSerializerEnable));
    assert_eq!(i2s.ctrla() & CTRLA_SEREN1, 0);
}

#[test]
fn stuck_tx_enable_reports_tx_stage() {
    let mut i2s = MockI2s::new().with_syncbusy_stuck(SYNCBUSY_SEREN1);
    let err = run(&mut i2s, &I2sSettings::PCM5102).unwrap_err();
    assert_eq!(err, BringUpError::Timeout(Stage::TxSerializerEnable));
}

#[test]
fn stuck_gclk_sync_reports_gclk_stage() {
    let mut clocks = MockClockTree::new().with_sync_stuck();
    let err = enable_peripheral_clock(&mut clocks, &mut Bounded::new(16)).unwrap_err();
    assert_eq!(err, BringUpError::Timeout(Stage::GclkSync));
}

#[test]
fn error_messages_name_the_stage() {
    let msg = BringUpError::Timeout(Stage::TxSerializerEnable).to_string();
    assert!(msg.contains("tx serializer enable"), "{msg}");
}

// -- Re-entry --------------------------------------------------------------

#[test]
fn second_bring_up_under_reapply_converges_to_same_state() {
    let mut i2s = MockI2s::new().with_sync_latency(1);
    run(&mut i2s, &I2sSettings::PCM5102).unwrap();
    let first = i2s.state();

    i2s.clear_log();
    run(&mut i2s, &I2sSettings::PCM5102).unwrap();

    assert_eq!(i2s.state(), first);
    assert_eq!(i2s.ctrla(), RUNNING);
    assert_eq!(i2s.writes().first(), Some(&RegWrite::Ctrla(CTRLA_SWRST)));
    assert_eq!(i2s.violations(), 0);
}

#[test]
fn second_bring_up_under_reject_is_refused_without_writes() {
    let settings = I2sSettings {
        reentry: ReentryPolicy::Reject,
        ..I2sSettings::PCM5102
    };
    let mut i2s = MockI2s::new();
    run(&mut i2s, &settings).unwrap();
    let first = i2s.state();

    i2s.clear_log();
    let err = run(&mut i2s, &settings).unwrap_err();

    assert_eq!(err, BringUpError::AlreadyRunning);
    assert!(i2s.writes().is_empty());
    assert_eq!(i2s.state(), first);
}

#[test]
fn reject_allows_first_bring_up_after_power_on() {
    let settings = I2sSettings {
        reentry: ReentryPolicy::Reject,
        ..I2sSettings::PCM5102
    };
    let mut i2s = MockI2s::new();
    assert!(run(&mut i2s, &settings).is_ok());
    assert_eq!(i2s.ctrla(), RUNNING);
}

// -- Latency independence --------------------------------------------------

proptest::proptest! {
    /// Whatever the synchronization latency, a budget above it reaches the
    /// same registers with no ordering violations.
    #[test]
    fn end_state_is_independent_of_sync_latency(sync in 0u32..12, swrst in 0u32..12) {
        let mut i2s = MockI2s::new()
            .with_sync_latency(sync)
            .with_swrst_latency(swrst);
        bring_up(
            &mut i2s,
            Bounded::new(sync.max(swrst) + 1),
            &mut NoopDelay::new(),
            &token(),
            &I2sSettings::PCM5102,
        )
        .unwrap();
        proptest::prop_assert_eq!(i2s.ctrla(), RUNNING);
        proptest::prop_assert_eq!(
            i2s.clkctrl(ClockUnit::Unit0),
            ClockUnitConfig::PCM5102.to_bits()
        );
        proptest::prop_assert_eq!(i2s.violations(), 0);
    }

    /// A budget at or below the latency always fails.
    #[test]
    fn too_small_budget_times_out(sync in 1u32..12) {
        let mut i2s = MockI2s::new().with_sync_latency(sync);
        let result = bring_up(
            &mut i2s,
            Bounded::new(sync),
            &mut NoopDelay::new(),
            &token(),
            &I2sSettings::PCM5102,
        );
        proptest::prop_assert!(matches!(result, Err(BringUpError::Timeout(_))));
    }
}
