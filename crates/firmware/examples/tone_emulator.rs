//! Tone Emulator
//!
//! Runs the complete boot path against the register-file mocks and streams a
//! few table passes, logging what the I2S peripheral would have received.
//! Run with: cargo run -p firmware --example tone_emulator --features emulator
//!
//! `RUST_LOG=debug` shows every bring-up step.

use embedded_hal_mock::eh1::delay::NoopDelay;
use tracing_subscriber::EnvFilter;

use firmware::boot::build_table;
use firmware::clock::clock_math::{frame_rate_hz, GCLK0_HZ_FOR_48KHZ};
use firmware::{start_tone, I2sSettings, MockClockTree, MockI2s};
use platform::busy_wait::Bounded;
use platform::mocks::MockIndicator;
use platform::sine_table::PCM5102_TABLE_LEN;
use platform::{AudioSample, ToneConfig};

const PASSES: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ToneConfig::PCM5102_1KHZ;
    let table = build_table::<PCM5102_TABLE_LEN>(&config)?;
    tracing::info!(
        tone_hz = config.tone.get(),
        sample_rate = config.sample_rate.get(),
        entries = table.len(),
        "sine table ready"
    );

    let settings = I2sSettings::PCM5102;
    tracing::info!(
        frame_rate = frame_rate_hz(GCLK0_HZ_FOR_48KHZ, &settings.clock_unit),
        "clock unit 0 from GCLK0 at {} Hz",
        GCLK0_HZ_FOR_48KHZ
    );

    // Realistic latencies so the bounded waits actually poll.
    let mut clocks = MockClockTree::new().with_sync_latency(2);
    let mut i2s = MockI2s::new()
        .with_sync_latency(3)
        .with_swrst_latency(1)
        .with_tx_latency(1);
    let mut led = MockIndicator::new();

    let mut out = start_tone(
        &mut clocks,
        &mut i2s,
        Bounded::new(64),
        &mut NoopDelay::new(),
        &settings,
        table.as_slice(),
    )?;
    tracing::info!("I2S running, streaming {PASSES} table passes");

    for pass in 1..=PASSES {
        while !out.step(&mut led)? {}
        tracing::info!(pass, led_high = led.is_high(), "table pass complete");
    }
    drop(out);

    let peak = i2s
        .data_words()
        .iter()
        .map(|&w| AudioSample::from_slot(w).get())
        .max()
        .unwrap_or(0);
    tracing::info!(
        data_writes = i2s.data_writes(),
        toggles = led.toggles(),
        peak,
        violations = i2s.violations(),
        "done"
    );
    Ok(())
}
