//! SAMD21 I2S tone firmware - Main Entry Point
//!
//! Hardware-only entry point for the SAMD21G18A. Pin multiplexing and the
//! GCLK0 source (12.288 MHz for 48 kHz frames) are set up by the board's
//! system initialization before `main` runs.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_probe as _;

use firmware::boot::{build_table, start_tone};
use firmware::clock::clock_math::{frame_rate_hz, GCLK0_HZ_FOR_48KHZ};
use firmware::hal::{SpinDelay, StatusLed};
use firmware::{I2sSettings, Samd21Clocks, Samd21I2s};
use platform::busy_wait::Spin;
use platform::sine_table::PCM5102_TABLE_LEN;
use platform::ToneConfig;

#[entry]
fn main() -> ! {
    defmt::info!("SAMD21 I2S tone v{=str}", env!("CARGO_PKG_VERSION"));

    let settings = I2sSettings::PCM5102;
    defmt::info!(
        "expected frame rate: {=u32} Hz",
        frame_rate_hz(GCLK0_HZ_FOR_48KHZ, &settings.clock_unit)
    );

    // Step 1: table before any register access.
    let table = match build_table::<PCM5102_TABLE_LEN>(&ToneConfig::PCM5102_1KHZ) {
        Ok(table) => table,
        Err(e) => halt(e),
    };

    let (group, pin) = StatusLed::BOARD_LED;
    // SAFETY: single flow of control from reset; these are the only owners
    // of the PM/GCLK gate registers, the I2S block and the LED pin.
    let (mut clocks, i2s, mut led) = unsafe {
        (
            Samd21Clocks::steal(),
            Samd21I2s::steal(),
            StatusLed::new(group, pin),
        )
    };
    // Core clock is GCLK0.
    let mut delay = SpinDelay::new(GCLK0_HZ_FOR_48KHZ);

    // Steps 2-7.
    let mut output = match start_tone(
        &mut clocks,
        i2s,
        Spin,
        &mut delay,
        &settings,
        table.as_slice(),
    ) {
        Ok(output) => output,
        Err(e) => halt(e),
    };

    // Step 8. With `Spin` and an infallible LED this never returns.
    match output.run(&mut led) {
        Ok(never) => match never {},
        Err(e) => halt(e),
    }
}

/// Log the error and stop. There is nothing to recover to.
fn halt<E: defmt::Format>(error: E) -> ! {
    defmt::error!("halted: {}", error);
    loop {
        cortex_m::asm::wfi();
    }
}
