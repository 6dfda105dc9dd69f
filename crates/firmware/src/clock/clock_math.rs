//! I2S clock divider arithmetic for clock unit 0.
//!
//! # Clock Tree
//!
//! ```text
//!   GCLK0 ──▶ MCK (MCKSEL = GCLK) ──▶ ÷ (MCKDIV + 1) ──▶ SCK ──▶ ÷ frame bits ──▶ FS
//! ```
//!
//! With the PCM5102 clock unit (MCKDIV = 3, 2 × 32-bit slots):
//!
//! ```text
//!   FS = GCLK0 / 4 / 64 = GCLK0 / 256
//! ```
//!
//! so 48 kHz frames need GCLK0 = 256 × 48 000 = 12.288 MHz. The PCM5102
//! derives its system clock from SCK in this configuration (no MCLK pin), so
//! any GCLK0 that yields the intended frame rate works.
//!
//! Clock tree setup belongs to system initialization; these functions only
//! describe what a given GCLK0 produces.

use platform::i2s_regs::ClockUnitConfig;

/// GCLK0 frequency at which [`ClockUnitConfig::PCM5102`] produces 48 kHz.
pub const GCLK0_HZ_FOR_48KHZ: u32 = 12_288_000;

/// Serial clock (SCK) frequency in Hz.
#[must_use]
pub fn serial_clock_hz(gclk_hz: u32, cfg: &ClockUnitConfig) -> u32 {
    let divider = u32::from(cfg.master_clock_div).saturating_add(1);
    gclk_hz.checked_div(divider).unwrap_or(0)
}

/// Frame (sample) rate in Hz; 0 for a degenerate configuration.
#[must_use]
pub fn frame_rate_hz(gclk_hz: u32, cfg: &ClockUnitConfig) -> u32 {
    serial_clock_hz(gclk_hz, cfg)
        .checked_div(cfg.frame_bits())
        .unwrap_or(0)
}

/// `true` when `gclk_hz` divides down to `frame_hz` with no remainder.
#[must_use]
pub fn is_exact(gclk_hz: u32, cfg: &ClockUnitConfig, frame_hz: u32) -> bool {
    let per_frame = u32::from(cfg.master_clock_div)
        .saturating_add(1)
        .saturating_mul(cfg.frame_bits());
    frame_hz.checked_mul(per_frame) == Some(gclk_hz)
}
