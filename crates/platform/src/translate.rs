//! ADC → DAC sample translation.
//!
//! The ADC front end delivers *unsigned* 24-bit codes, left-justified in a
//! 32-bit word (code in bits 31..8). The transmit path wants *signed*
//! natural-range samples. The translator recovers the code and rescales it by
//! `8_388_607 / 16_777_215` (≈ 0.5) with 64-bit intermediates:
//!
//! ```text
//! raw word 0xFFFF_FF00 → code 0xFF_FFFF (16 777 215) → 8 388 607
//! raw word 0x8000_0000 → code 0x80_0000 ( 8 388 608) → 4 194 303
//! raw word 0x0000_0000 → code 0                      → 0
//! ```
//!
//! Output is half the unsigned code, so it spans `0..=8_388_607`: the
//! non-negative half of the signed range. The DC level is not removed; see
//! [`translate`] about `dc_offset`.

use crate::audio_types::AudioSample;

/// Full-scale unsigned 24-bit ADC code.
pub const ADC_CODE_MAX: u32 = 0xFF_FFFF;

/// Numerator of the rescale ratio (positive 24-bit full scale).
const SCALE_NUM: i64 = 8_388_607;

/// Denominator of the rescale ratio (unsigned 24-bit full scale).
const SCALE_DEN: i64 = 16_777_215;

/// Translate a left-justified ADC word into a natural signed sample value.
///
/// `dc_offset` is accepted so call sites already pass the calibration value,
/// but it is **not applied**: what subtracting it should mean (before or after
/// scaling, in which units) is unresolved.
#[must_use]
#[allow(clippy::cast_sign_loss)] // bit-level reinterpretation of the wire word
#[allow(clippy::cast_possible_truncation)] // quotient ≤ 8 388 607
pub fn translate(raw_left_justified: i32, dc_offset: i32) -> i32 {
    let _ = dc_offset;
    let code = ((raw_left_justified >> 8) as u32) & ADC_CODE_MAX;
    let scaled = i64::from(code)
        .saturating_mul(SCALE_NUM)
        .checked_div(SCALE_DEN)
        .unwrap_or(0);
    scaled as i32
}

/// [`translate`], returning the typed sample for the transmit path.
#[must_use]
pub fn translate_sample(raw_left_justified: i32, dc_offset: i32) -> AudioSample {
    AudioSample::saturating(i64::from(translate(raw_left_justified, dc_offset)))
}

/// Map a unit-range signal onto an ADC code: `-1.0 → 0`, `0.0 → 0x7F_FFFF`,
/// `+1.0 → 0xFF_FFFE`.
///
/// Bench stimulus for exercising the translator without an ADC attached.
/// Inputs outside `[-1, 1]` are clamped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped, non-negative
#[allow(clippy::arithmetic_side_effects)] // float math
pub fn adc_code_from_unit(x: f32) -> u32 {
    let shifted = (x.clamp(-1.0, 1.0) + 1.0) * (SCALE_NUM as f32);
    (shifted as u32).min(ADC_CODE_MAX)
}

/// Place an unsigned 24-bit code in the ADC wire format (bits 31..8).
#[must_use]
#[allow(clippy::cast_possible_wrap)] // bit-level reinterpretation
pub const fn left_justify(code: u32) -> i32 {
    ((code & ADC_CODE_MAX) << 8) as i32
}
