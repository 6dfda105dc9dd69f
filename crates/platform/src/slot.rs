//! Slot codec: natural 24-bit samples ⇄ 32-bit serializer slot words.
//!
//! The transmit serializer runs 32-bit slots. The DAC reads the top 24 bits
//! of each slot, so a sample is shifted into bits 31..8 and bits 7..0 are
//! zero padding:
//!
//! ```text
//!  31                      8 7      0
//! ┌─────────────────────────┬────────┐
//! │  signed 24-bit sample   │  0x00  │
//! └─────────────────────────┴────────┘
//! 0x7F_FFFF → 0x7FFF_FF00     -1 → 0xFFFF_FF00     0x80_0000 → 0x8000_0000
//! ```

use crate::audio_types::AudioSample;

/// Number of padding bits below the sample in a 32-bit slot.
pub const SLOT_PAD_BITS: u32 = 8;

/// Mask of the padding bits; always zero in an encoded slot.
pub const SLOT_PAD_MASK: u32 = (1 << SLOT_PAD_BITS) - 1;

/// Encode a sample into the slot-aligned word written to `DATA1`.
#[must_use]
pub const fn encode_slot(sample: AudioSample) -> u32 {
    encode_raw(sample.get())
}

/// Encode a raw `i32` without range checking.
///
/// Values outside the 24-bit range lose their top bits in the shift
/// (two's-complement wraparound); nothing is clamped here.
#[must_use]
#[allow(clippy::cast_sign_loss)] // reinterpretation of the shifted word is the point
pub const fn encode_raw(value: i32) -> u32 {
    value.wrapping_shl(SLOT_PAD_BITS) as u32
}

/// Recover the natural sample from a slot word (arithmetic shift).
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn decode_slot(slot: u32) -> AudioSample {
    // An i32 shifted right by 8 always lands inside the 24-bit range.
    match AudioSample::new((slot as i32) >> SLOT_PAD_BITS) {
        Ok(sample) => sample,
        Err(_) => AudioSample::ZERO,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample(v: i32) -> AudioSample {
        AudioSample::new(v).unwrap()
    }

    #[test]
    fn full_scale_positive_fills_top_bits() {
        assert_eq!(encode_slot(sample(0x7F_FFFF)), 0x7FFF_FF00);
    }

    #[test]
    fn full_scale_negative_sets_only_sign_bit() {
        assert_eq!(encode_slot(sample(AudioSample::MIN)), 0x8000_0000);
    }

    #[test]
    fn minus_one_keeps_sign_extension() {
        assert_eq!(encode_slot(sample(-1)), 0xFFFF_FF00);
    }

    #[test]
    fn raw_out_of_range_wraps_instead_of_clamping() {
        // 0x80_0000 is one past MAX; the shift pushes it into the sign bit.
        assert_eq!(encode_raw(0x80_0000), 0x8000_0000);
    }

    #[test]
    fn decode_inverts_encode_at_the_edges() {
        for v in [AudioSample::MIN, -1, 0, 1, AudioSample::MAX] {
            assert_eq!(decode_slot(encode_slot(sample(v))).get(), v);
        }
    }
}
