//! Register bit-field layout checks.
//!
//! Field positions are fixed by the silicon; these tests catch a field
//! drifting onto its neighbour.

use platform::clock_regs::{GenericClockRoute, PM_APBCMASK_I2S};
use platform::i2s_regs::{
    BitDelay, ClockUnitConfig, DataSize, Extend, Field, Justify, SerializerConfig,
    SerializerMode, SlotSize, TxUnderrun, CLKCTRL_FIELDS, SERCTRL_FIELDS,
};

fn assert_disjoint(fields: &[Field]) {
    for (i, a) in fields.iter().enumerate() {
        for b in fields.iter().skip(i + 1) {
            assert_eq!(a.mask() & b.mask(), 0, "{} overlaps {}", a.name, b.name);
        }
    }
}

#[test]
fn clkctrl_fields_are_disjoint() {
    assert_disjoint(CLKCTRL_FIELDS);
}

#[test]
fn serctrl_fields_are_disjoint() {
    assert_disjoint(SERCTRL_FIELDS);
}

#[test]
fn pcm5102_clock_unit_word() {
    assert_eq!(
        ClockUnitConfig::PCM5102.to_bits(),
        (3 << 19) | (1 << 18) | (1 << 7) | (1 << 2) | 3
    );
}

#[test]
fn clock_unit_unpacks_to_named_fields() {
    let cfg = ClockUnitConfig::from_bits(ClockUnitConfig::PCM5102.to_bits());
    assert_eq!(cfg, ClockUnitConfig::PCM5102);
    assert_eq!(cfg.slot_size, SlotSize::Bits32);
    assert_eq!(cfg.slot_count, 2);
    assert_eq!(cfg.bit_delay, BitDelay::I2s);
    assert_eq!(cfg.master_clock_div, 3);
}

#[test]
fn every_clock_unit_field_is_reachable() {
    let all_ones = ClockUnitConfig::from_bits(u32::MAX);
    let covered: u32 = CLKCTRL_FIELDS.iter().fold(0, |acc, f| acc | f.mask());
    assert_eq!(all_ones.to_bits(), covered);
}

#[test]
fn serializer_presets_unpack() {
    let rx = SerializerConfig::from_bits(SerializerConfig::ADC_RX.to_bits());
    assert_eq!(rx.mode, SerializerMode::Rx);
    assert_eq!(rx.data_size, DataSize::Bits24);
    assert_eq!(rx.word_adjust, Justify::Left);
    assert_eq!(rx.slot_adjust, Justify::Left);
    assert_eq!(rx.extend, Extend::Zero);

    let tx = SerializerConfig::from_bits(SerializerConfig::DAC_TX.to_bits());
    assert_eq!(tx.mode, SerializerMode::Tx);
    assert_eq!(tx.tx_underrun, TxUnderrun::RepeatLast);
    assert_eq!(tx.data_size, DataSize::Bits32);
}

#[test]
fn serializer_presets_are_distinct_directions() {
    assert_ne!(
        SerializerConfig::ADC_RX.to_bits() & 0b11,
        SerializerConfig::DAC_TX.to_bits() & 0b11
    );
}

#[test]
fn i2s_gclk_route_and_bus_gate() {
    assert_eq!(GenericClockRoute::I2S0_FROM_GCLK0.to_bits(), 0x4023);
    assert_eq!(PM_APBCMASK_I2S, 1 << 20);
}
