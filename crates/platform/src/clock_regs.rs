//! SAMD21 clock gate registers used by the I2S bring-up.
//!
//! Two gates sit in front of the I2S peripheral:
//!
//! 1. **PM APBCMASK.I2S**: the APB bus clock. Without it register writes are
//!    silently dropped.
//! 2. **GCLK CLKCTRL**: routes a generic clock generator to the I2S clock
//!    unit. GCLK writes are synchronized; STATUS.SYNCBUSY must clear before
//!    the route is usable.
//!
//! Reference: SAM D21/DA1 Family Data Sheet, chapters 15 (GCLK) and 16 (PM).

/// Base address of the generic clock controller.
pub const GCLK_BASE: usize = 0x4000_0C00;
/// GCLK STATUS register offset (8-bit).
pub const GCLK_STATUS_OFFSET: usize = 0x01;
/// GCLK CLKCTRL register offset (16-bit).
pub const GCLK_CLKCTRL_OFFSET: usize = 0x02;
/// GCLK STATUS.SYNCBUSY
pub const GCLK_STATUS_SYNCBUSY: u8 = 1 << 7;

/// Base address of the power manager.
pub const PM_BASE: usize = 0x4000_0400;
/// PM APBCMASK register offset (32-bit).
pub const PM_APBCMASK_OFFSET: usize = 0x20;
/// PM APBCMASK.I2S
pub const PM_APBCMASK_I2S: u32 = 1 << 20;

/// Generic clock channel (peripheral) identifiers.
pub mod channel {
    /// I2S clock unit 0.
    pub const I2S_0: u8 = 0x23;
    /// I2S clock unit 1.
    pub const I2S_1: u8 = 0x24;
}

const CLKCTRL_ID_MASK: u16 = 0x3F;
const CLKCTRL_GEN_SHIFT: u32 = 8;
const CLKCTRL_GEN_MASK: u16 = 0x0F << CLKCTRL_GEN_SHIFT;
const CLKCTRL_CLKEN: u16 = 1 << 14;

/// One GCLK CLKCTRL write: connect `generator` to `channel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GenericClockRoute {
    /// Peripheral channel (see [`channel`]).
    pub channel: u8,
    /// Generator number, 0..=8.
    pub generator: u8,
    /// Enable the route.
    pub enable: bool,
}

impl GenericClockRoute {
    /// GCLK generator 0 into I2S clock unit 0.
    pub const I2S0_FROM_GCLK0: Self = Self {
        channel: channel::I2S_0,
        generator: 0,
        enable: true,
    };

    /// Pack into the 16-bit CLKCTRL word: ID\[5:0\], GEN\[11:8\], CLKEN\[14\].
    #[must_use]
    pub const fn to_bits(&self) -> u16 {
        let id = (self.channel as u16) & CLKCTRL_ID_MASK;
        let generator = ((self.generator as u16) << CLKCTRL_GEN_SHIFT) & CLKCTRL_GEN_MASK;
        let enable = if self.enable { CLKCTRL_CLKEN } else { 0 };
        id | generator | enable
    }

    /// Unpack a CLKCTRL word.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // masked to 6 and 4 bits
    pub const fn from_bits(word: u16) -> Self {
        Self {
            channel: (word & CLKCTRL_ID_MASK) as u8,
            generator: ((word & CLKCTRL_GEN_MASK) >> CLKCTRL_GEN_SHIFT) as u8,
            enable: word & CLKCTRL_CLKEN != 0,
        }
    }
}
