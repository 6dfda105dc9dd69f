//! I2S peripheral driver: register access, bring-up, polling transmit.
//!
//! ```text
//! clock::enable_peripheral_clock ──▶ ClockGateToken
//!                                        │
//!                     bring_up::I2sBringUp<Clocked> ── reset ─▶ … ─▶ <Running>
//!                                                                      │
//!                                                   tx::PollingTx ◀────┘
//! ```
//!
//! Everything above the [`I2sRegisters`] trait is host-testable against
//! [`MockI2s`]; [`Samd21I2s`] is the MMIO implementation.

pub mod bring_up;
pub mod mock;
#[cfg(feature = "hardware")]
pub mod samd21;
pub mod tx;

use platform::i2s_regs::{ClockUnit, Serializer};

pub use bring_up::{bring_up, I2sBringUp, I2sSettings, ReentryPolicy};
pub use mock::MockI2s;
#[cfg(feature = "hardware")]
pub use samd21::Samd21I2s;
pub use tx::PollingTx;

/// Access to the I2S registers used by bring-up and transmit.
///
/// Reads take `&mut self`: on the mock a read advances the simulated
/// synchronization, and on hardware every access is volatile anyway.
pub trait I2sRegisters {
    /// Read CTRLA.
    fn read_ctrla(&mut self) -> u8;

    /// Write CTRLA.
    fn write_ctrla(&mut self, value: u8);

    /// Read SYNCBUSY.
    fn read_syncbusy(&mut self) -> u16;

    /// Read INTFLAG.
    fn read_intflag(&mut self) -> u16;

    /// Write CLKCTRLn.
    fn write_clkctrl(&mut self, unit: ClockUnit, value: u32);

    /// Write SERCTRLn.
    fn write_serctrl(&mut self, serializer: Serializer, value: u32);

    /// Write DATAn.
    fn write_data(&mut self, serializer: Serializer, value: u32);
}

impl<T: I2sRegisters + ?Sized> I2sRegisters for &mut T {
    fn read_ctrla(&mut self) -> u8 {
        (**self).read_ctrla()
    }

    fn write_ctrla(&mut self, value: u8) {
        (**self).write_ctrla(value);
    }

    fn read_syncbusy(&mut self) -> u16 {
        (**self).read_syncbusy()
    }

    fn read_intflag(&mut self) -> u16 {
        (**self).read_intflag()
    }

    fn write_clkctrl(&mut self, unit: ClockUnit, value: u32) {
        (**self).write_clkctrl(unit, value);
    }

    fn write_serctrl(&mut self, serializer: Serializer, value: u32) {
        (**self).write_serctrl(serializer, value);
    }

    fn write_data(&mut self, serializer: Serializer, value: u32) {
        (**self).write_data(serializer, value);
    }
}
