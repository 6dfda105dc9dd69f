//! SAMD21 I2S register access (volatile MMIO).

use platform::i2s_regs::{
    ClockUnit, Serializer, CTRLA_OFFSET, I2S_BASE, INTFLAG_OFFSET, SYNCBUSY_OFFSET,
};

use super::I2sRegisters;

/// The I2S peripheral of the running SAMD21.
pub struct Samd21I2s {
    _private: (),
}

impl Samd21I2s {
    /// Claim the I2S registers.
    ///
    /// # Safety
    ///
    /// Nothing else may access the I2S peripheral while the value lives.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }

    fn reg<T>(offset: usize) -> *mut T {
        I2S_BASE.wrapping_add(offset) as *mut T
    }
}

impl I2sRegisters for Samd21I2s {
    fn read_ctrla(&mut self) -> u8 {
        // SAFETY: CTRLA is an 8-bit MMIO register; exclusive per `steal`.
        unsafe { core::ptr::read_volatile(Self::reg::<u8>(CTRLA_OFFSET)) }
    }

    fn write_ctrla(&mut self, value: u8) {
        // SAFETY: as above.
        unsafe { core::ptr::write_volatile(Self::reg::<u8>(CTRLA_OFFSET), value) }
    }

    fn read_syncbusy(&mut self) -> u16 {
        // SAFETY: SYNCBUSY is a read-only 16-bit register.
        unsafe { core::ptr::read_volatile(Self::reg::<u16>(SYNCBUSY_OFFSET)) }
    }

    fn read_intflag(&mut self) -> u16 {
        // SAFETY: INTFLAG is 16-bit; reading does not clear flags.
        unsafe { core::ptr::read_volatile(Self::reg::<u16>(INTFLAG_OFFSET)) }
    }

    fn write_clkctrl(&mut self, unit: ClockUnit, value: u32) {
        // SAFETY: CLKCTRLn is a word-aligned 32-bit register.
        unsafe { core::ptr::write_volatile(Self::reg::<u32>(unit.clkctrl_offset()), value) }
    }

    fn write_serctrl(&mut self, serializer: Serializer, value: u32) {
        // SAFETY: SERCTRLn is a word-aligned 32-bit register.
        unsafe { core::ptr::write_volatile(Self::reg::<u32>(serializer.serctrl_offset()), value) }
    }

    fn write_data(&mut self, serializer: Serializer, value: u32) {
        // SAFETY: DATAn is a word-aligned 32-bit register.
        unsafe { core::ptr::write_volatile(Self::reg::<u32>(serializer.data_offset()), value) }
    }
}
