//! SAMD21 PM/GCLK register access.

use platform::clock_regs::{
    GCLK_BASE, GCLK_CLKCTRL_OFFSET, GCLK_STATUS_OFFSET, GCLK_STATUS_SYNCBUSY, PM_APBCMASK_OFFSET,
    PM_BASE,
};

use super::ClockTree;

const APBCMASK: usize = PM_BASE + PM_APBCMASK_OFFSET;
const GCLK_CLKCTRL: usize = GCLK_BASE + GCLK_CLKCTRL_OFFSET;
const GCLK_STATUS: usize = GCLK_BASE + GCLK_STATUS_OFFSET;

/// PM and GCLK registers of the running SAMD21.
///
/// Owning one means owning the APBCMASK and GCLK CLKCTRL registers; create
/// it once, at boot.
pub struct Samd21Clocks {
    _private: (),
}

impl Samd21Clocks {
    /// Claim the PM and GCLK registers.
    ///
    /// # Safety
    ///
    /// Nothing else may write PM APBCMASK or GCLK CLKCTRL while the value
    /// lives.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl ClockTree for Samd21Clocks {
    fn enable_apbc(&mut self, mask: u32) {
        let reg = APBCMASK as *mut u32;
        // SAFETY: fixed, aligned MMIO address on this part; exclusive per `steal`.
        unsafe {
            let value = core::ptr::read_volatile(reg);
            core::ptr::write_volatile(reg, value | mask);
        }
    }

    fn write_gclk_clkctrl(&mut self, word: u16) {
        let reg = GCLK_CLKCTRL as *mut u16;
        // SAFETY: fixed, aligned 16-bit MMIO address; exclusive per `steal`.
        unsafe { core::ptr::write_volatile(reg, word) }
    }

    fn gclk_sync_busy(&mut self) -> bool {
        let reg = GCLK_STATUS as *const u8;
        // SAFETY: fixed MMIO address; reading STATUS has no side effects.
        let status = unsafe { core::ptr::read_volatile(reg) };
        status & GCLK_STATUS_SYNCBUSY != 0
    }
}
