//! Heartbeat LED on a SAMD21 PORT pin.
//!
//! Uses the PORT set/clear/toggle registers, so each operation is a single
//! store with no read-modify-write. Pin multiplexing is left at its reset
//! default (GPIO); `new` only makes the pin an output.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// PORT base address.
pub const PORT_BASE: usize = 0x4100_4400;
/// Stride between pin groups (PA, PB).
pub const GROUP_STRIDE: usize = 0x80;

const DIRSET: usize = 0x08;
const OUT: usize = 0x10;
const OUTCLR: usize = 0x14;
const OUTSET: usize = 0x18;
const OUTTGL: usize = 0x1C;

/// Pin group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Group {
    /// PAxx
    A,
    /// PBxx
    B,
}

/// Address of register `offset` within `group`.
pub const fn port_register(group: Group, offset: usize) -> usize {
    let group_base = match group {
        Group::A => 0,
        Group::B => GROUP_STRIDE,
    };
    PORT_BASE.wrapping_add(group_base).wrapping_add(offset)
}

/// An output pin driven through PORT.
#[derive(Debug)]
pub struct StatusLed {
    group: Group,
    mask: u32,
}

impl StatusLed {
    /// PA17: the on-board LED of Arduino Zero class boards.
    pub const BOARD_LED: (Group, u8) = (Group::A, 17);

    /// Make `pin` of `group` a low output.
    ///
    /// # Safety
    ///
    /// Nothing else may drive this pin while the value lives.
    pub unsafe fn new(group: Group, pin: u8) -> Self {
        let led = Self {
            group,
            mask: 1u32.wrapping_shl(u32::from(pin & 31)),
        };
        led.store(OUTCLR);
        led.store(DIRSET);
        led
    }

    fn register(&self, offset: usize) -> usize {
        port_register(self.group, offset)
    }

    fn store(&self, offset: usize) {
        let reg = self.register(offset) as *mut u32;
        // SAFETY: PORT set/clear/toggle registers only affect bits set in
        // `mask`, and the pin is owned per `new`.
        unsafe { core::ptr::write_volatile(reg, self.mask) }
    }
}

impl ErrorType for StatusLed {
    type Error = Infallible;
}

impl OutputPin for StatusLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.store(OUTCLR);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.store(OUTSET);
        Ok(())
    }
}

impl StatefulOutputPin for StatusLed {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        let reg = self.register(OUT) as *const u32;
        // SAFETY: reading OUT has no side effects.
        let out = unsafe { core::ptr::read_volatile(reg) };
        Ok(out & self.mask != 0)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|high| !high)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.store(OUTTGL);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_b_toggle_register() {
        assert_eq!(port_register(Group::B, OUTTGL), 0x4100_449C);
    }

    #[test]
    fn group_a_dirset_register() {
        assert_eq!(port_register(Group::A, DIRSET), 0x4100_4408);
    }
}
