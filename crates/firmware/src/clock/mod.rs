//! Clock gating for the I2S peripheral.
//!
//! The I2S registers are unreachable until two gates are open:
//!
//! ```text
//! PM.APBCMASK.I2S = 1          bus clock: register writes land
//! GCLK.CLKCTRL = I2S_0 ← GEN0  generic clock: clock unit 0 can run
//! wait GCLK.STATUS.SYNCBUSY == 0
//! ```
//!
//! [`enable_peripheral_clock`] performs exactly this and returns a
//! [`ClockGateToken`], which the bring-up sequencer requires before it will
//! touch a single I2S register.

pub mod clock_math;
pub mod mock;
#[cfg(feature = "hardware")]
pub mod samd21;

use platform::busy_wait::BusyWait;
use platform::clock_regs::{GenericClockRoute, PM_APBCMASK_I2S};

use crate::error::{BringUpError, Stage};

pub use mock::MockClockTree;
#[cfg(feature = "hardware")]
pub use samd21::Samd21Clocks;

/// Access to the PM and GCLK registers the I2S clock gate needs.
pub trait ClockTree {
    /// Set `mask` in PM APBCMASK, leaving other bits unchanged.
    fn enable_apbc(&mut self, mask: u32);

    /// Write the GCLK CLKCTRL register.
    fn write_gclk_clkctrl(&mut self, word: u16);

    /// `true` while GCLK STATUS.SYNCBUSY is set.
    fn gclk_sync_busy(&mut self) -> bool;
}

impl<T: ClockTree + ?Sized> ClockTree for &mut T {
    fn enable_apbc(&mut self, mask: u32) {
        (**self).enable_apbc(mask);
    }

    fn write_gclk_clkctrl(&mut self, word: u16) {
        (**self).write_gclk_clkctrl(word);
    }

    fn gclk_sync_busy(&mut self) -> bool {
        (**self).gclk_sync_busy()
    }
}

/// Proof that the I2S bus clock and generic clock are running.
///
/// Only [`enable_peripheral_clock`] creates one.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockGateToken {
    _private: (),
}

/// Open both I2S clock gates and wait for the GCLK write to synchronize.
///
/// # Errors
///
/// [`BringUpError::Timeout`] with [`Stage::GclkSync`] if `wait` gives up.
pub fn enable_peripheral_clock<C, W>(
    clocks: &mut C,
    wait: &mut W,
) -> Result<ClockGateToken, BringUpError>
where
    C: ClockTree,
    W: BusyWait,
{
    clocks.enable_apbc(PM_APBCMASK_I2S);

    let route = GenericClockRoute::I2S0_FROM_GCLK0;
    clocks.write_gclk_clkctrl(route.to_bits());
    #[cfg(feature = "defmt")]
    defmt::debug!("GCLK CLKCTRL <- {=u16:#06x}", route.to_bits());

    wait.wait_until(|| !clocks.gclk_sync_busy())
        .map_err(|_| BringUpError::Timeout(Stage::GclkSync))?;

    #[cfg(feature = "defmt")]
    defmt::info!("I2S clock gate open (GCLK{=u8} -> I2S_0)", route.generator);
    #[cfg(feature = "emulator")]
    tracing::debug!(generator = route.generator, "I2S clock gate open");
    Ok(ClockGateToken { _private: () })
}
