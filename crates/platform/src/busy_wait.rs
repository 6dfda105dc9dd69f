//! Polling wait policies.
//!
//! Every hardware wait in the bring-up and transmit paths is "poll a status
//! bit until it reads the wanted value". The policy deciding how long to keep
//! polling is injected through [`BusyWait`]:
//!
//! - [`Spin`] polls forever. This is the production policy: with nothing
//!   else to do, a stalled peripheral stalls the firmware.
//! - [`Bounded`] gives up after a fixed number of polls. Tests and the host
//!   emulator use it so a mis-modelled register fails instead of hanging.

/// A wait gave up before its condition became true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaitTimeout {
    /// Number of polls made before giving up.
    pub polls: u32,
}

impl core::fmt::Display for WaitTimeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "condition still false after {} polls", self.polls)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WaitTimeout {}

/// Strategy for polling a hardware condition.
pub trait BusyWait {
    /// Call `done` until it returns `true`.
    ///
    /// # Errors
    ///
    /// Returns [`WaitTimeout`] if the policy gives up first.
    fn wait_until<F>(&mut self, done: F) -> Result<(), WaitTimeout>
    where
        F: FnMut() -> bool;
}

impl<W: BusyWait + ?Sized> BusyWait for &mut W {
    fn wait_until<F>(&mut self, done: F) -> Result<(), WaitTimeout>
    where
        F: FnMut() -> bool,
    {
        (**self).wait_until(done)
    }
}

/// Poll forever. Never returns `Err`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spin;

impl BusyWait for Spin {
    fn wait_until<F>(&mut self, mut done: F) -> Result<(), WaitTimeout>
    where
        F: FnMut() -> bool,
    {
        while !done() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}

/// Poll at most `max_polls` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounded {
    /// Poll budget per wait (not shared between waits).
    pub max_polls: u32,
}

impl Bounded {
    /// Create a policy with `max_polls` polls per wait.
    #[must_use]
    pub const fn new(max_polls: u32) -> Self {
        Self { max_polls }
    }
}

impl BusyWait for Bounded {
    fn wait_until<F>(&mut self, mut done: F) -> Result<(), WaitTimeout>
    where
        F: FnMut() -> bool,
    {
        for _ in 0..self.max_polls {
            if done() {
                return Ok(());
            }
        }
        Err(WaitTimeout {
            polls: self.max_polls,
        })
    }
}
