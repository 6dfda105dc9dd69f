//! Cycle-counted busy delay.

use embedded_hal::delay::DelayNs;

/// `DelayNs` by burning CPU cycles.
///
/// On the target, accuracy depends only on `cpu_hz` matching the real core
/// clock; there is no timer involved.
#[derive(Debug, Clone, Copy)]
pub struct SpinDelay {
    cpu_hz: u32,
}

impl SpinDelay {
    /// Delay provider for a core running at `cpu_hz`.
    pub const fn new(cpu_hz: u32) -> Self {
        Self { cpu_hz }
    }

    /// Cycles for `ns` nanoseconds, rounded up, at least 1.
    pub fn cycles_for_ns(&self, ns: u32) -> u32 {
        let cycles = u64::from(ns)
            .saturating_mul(u64::from(self.cpu_hz))
            .saturating_add(999_999_999)
            .checked_div(1_000_000_000)
            .unwrap_or(0);
        u32::try_from(cycles).unwrap_or(u32::MAX).max(1)
    }
}

/// Cycle-counted on the target. Host builds have no cycles to count, so
/// they sleep for the same span; bare `no_std` host builds get no impl.
#[cfg(any(feature = "hardware", feature = "std", test))]
impl DelayNs for SpinDelay {
    fn delay_ns(&mut self, ns: u32) {
        #[cfg(feature = "hardware")]
        cortex_m::asm::delay(self.cycles_for_ns(ns));
        #[cfg(not(feature = "hardware"))]
        std::thread::sleep(core::time::Duration::from_nanos(u64::from(ns)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_microsecond_at_12mhz() {
        // 12.288 MHz: 12.288 cycles per µs, rounded up.
        assert_eq!(SpinDelay::new(12_288_000).cycles_for_ns(1_000), 13);
    }

    #[test]
    fn zero_still_spins_once() {
        assert_eq!(SpinDelay::new(48_000_000).cycles_for_ns(0), 1);
    }

    #[test]
    fn long_delay_does_not_overflow() {
        assert_eq!(
            SpinDelay::new(48_000_000).cycles_for_ns(u32::MAX),
            206_158_431
        );
    }

    #[cfg(not(feature = "hardware"))]
    #[test]
    fn host_delay_waits_at_least_the_requested_time() {
        let start = std::time::Instant::now();
        SpinDelay::new(12_288_000).delay_us(2_000);
        assert!(start.elapsed() >= core::time::Duration::from_micros(2_000));
    }
}
