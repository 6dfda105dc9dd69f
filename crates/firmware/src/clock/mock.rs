//! Mock clock tree for host-side testing
//!
//! Records every PM/GCLK write in order and models GCLK write
//! synchronization as a configurable number of busy polls.

use super::ClockTree;

/// One recorded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockWrite {
    /// Bits set in PM APBCMASK.
    Apbc(u32),
    /// Word written to GCLK CLKCTRL.
    GclkClkctrl(u16),
}

/// Mock clock tree: records writes, simulates SYNCBUSY.
#[derive(Debug, Clone)]
pub struct MockClockTree {
    /// Current PM APBCMASK value.
    pub apbcmask: u32,
    /// Last GCLK CLKCTRL word.
    pub gclk_clkctrl: u16,
    writes: heapless::Vec<ClockWrite, 16>,
    sync_latency: u32,
    busy_remaining: u32,
    stuck: bool,
    sync_polls: u32,
}

impl MockClockTree {
    /// Clock tree with zero sync latency.
    pub fn new() -> Self {
        Self {
            apbcmask: 0,
            gclk_clkctrl: 0,
            writes: heapless::Vec::new(),
            sync_latency: 0,
            busy_remaining: 0,
            stuck: false,
            sync_polls: 0,
        }
    }

    /// SYNCBUSY reads set for `polls` polls after each CLKCTRL write.
    #[must_use]
    pub fn with_sync_latency(mut self, polls: u32) -> Self {
        self.sync_latency = polls;
        self
    }

    /// SYNCBUSY never clears.
    #[must_use]
    pub fn with_sync_stuck(mut self) -> Self {
        self.stuck = true;
        self
    }

    /// Writes in the order they were made (first 16).
    pub fn writes(&self) -> &[ClockWrite] {
        &self.writes
    }

    /// Total SYNCBUSY polls.
    pub fn sync_polls(&self) -> u32 {
        self.sync_polls
    }

    fn record(&mut self, write: ClockWrite) {
        // A full log only drops the tail; tests never come close.
        let _ = self.writes.push(write);
    }
}

impl Default for MockClockTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockTree for MockClockTree {
    fn enable_apbc(&mut self, mask: u32) {
        self.apbcmask |= mask;
        self.record(ClockWrite::Apbc(mask));
    }

    fn write_gclk_clkctrl(&mut self, word: u16) {
        self.gclk_clkctrl = word;
        self.busy_remaining = self.sync_latency;
        self.record(ClockWrite::GclkClkctrl(word));
    }

    fn gclk_sync_busy(&mut self) -> bool {
        self.sync_polls = self.sync_polls.saturating_add(1);
        if self.stuck {
            return true;
        }
        if self.busy_remaining > 0 {
            self.busy_remaining = self.busy_remaining.saturating_sub(1);
            return true;
        }
        false
    }
}
