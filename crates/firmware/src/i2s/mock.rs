//! Mock I2S register file for host-side testing
//!
//! Behaves like the SAMD21 I2S block closely enough to exercise the
//! sequencer and transmitter:
//!
//! - CTRLA.SWRST resets every register and reads back set for a
//!   configurable number of polls.
//! - Every CTRLA write makes the changed bits busy in SYNCBUSY for
//!   `sync_latency` polls.
//! - CLKCTRLn is enable-protected (ignored while ENABLE or CKENn is set);
//!   SERCTRLn is ignored while its SERENn is set. Ignored writes count as
//!   ordering violations.
//! - INTFLAG.TXRDY1 is set while serializer 1 runs and drops for
//!   `tx_latency` polls after each DATA1 write.
//!
//! Configuration writes are logged in order; data words go to a separate log.

use platform::i2s_regs::{
    ClockUnit, Serializer, CTRLA_CKEN0, CTRLA_CKEN1, CTRLA_ENABLE, CTRLA_SEREN0, CTRLA_SEREN1,
    CTRLA_SWRST, INTFLAG_TXRDY1,
};

use super::I2sRegisters;

/// Capacity of the configuration write log.
pub const WRITE_LOG_LEN: usize = 32;

/// Capacity of the DATA word log.
pub const DATA_LOG_LEN: usize = 512;

/// One recorded configuration write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegWrite {
    /// CTRLA value.
    Ctrla(u8),
    /// CLKCTRLn value.
    Clkctrl(ClockUnit, u32),
    /// SERCTRLn value.
    Serctrl(Serializer, u32),
}

/// Register contents that survive between accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I2sState {
    /// CTRLA (without SWRST).
    pub ctrla: u8,
    /// CLKCTRL0, CLKCTRL1.
    pub clkctrl: [u32; 2],
    /// SERCTRL0, SERCTRL1.
    pub serctrl: [u32; 2],
}

/// Mock I2S peripheral.
#[derive(Debug, Clone)]
pub struct MockI2s {
    state: I2sState,
    writes: heapless::Vec<RegWrite, WRITE_LOG_LEN>,
    data: heapless::Vec<u32, DATA_LOG_LEN>,
    data_writes: u32,
    violations: u32,

    sync_latency: u32,
    sync_pending: u16,
    sync_remaining: u32,
    sync_stuck: u16,

    swrst_latency: u32,
    swrst_remaining: u32,
    swrst_stuck: bool,

    tx_latency: u32,
    tx_remaining: u32,
    tx_stalled: bool,
    intflag_polls: u32,
}

impl MockI2s {
    /// Freshly powered peripheral, zero latency everywhere.
    pub fn new() -> Self {
        Self {
            state: I2sState::default(),
            writes: heapless::Vec::new(),
            data: heapless::Vec::new(),
            data_writes: 0,
            violations: 0,
            sync_latency: 0,
            sync_pending: 0,
            sync_remaining: 0,
            sync_stuck: 0,
            swrst_latency: 0,
            swrst_remaining: 0,
            swrst_stuck: false,
            tx_latency: 0,
            tx_remaining: 0,
            tx_stalled: false,
            intflag_polls: 0,
        }
    }

    /// SYNCBUSY keeps changed bits set for `polls` reads after a CTRLA write.
    #[must_use]
    pub fn with_sync_latency(mut self, polls: u32) -> Self {
        self.sync_latency = polls;
        self
    }

    /// SYNCBUSY bits in `mask` never clear once set.
    #[must_use]
    pub fn with_syncbusy_stuck(mut self, mask: u16) -> Self {
        self.sync_stuck = mask;
        self
    }

    /// CTRLA.SWRST reads back set for `polls` reads.
    #[must_use]
    pub fn with_swrst_latency(mut self, polls: u32) -> Self {
        self.swrst_latency = polls;
        self
    }

    /// CTRLA.SWRST never self-clears.
    #[must_use]
    pub fn with_swrst_stuck(mut self) -> Self {
        self.swrst_stuck = true;
        self
    }

    /// TXRDY1 stays low for `polls` reads after each DATA1 write.
    #[must_use]
    pub fn with_tx_latency(mut self, polls: u32) -> Self {
        self.tx_latency = polls;
        self
    }

    /// TXRDY1 never sets.
    #[must_use]
    pub fn with_tx_stalled(mut self) -> Self {
        self.tx_stalled = true;
        self
    }

    /// Current register contents.
    pub fn state(&self) -> I2sState {
        self.state
    }

    /// CTRLA as last written (SWRST excluded).
    pub fn ctrla(&self) -> u8 {
        self.state.ctrla
    }

    /// Current CLKCTRLn.
    pub fn clkctrl(&self, unit: ClockUnit) -> u32 {
        match unit {
            ClockUnit::Unit0 => self.state.clkctrl[0],
            ClockUnit::Unit1 => self.state.clkctrl[1],
        }
    }

    /// Current SERCTRLn.
    pub fn serctrl(&self, serializer: Serializer) -> u32 {
        match serializer {
            Serializer::Ser0 => self.state.serctrl[0],
            Serializer::Ser1 => self.state.serctrl[1],
        }
    }

    /// Configuration writes in order (first [`WRITE_LOG_LEN`]).
    pub fn writes(&self) -> &[RegWrite] {
        &self.writes
    }

    /// Forget logged writes, keep register contents.
    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.data.clear();
        self.data_writes = 0;
    }

    /// DATA1 words in order (first [`DATA_LOG_LEN`]).
    pub fn data_words(&self) -> &[u32] {
        &self.data
    }

    /// Total DATA writes, including ones past the log capacity.
    pub fn data_writes(&self) -> u32 {
        self.data_writes
    }

    /// Writes the hardware would have ignored or mis-sequenced.
    pub fn violations(&self) -> u32 {
        self.violations
    }

    /// Total INTFLAG reads.
    pub fn intflag_polls(&self) -> u32 {
        self.intflag_polls
    }

    fn record(&mut self, write: RegWrite) {
        // Past capacity only the tail is lost; tests never come close.
        let _ = self.writes.push(write);
    }

    fn violation(&mut self) {
        self.violations = self.violations.saturating_add(1);
    }

    fn clock_running(&self) -> bool {
        let needed = CTRLA_ENABLE | CTRLA_CKEN0;
        self.state.ctrla & needed == needed
    }

    fn tx_running(&self) -> bool {
        self.clock_running() && self.state.ctrla & CTRLA_SEREN1 != 0
    }

    fn software_reset(&mut self) {
        self.state = I2sState::default();
        self.swrst_remaining = if self.swrst_stuck {
            u32::MAX
        } else {
            self.swrst_latency
        };
        self.sync_pending = u16::from(CTRLA_SWRST);
        self.sync_remaining = self.sync_latency;
        self.tx_remaining = 0;
    }
}

impl Default for MockI2s {
    fn default() -> Self {
        Self::new()
    }
}

impl I2sRegisters for MockI2s {
    fn read_ctrla(&mut self) -> u8 {
        if self.swrst_remaining > 0 {
            self.swrst_remaining = self.swrst_remaining.saturating_sub(1);
            return self.state.ctrla | CTRLA_SWRST;
        }
        self.state.ctrla
    }

    fn write_ctrla(&mut self, value: u8) {
        self.record(RegWrite::Ctrla(value));

        if value & CTRLA_SWRST != 0 {
            self.software_reset();
            return;
        }

        let enabling_serializers = value & (CTRLA_SEREN0 | CTRLA_SEREN1);
        let clocked = value & (CTRLA_ENABLE | CTRLA_CKEN0) == CTRLA_ENABLE | CTRLA_CKEN0;
        if enabling_serializers != 0 && !clocked {
            self.violation();
        }
        if value & CTRLA_CKEN1 != 0 {
            // Clock unit 1 is never configured on this board.
            self.violation();
        }

        let changed = self.state.ctrla ^ value;
        self.state.ctrla = value;
        self.sync_pending |= u16::from(changed);
        self.sync_remaining = self.sync_latency;
    }

    fn read_syncbusy(&mut self) -> u16 {
        let stuck = self.sync_pending & self.sync_stuck;
        if self.sync_remaining > 0 {
            self.sync_remaining = self.sync_remaining.saturating_sub(1);
            return self.sync_pending;
        }
        self.sync_pending = stuck;
        stuck
    }

    fn read_intflag(&mut self) -> u16 {
        self.intflag_polls = self.intflag_polls.saturating_add(1);
        if self.tx_stalled || !self.tx_running() {
            return 0;
        }
        if self.tx_remaining > 0 {
            self.tx_remaining = self.tx_remaining.saturating_sub(1);
            return 0;
        }
        INTFLAG_TXRDY1
    }

    fn write_clkctrl(&mut self, unit: ClockUnit, value: u32) {
        self.record(RegWrite::Clkctrl(unit, value));
        if self.state.ctrla & (CTRLA_ENABLE | unit.cken()) != 0 {
            self.violation();
            return;
        }
        match unit {
            ClockUnit::Unit0 => self.state.clkctrl[0] = value,
            ClockUnit::Unit1 => self.state.clkctrl[1] = value,
        }
    }

    fn write_serctrl(&mut self, serializer: Serializer, value: u32) {
        self.record(RegWrite::Serctrl(serializer, value));
        if self.state.ctrla & serializer.seren() != 0 {
            self.violation();
            return;
        }
        if !self.clock_running() {
            // Latched unreliably before the clock unit runs.
            self.violation();
        }
        match serializer {
            Serializer::Ser0 => self.state.serctrl[0] = value,
            Serializer::Ser1 => self.state.serctrl[1] = value,
        }
    }

    fn write_data(&mut self, serializer: Serializer, value: u32) {
        if serializer != Serializer::Ser1 || !self.tx_running() {
            self.violation();
        }
        let _ = self.data.push(value);
        self.data_writes = self.data_writes.saturating_add(1);
        self.tx_remaining = self.tx_latency;
    }
}
