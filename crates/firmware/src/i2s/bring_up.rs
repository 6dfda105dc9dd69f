//! I2S bring-up typestate machine.
//!
//! Enforces the only register order the SAMD21 I2S block accepts:
//!
//! ```text
//! [Clocked] --reset()--> [Reset] --configure_clock_unit()--> [ClockUnitConfigured]
//!     --enable_core()--> [CoreEnabled] --configure_serializers()--> [SerializersConfigured]
//!     --enable_serializers()--> [Running] --into_transmitter()--> PollingTx
//! ```
//!
//! ## Why this order
//!
//! - CLKCTRLn is enable-protected: a write while CTRLA.ENABLE or CKENn is
//!   set is silently ignored, so the clock unit is configured between the
//!   reset and the enable.
//! - SERCTRLn writes made before the clock unit has settled are not reliably
//!   latched, hence the settle delay after `enable_core`.
//! - Each CTRLA write is synchronized into the peripheral clock domain; the
//!   next write must wait until SYNCBUSY clears.
//!
//! [`Clocked`] can only be entered with a [`ClockGateToken`], so no I2S
//! register is touched before its bus and generic clocks run.
//!
//! ## Re-entry
//!
//! Bringing the peripheral up a second time is governed by
//! [`ReentryPolicy`]. The default, [`ReentryPolicy::Reapply`], starts with
//! a software reset and converges to the same terminal register state.
//! [`ReentryPolicy::Reject`] refuses if CTRLA.ENABLE is already set.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;
use platform::busy_wait::BusyWait;
use platform::i2s_regs::{
    ClockUnit, ClockUnitConfig, Serializer, SerializerConfig, CTRLA_CKEN0, CTRLA_ENABLE,
    CTRLA_SWRST,
};

use super::tx::PollingTx;
use super::I2sRegisters;
use crate::clock::ClockGateToken;
use crate::error::{BringUpError, Stage};

/// Settle time after enabling the core and clock unit 0.
///
/// The clock unit needs a few frames before serializer configuration is
/// latched reliably; 1 ms is 48 frames at 48 kHz.
pub const CLOCK_SETTLE_US: u32 = 1_000;

/// Settle time between enabling serializer 0 and serializer 1.
pub const SERIALIZER_SETTLE_US: u32 = 500;

// ── State types (zero-sized) ──────────────────────────────────────────────────

/// Bus and generic clocks run; I2S registers untouched.
pub struct Clocked;

/// Software reset complete; every register holds its reset value.
pub struct Reset;

/// CLKCTRL0 written; core still disabled.
pub struct ClockUnitConfigured;

/// CTRLA.ENABLE and CKEN0 set and settled.
pub struct CoreEnabled;

/// SERCTRL0 and SERCTRL1 written; serializers still off.
pub struct SerializersConfigured;

/// Both serializers enabled; TXRDY1 paces the transmitter.
pub struct Running;

// ── Policy and settings ──────────────────────────────────────────────────────

/// What [`I2sBringUp::reset`] does when the peripheral is already enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReentryPolicy {
    /// Reset and reconfigure; the end state is identical to the first run.
    #[default]
    Reapply,
    /// Fail with [`BringUpError::AlreadyRunning`].
    Reject,
}

/// Everything the bring-up writes, as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sSettings {
    /// Clock unit 0 configuration.
    pub clock_unit: ClockUnitConfig,
    /// Serializer 0 (receive).
    pub rx: SerializerConfig,
    /// Serializer 1 (transmit).
    pub tx: SerializerConfig,
    /// Behavior on a second bring-up.
    pub reentry: ReentryPolicy,
}

impl I2sSettings {
    /// PCM5102 output with the ADC capture serializer configured alongside.
    pub const PCM5102: Self = Self {
        clock_unit: ClockUnitConfig::PCM5102,
        rx: SerializerConfig::ADC_RX,
        tx: SerializerConfig::DAC_TX,
        reentry: ReentryPolicy::Reapply,
    };
}

impl Default for I2sSettings {
    fn default() -> Self {
        Self::PCM5102
    }
}

// ── Sequencer ────────────────────────────────────────────────────────────────

/// Typestate machine for I2S bring-up.
///
/// The phantom type `State` encodes how far the sequence has progressed.
/// Only valid transitions are provided as methods, so writing SERCTRL
/// before the clock unit runs is a compile error.
pub struct I2sBringUp<R, W, State> {
    regs: R,
    wait: W,
    policy: ReentryPolicy,
    _state: PhantomData<State>,
}

impl<R, W, State> I2sBringUp<R, W, State>
where
    R: I2sRegisters,
    W: BusyWait,
{
    fn into_state<Next>(self) -> I2sBringUp<R, W, Next> {
        I2sBringUp {
            regs: self.regs,
            wait: self.wait,
            policy: self.policy,
            _state: PhantomData,
        }
    }

    /// Poll `done` against the registers; a timeout is logged and named
    /// after `stage`.
    fn wait_for<F>(&mut self, stage: Stage, mut done: F) -> Result<(), BringUpError>
    where
        F: FnMut(&mut R) -> bool,
    {
        let regs = &mut self.regs;
        self.wait.wait_until(|| done(regs)).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::error!("I2S bring-up timed out at {}", stage);
            #[cfg(feature = "emulator")]
            tracing::warn!(%stage, "I2S bring-up timed out");
            BringUpError::Timeout(stage)
        })
    }

    fn wait_syncbusy_clear(&mut self, mask: u16, stage: Stage) -> Result<(), BringUpError> {
        self.wait_for(stage, |regs| regs.read_syncbusy() & mask == 0)
    }
}

impl<R, W> I2sBringUp<R, W, Clocked>
where
    R: I2sRegisters,
    W: BusyWait,
{
    /// Start a bring-up. The token proves the clock gate is open.
    pub fn new(regs: R, wait: W, policy: ReentryPolicy, _clocks: &ClockGateToken) -> Self {
        Self {
            regs,
            wait,
            policy,
            _state: PhantomData,
        }
    }

    /// Software-reset the peripheral.
    ///
    /// Writes CTRLA.SWRST, waits for it to self-clear, then waits for
    /// SYNCBUSY to clear.
    ///
    /// # Errors
    ///
    /// [`BringUpError::AlreadyRunning`] under [`ReentryPolicy::Reject`] if
    /// CTRLA.ENABLE is set; [`BringUpError::Timeout`] at
    /// [`Stage::SoftwareReset`] or [`Stage::ResetSync`].
    pub fn reset(mut self) -> Result<I2sBringUp<R, W, Reset>, BringUpError> {
        if self.regs.read_ctrla() & CTRLA_ENABLE != 0 {
            match self.policy {
                ReentryPolicy::Reject => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("I2S already enabled; re-entry rejected");
                    return Err(BringUpError::AlreadyRunning);
                }
                ReentryPolicy::Reapply => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("I2S already enabled; resetting before reconfiguration");
                }
            }
        }

        self.regs.write_ctrla(CTRLA_SWRST);
        self.wait_for(Stage::SoftwareReset, |regs| {
            regs.read_ctrla() & CTRLA_SWRST == 0
        })?;
        self.wait_syncbusy_clear(u16::MAX, Stage::ResetSync)?;

        #[cfg(feature = "defmt")]
        defmt::info!("I2S reset");
        #[cfg(feature = "emulator")]
        tracing::debug!("I2S reset");
        Ok(self.into_state())
    }
}

impl<R, W> I2sBringUp<R, W, Reset>
where
    R: I2sRegisters,
    W: BusyWait,
{
    /// Write CLKCTRL0 in a single store while the core is disabled.
    #[must_use]
    pub fn configure_clock_unit(
        mut self,
        config: &ClockUnitConfig,
    ) -> I2sBringUp<R, W, ClockUnitConfigured> {
        let bits = config.to_bits();
        self.regs.write_clkctrl(ClockUnit::Unit0, bits);
        #[cfg(feature = "defmt")]
        defmt::debug!("CLKCTRL0 <- {=u32:#010x}", bits);
        self.into_state()
    }
}

impl<R, W> I2sBringUp<R, W, ClockUnitConfigured>
where
    R: I2sRegisters,
    W: BusyWait,
{
    /// Enable the core and clock unit 0, wait for sync, then settle.
    ///
    /// # Errors
    ///
    /// [`BringUpError::Timeout`] at [`Stage::CoreEnable`].
    pub fn enable_core<D: DelayNs>(
        mut self,
        delay: &mut D,
    ) -> Result<I2sBringUp<R, W, CoreEnabled>, BringUpError> {
        self.regs.write_ctrla(CTRLA_CKEN0 | CTRLA_ENABLE);
        self.wait_syncbusy_clear(u16::MAX, Stage::CoreEnable)?;
        delay.delay_us(CLOCK_SETTLE_US);
        #[cfg(feature = "defmt")]
        defmt::info!("I2S core and clock unit 0 enabled");
        #[cfg(feature = "emulator")]
        tracing::debug!("I2S core and clock unit 0 enabled");
        Ok(self.into_state())
    }
}

impl<R, W> I2sBringUp<R, W, CoreEnabled>
where
    R: I2sRegisters,
    W: BusyWait,
{
    /// Write SERCTRL0 (receive) then SERCTRL1 (transmit).
    #[must_use]
    pub fn configure_serializers(
        mut self,
        rx: &SerializerConfig,
        tx: &SerializerConfig,
    ) -> I2sBringUp<R, W, SerializersConfigured> {
        self.regs.write_serctrl(Serializer::Ser0, rx.to_bits());
        self.regs.write_serctrl(Serializer::Ser1, tx.to_bits());
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "SERCTRL0 <- {=u32:#010x}, SERCTRL1 <- {=u32:#010x}",
            rx.to_bits(),
            tx.to_bits()
        );
        self.into_state()
    }
}

impl<R, W> I2sBringUp<R, W, SerializersConfigured>
where
    R: I2sRegisters,
    W: BusyWait,
{
    /// Enable serializer 0, settle, then enable serializer 1.
    ///
    /// Each enable is a read-modify-write of CTRLA followed by a wait on
    /// that serializer's SYNCBUSY bit.
    ///
    /// # Errors
    ///
    /// [`BringUpError::Timeout`] at [`Stage::RxSerializerEnable`] or
    /// [`Stage::TxSerializerEnable`].
    pub fn enable_serializers<D: DelayNs>(
        mut self,
        delay: &mut D,
    ) -> Result<I2sBringUp<R, W, Running>, BringUpError> {
        self.enable_serializer(Serializer::Ser0, Stage::RxSerializerEnable)?;
        delay.delay_us(SERIALIZER_SETTLE_US);
        self.enable_serializer(Serializer::Ser1, Stage::TxSerializerEnable)?;
        #[cfg(feature = "defmt")]
        defmt::info!("I2S serializers enabled");
        #[cfg(feature = "emulator")]
        tracing::debug!("I2S serializers enabled");
        Ok(self.into_state())
    }

    fn enable_serializer(&mut self, serializer: Serializer, stage: Stage) -> Result<(), BringUpError> {
        let ctrla = self.regs.read_ctrla();
        self.regs.write_ctrla(ctrla | serializer.seren());
        self.wait_syncbusy_clear(serializer.seren_busy(), stage)
    }
}

impl<R, W> I2sBringUp<R, W, Running>
where
    R: I2sRegisters,
    W: BusyWait,
{
    /// Hand the running peripheral to the polling transmitter.
    #[must_use]
    pub fn into_transmitter(self) -> PollingTx<R, W> {
        PollingTx::new(self.regs, self.wait)
    }

    /// Give back the register access and wait policy.
    pub fn release(self) -> (R, W) {
        (self.regs, self.wait)
    }
}

/// Run the whole sequence with `settings`.
///
/// # Errors
///
/// Any [`BringUpError`] from the individual steps.
pub fn bring_up<R, W, D>(
    regs: R,
    wait: W,
    delay: &mut D,
    clocks: &ClockGateToken,
    settings: &I2sSettings,
) -> Result<PollingTx<R, W>, BringUpError>
where
    R: I2sRegisters,
    W: BusyWait,
    D: DelayNs,
{
    let running = I2sBringUp::new(regs, wait, settings.reentry, clocks)
        .reset()?
        .configure_clock_unit(&settings.clock_unit)
        .enable_core(delay)?
        .configure_serializers(&settings.rx, &settings.tx)
        .enable_serializers(delay)?;
    Ok(running.into_transmitter())
}
