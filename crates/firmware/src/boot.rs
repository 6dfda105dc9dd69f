//! Boot composition: clock gate, I2S bring-up, tone stream.
//!
//! `main` only claims the hardware and calls into here, so the same code path
//! runs against the register-file mocks in tests and in the emulator.

use platform::audio_config::{ToneConfig, ToneConfigError};
use platform::audio_types::AudioSample;
use platform::busy_wait::{BusyWait, WaitTimeout};
use platform::sine_table::SineTable;
use platform::stream::{SineStream, StreamError};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

use crate::clock::{enable_peripheral_clock, ClockTree};
use crate::error::BringUpError;
use crate::i2s::{bring_up, I2sRegisters, I2sSettings, PollingTx};

/// Ordered boot steps, for documentation and ordering tests.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. Sine table: generate once from ToneConfig before any register access",
    "2. Clock gate: PM APBCMASK.I2S, then GCLK CLKCTRL route, wait GCLK SYNCBUSY",
    "3. I2S reset: CTRLA.SWRST, wait self-clear, wait SYNCBUSY",
    "4. Clock unit: CLKCTRL0 single write while the core is disabled",
    "5. Core enable: CTRLA = CKEN0 | ENABLE, wait SYNCBUSY, settle",
    "6. Serializer config: SERCTRL0 (rx) then SERCTRL1 (tx)",
    "7. Serializer enable: SEREN0, settle, SEREN1",
    "8. Stream: wait TXRDY1, write DATA1, forever; toggle LED once per table pass",
];

/// Why boot stopped before streaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError {
    /// The tone configuration cannot produce the requested table.
    Tone(ToneConfigError),
    /// Clock gate or I2S bring-up failed.
    BringUp(BringUpError),
    /// The sample table is empty.
    EmptyTable,
}

impl From<ToneConfigError> for BootError {
    fn from(e: ToneConfigError) -> Self {
        Self::Tone(e)
    }
}

impl From<BringUpError> for BootError {
    fn from(e: BringUpError) -> Self {
        Self::BringUp(e)
    }
}

impl core::fmt::Display for BootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Tone(e) => write!(f, "tone table: {e}"),
            Self::BringUp(e) => write!(f, "I2S bring-up: {e}"),
            Self::EmptyTable => write!(f, "sample table is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BootError {}

/// Step 1: generate the sine table.
///
/// # Errors
///
/// [`BootError::Tone`] if `config` is invalid or not `N` entries long.
pub fn build_table<const N: usize>(config: &ToneConfig) -> Result<SineTable<N>, BootError> {
    let table = SineTable::new(config)?;
    #[cfg(feature = "defmt")]
    defmt::info!(
        "sine table: {=u32} Hz at {=u32} Hz, {=usize} entries",
        config.tone.get(),
        config.sample_rate.get(),
        N
    );
    #[cfg(feature = "emulator")]
    tracing::debug!(
        tone_hz = config.tone.get(),
        sample_rate = config.sample_rate.get(),
        entries = N,
        "sine table generated"
    );
    Ok(table)
}

/// A running transmitter paired with the stream that feeds it.
pub struct ToneOutput<'t, R, W> {
    /// The transmitter on serializer 1.
    pub tx: PollingTx<R, W>,
    /// Table cursor.
    pub stream: SineStream<'t>,
}

impl<R, W> ToneOutput<'_, R, W>
where
    R: I2sRegisters,
    W: BusyWait,
{
    /// Send one frame; toggles `indicator` on each table wrap.
    ///
    /// # Errors
    ///
    /// See [`SineStream::step`].
    pub fn step<P: StatefulOutputPin>(
        &mut self,
        indicator: &mut P,
    ) -> Result<bool, StreamError<WaitTimeout, P::Error>> {
        self.stream.step(&mut self.tx, indicator)
    }

    /// Step 8: stream forever.
    ///
    /// # Errors
    ///
    /// Only with a bounded wait policy or a fallible indicator.
    pub fn run<P: StatefulOutputPin>(
        &mut self,
        indicator: &mut P,
    ) -> Result<core::convert::Infallible, StreamError<WaitTimeout, P::Error>> {
        self.stream.run(&mut self.tx, indicator)
    }
}

/// Steps 2–7: open the clock gate, bring up I2S, and attach `table`.
///
/// # Errors
///
/// [`BootError::BringUp`] for any wait that gave up or a rejected re-entry;
/// [`BootError::EmptyTable`] for an empty `table`.
pub fn start_tone<'t, C, R, W, D>(
    clocks: &mut C,
    regs: R,
    mut wait: W,
    delay: &mut D,
    settings: &I2sSettings,
    table: &'t [AudioSample],
) -> Result<ToneOutput<'t, R, W>, BootError>
where
    C: ClockTree,
    R: I2sRegisters,
    W: BusyWait,
    D: DelayNs,
{
    let stream = SineStream::new(table).ok_or(BootError::EmptyTable)?;
    let gate = enable_peripheral_clock(clocks, &mut wait)?;
    let tx = bring_up(regs, wait, delay, &gate, settings)?;
    #[cfg(feature = "defmt")]
    defmt::info!("streaming {=usize}-entry table", table.len());
    #[cfg(feature = "emulator")]
    tracing::debug!(entries = table.len(), "streaming");
    Ok(ToneOutput { tx, stream })
}
