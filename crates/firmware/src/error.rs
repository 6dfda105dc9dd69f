//! Bring-up failures.
//!
//! On hardware every wait uses [`platform::Spin`], which never gives up, so
//! these errors only surface with a bounded wait policy (tests, emulator) or
//! under [`ReentryPolicy::Reject`](crate::i2s::bring_up::ReentryPolicy::Reject).

/// The wait that expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// GCLK STATUS.SYNCBUSY after routing the generic clock.
    GclkSync,
    /// CTRLA.SWRST self-clear.
    SoftwareReset,
    /// SYNCBUSY after the software reset.
    ResetSync,
    /// SYNCBUSY after CTRLA = CKEN0 | ENABLE.
    CoreEnable,
    /// SYNCBUSY.SEREN0.
    RxSerializerEnable,
    /// SYNCBUSY.SEREN1.
    TxSerializerEnable,
}

impl Stage {
    /// Short name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GclkSync => "gclk sync",
            Self::SoftwareReset => "software reset",
            Self::ResetSync => "reset sync",
            Self::CoreEnable => "core enable",
            Self::RxSerializerEnable => "rx serializer enable",
            Self::TxSerializerEnable => "tx serializer enable",
        }
    }
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why the I2S bring-up stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpError {
    /// A hardware status bit never reached the expected value.
    Timeout(Stage),
    /// CTRLA.ENABLE was already set and re-entry is rejected.
    AlreadyRunning,
}

impl core::fmt::Display for BringUpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Timeout(stage) => write!(f, "timed out waiting for {stage}"),
            Self::AlreadyRunning => write!(f, "I2S peripheral is already enabled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BringUpError {}
