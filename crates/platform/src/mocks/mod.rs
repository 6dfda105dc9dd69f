//! Mock implementations for testing
//!
//! Host-side stand-ins for the streaming collaborators: a status indicator
//! that counts toggles and a frame sink that records what it was given.

#![cfg(any(test, feature = "std"))]

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::audio_types::AudioSample;
use crate::stream::FrameSink;

/// Status indicator that records its level and every toggle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockIndicator {
    high: bool,
    toggles: u32,
}

impl MockIndicator {
    /// Create an indicator in the low state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `toggle()` calls so far.
    #[must_use]
    pub fn toggles(&self) -> u32 {
        self.toggles
    }

    /// Current level.
    #[must_use]
    pub fn is_high(&self) -> bool {
        self.high
    }
}

impl ErrorType for MockIndicator {
    type Error = Infallible;
}

impl OutputPin for MockIndicator {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for MockIndicator {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.high = !self.high;
        self.toggles = self.toggles.saturating_add(1);
        Ok(())
    }
}

/// Error from a [`RecordingSink`] that reached its frame limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkFull;

impl core::fmt::Display for SinkFull {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "recording sink is full")
    }
}

/// Frame sink that keeps the first `N` frames.
///
/// Built with [`RecordingSink::new`] it keeps counting once full; built with
/// [`RecordingSink::failing_after`] it returns [`SinkFull`] at the limit, which
/// is how tests stop [`crate::stream::SineStream::run`].
#[derive(Debug, Clone)]
pub struct RecordingSink<const N: usize> {
    frames: heapless::Vec<(AudioSample, AudioSample), N>,
    sent: u32,
    fail_at: Option<u32>,
}

impl<const N: usize> RecordingSink<N> {
    /// Sink that never fails.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
            sent: 0,
            fail_at: None,
        }
    }

    /// Sink that accepts `limit` frames, then fails.
    #[must_use]
    pub fn failing_after(limit: u32) -> Self {
        Self {
            fail_at: Some(limit),
            ..Self::new()
        }
    }

    /// Recorded frames (at most `N`).
    #[must_use]
    pub fn frames(&self) -> &[(AudioSample, AudioSample)] {
        &self.frames
    }

    /// Total frames accepted, including ones past capacity.
    #[must_use]
    pub fn sent(&self) -> u32 {
        self.sent
    }
}

impl<const N: usize> Default for RecordingSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameSink for RecordingSink<N> {
    type Error = SinkFull;

    fn send_stereo_frame(
        &mut self,
        left: AudioSample,
        right: AudioSample,
    ) -> Result<(), Self::Error> {
        if self.fail_at.is_some_and(|limit| self.sent >= limit) {
            return Err(SinkFull);
        }
        // Past capacity only the count is kept.
        let _ = self.frames.push((left, right));
        self.sent = self.sent.saturating_add(1);
        Ok(())
    }
}
