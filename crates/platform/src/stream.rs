//! Steady-state streaming loop.
//!
//! ```text
//! ┌──────────────┐  sample   ┌────────────┐  (s, s)   ┌───────────┐
//! │ SineTable    │ ────────▶ │ SineStream │ ────────▶ │ FrameSink │
//! └──────────────┘           └────────────┘           └───────────┘
//!                                  │ wrap
//!                                  ▼
//!                            status indicator.toggle()
//! ```
//!
//! The table is mono; each sample is sent to both channels. The cursor and
//! the table reference are owned by the stream value, so nothing here is
//! global. [`SineStream::run`] never returns `Ok`.

use core::convert::Infallible;

use embedded_hal::digital::StatefulOutputPin;

use crate::audio_types::AudioSample;

/// Consumer of stereo frames (the polling transmitter on hardware).
pub trait FrameSink {
    /// Error reported by the underlying transport.
    type Error;

    /// Transmit one left/right pair, blocking until both are accepted.
    ///
    /// # Errors
    ///
    /// Returns the transport error; the pair may be partially sent.
    fn send_stereo_frame(&mut self, left: AudioSample, right: AudioSample)
        -> Result<(), Self::Error>;
}

impl<T: FrameSink + ?Sized> FrameSink for &mut T {
    type Error = T::Error;

    fn send_stereo_frame(
        &mut self,
        left: AudioSample,
        right: AudioSample,
    ) -> Result<(), Self::Error> {
        (**self).send_stereo_frame(left, right)
    }
}

/// Why the streaming loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StreamError<S, P> {
    /// The frame sink failed.
    Sink(S),
    /// The status indicator failed.
    Indicator(P),
}

impl<S: core::fmt::Display, P: core::fmt::Debug> core::fmt::Display for StreamError<S, P> {
    #[allow(clippy::use_debug)] // embedded-hal pin errors only guarantee Debug
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "frame sink failed: {e}"),
            Self::Indicator(e) => write!(f, "status indicator failed: {e:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl<S, P> std::error::Error for StreamError<S, P>
where
    S: core::fmt::Display + core::fmt::Debug,
    P: core::fmt::Debug,
{
}

/// Read position within a table of fixed, non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StreamCursor {
    index: usize,
    len: usize,
}

impl StreamCursor {
    /// Cursor at 0 over `len` entries; `None` for an empty table.
    #[must_use]
    pub const fn new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { index: 0, len })
        }
    }

    /// Current index, always `< len`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Table length the cursor wraps at.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; an empty cursor cannot be built.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Move to the next entry. Returns `true` exactly when it wrapped to 0.
    pub fn advance(&mut self) -> bool {
        let next = self.index.saturating_add(1);
        if next >= self.len {
            self.index = 0;
            true
        } else {
            self.index = next;
            false
        }
    }
}

/// One frame produced by [`SineStream::next_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Left channel.
    pub left: AudioSample,
    /// Right channel (same as left; the table is mono).
    pub right: AudioSample,
    /// The cursor wrapped after this frame.
    pub wrapped: bool,
}

/// Plays a sample table in a loop.
#[derive(Debug, Clone)]
pub struct SineStream<'a> {
    table: &'a [AudioSample],
    cursor: StreamCursor,
}

impl<'a> SineStream<'a> {
    /// Stream over `table` from index 0; `None` if the table is empty.
    #[must_use]
    pub fn new(table: &'a [AudioSample]) -> Option<Self> {
        let cursor = StreamCursor::new(table.len())?;
        Some(Self { table, cursor })
    }

    /// Current cursor.
    #[must_use]
    pub const fn cursor(&self) -> StreamCursor {
        self.cursor
    }

    fn current(&self) -> AudioSample {
        // index < len == table.len(), so the fallback is never taken.
        self.table
            .get(self.cursor.index())
            .copied()
            .unwrap_or(AudioSample::ZERO)
    }

    /// Take the next frame and advance, without sending it anywhere.
    pub fn next_frame(&mut self) -> Frame {
        let sample = self.current();
        let wrapped = self.cursor.advance();
        Frame {
            left: sample,
            right: sample,
            wrapped,
        }
    }

    /// Send one frame, advance, and toggle `indicator` on wrap.
    ///
    /// Returns whether the cursor wrapped. If the sink fails the cursor does
    /// not move.
    ///
    /// # Errors
    ///
    /// [`StreamError::Sink`] or [`StreamError::Indicator`].
    pub fn step<S, P>(
        &mut self,
        sink: &mut S,
        indicator: &mut P,
    ) -> Result<bool, StreamError<S::Error, P::Error>>
    where
        S: FrameSink,
        P: StatefulOutputPin,
    {
        let sample = self.current();
        sink.send_stereo_frame(sample, sample)
            .map_err(StreamError::Sink)?;
        let wrapped = self.cursor.advance();
        if wrapped {
            indicator.toggle().map_err(StreamError::Indicator)?;
        }
        Ok(wrapped)
    }

    /// Stream forever.
    ///
    /// With an infallible sink and indicator this never returns.
    ///
    /// # Errors
    ///
    /// The first error from [`SineStream::step`].
    pub fn run<S, P>(
        &mut self,
        sink: &mut S,
        indicator: &mut P,
    ) -> Result<Infallible, StreamError<S::Error, P::Error>>
    where
        S: FrameSink,
        P: StatefulOutputPin,
    {
        loop {
            self.step(sink, indicator)?;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::mocks::{MockIndicator, RecordingSink};

    fn ramp() -> [AudioSample; 4] {
        [0, 1, 2, 3].map(|v| AudioSample::new(v).unwrap())
    }

    #[test]
    fn empty_table_has_no_stream() {
        assert!(SineStream::new(&[]).is_none());
        assert!(StreamCursor::new(0).is_none());
    }

    #[test]
    fn cursor_wraps_exactly_at_len() {
        let mut c = StreamCursor::new(3).unwrap();
        assert!(!c.advance());
        assert!(!c.advance());
        assert!(c.advance());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn single_entry_cursor_wraps_every_step() {
        let mut c = StreamCursor::new(1).unwrap();
        assert!(c.advance());
        assert!(c.advance());
    }

    #[test]
    fn frames_duplicate_mono_sample() {
        let table = ramp();
        let mut stream = SineStream::new(&table).unwrap();
        let f = stream.next_frame();
        assert_eq!(f.left, f.right);
        assert_eq!(f.left.get(), 0);
        assert!(!f.wrapped);
    }

    #[test]
    fn one_pass_sends_table_in_order_and_toggles_once() {
        let table = ramp();
        let mut stream = SineStream::new(&table).unwrap();
        let mut sink = RecordingSink::<8>::new();
        let mut led = MockIndicator::new();

        for _ in 0..table.len() {
            stream.step(&mut sink, &mut led).unwrap();
        }

        assert_eq!(stream.cursor().index(), 0);
        assert_eq!(led.toggles(), 1);
        let lefts: heapless::Vec<i32, 8> = sink.frames().iter().map(|(l, _)| l.get()).collect();
        assert_eq!(lefts.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn failing_sink_stops_run_without_advancing() {
        let table = ramp();
        let mut stream = SineStream::new(&table).unwrap();
        let mut sink = RecordingSink::<8>::failing_after(2);
        let mut led = MockIndicator::new();

        let err = stream.run(&mut sink, &mut led).unwrap_err();

        assert_eq!(err, StreamError::Sink(crate::mocks::SinkFull));
        assert_eq!(stream.cursor().index(), 2);
        assert_eq!(led.toggles(), 0);
    }
}
