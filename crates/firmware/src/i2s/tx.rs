//! Polling transmitter on serializer 1.
//!
//! Each slot waits for INTFLAG.TXRDY1 and then stores one word to DATA1.
//! Writing DATA1 clears TXRDY1 until the serializer has moved the word into
//! its shift register, so the wait paces the loop to the frame clock.

use platform::audio_types::AudioSample;
use platform::busy_wait::{BusyWait, WaitTimeout};
use platform::i2s_regs::Serializer;
use platform::slot::encode_slot;
use platform::stream::FrameSink;

use super::I2sRegisters;

const TX: Serializer = Serializer::Ser1;

/// Blocking stereo transmitter. Obtained from a running bring-up.
pub struct PollingTx<R, W> {
    regs: R,
    wait: W,
}

impl<R, W> PollingTx<R, W>
where
    R: I2sRegisters,
    W: BusyWait,
{
    pub(crate) fn new(regs: R, wait: W) -> Self {
        Self { regs, wait }
    }

    /// Wait for TXRDY1, then write one slot word.
    ///
    /// # Errors
    ///
    /// [`WaitTimeout`] if the wait policy gives up.
    pub fn send_slot(&mut self, word: u32) -> Result<(), WaitTimeout> {
        let regs = &mut self.regs;
        self.wait
            .wait_until(|| regs.read_intflag() & TX.tx_ready() != 0)?;
        self.regs.write_data(TX, word);
        Ok(())
    }

    /// Send left then right: two waits, two DATA1 writes.
    ///
    /// # Errors
    ///
    /// [`WaitTimeout`] if either wait gives up; on the second, the left slot
    /// has already gone out.
    pub fn send_stereo_frame(
        &mut self,
        left: AudioSample,
        right: AudioSample,
    ) -> Result<(), WaitTimeout> {
        self.send_slot(encode_slot(left))?;
        self.send_slot(encode_slot(right))
    }

    /// Give back the register access and wait policy.
    pub fn release(self) -> (R, W) {
        (self.regs, self.wait)
    }
}

impl<R, W> FrameSink for PollingTx<R, W>
where
    R: I2sRegisters,
    W: BusyWait,
{
    type Error = WaitTimeout;

    fn send_stereo_frame(
        &mut self,
        left: AudioSample,
        right: AudioSample,
    ) -> Result<(), Self::Error> {
        PollingTx::send_stereo_frame(self, left, right)
    }
}
