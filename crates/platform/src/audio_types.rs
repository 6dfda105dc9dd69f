//! Audio domain newtypes for compile-time safety.
//!
//! These zero-cost abstractions prevent common errors:
//! - `AudioSample`: signed 24-bit range, the only value the encoder accepts
//! - `SampleRateHz`: validates 8000–192000 Hz (I2S frame rates this part reaches)
//! - `ToneHz`: validates 1 Hz up to the Nyquist limit of a given sample rate

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: i64,
    /// The inclusive minimum allowed value.
    pub min: i64,
    /// The inclusive maximum allowed value.
    pub max: i64,
}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} is outside [{}, {}]", self.value, self.min, self.max)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

// ── AudioSample ──────────────────────────────────────────────────────────────

/// A signed PCM sample in *natural* (right-aligned) 24-bit form.
///
/// Wraps an `i32` with the invariant `-8_388_608 <= value <= 8_388_607`.
/// The slot-aligned wire form (value in bits 31..8, zero padding in 7..0)
/// lives in [`crate::slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct AudioSample(i32);

impl AudioSample {
    /// Largest positive 24-bit value, `2^23 - 1` (0x7F_FFFF).
    pub const MAX: i32 = 8_388_607;

    /// Most negative 24-bit value, `-2^23` (0x80_0000 sign-extended).
    pub const MIN: i32 = -8_388_608;

    /// Digital silence.
    pub const ZERO: Self = Self(0);

    /// Create an `AudioSample`, returning an error outside the 24-bit range.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value < MIN` or `value > MAX`.
    pub const fn new(value: i32) -> Result<Self, OutOfRangeError> {
        if value < Self::MIN || value > Self::MAX {
            Err(OutOfRangeError {
                value: value as i64,
                min: Self::MIN as i64,
                max: Self::MAX as i64,
            })
        } else {
            Ok(Self(value))
        }
    }

    /// Create an `AudioSample`, clamping to the 24-bit range.
    #[must_use]
    pub fn saturating(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // In range after the clamp above.
        #[allow(clippy::cast_possible_truncation)]
        Self(clamped as i32)
    }

    /// Recover a sample from a slot-aligned word; see [`crate::slot::decode_slot`].
    #[must_use]
    pub const fn from_slot(slot: u32) -> Self {
        crate::slot::decode_slot(slot)
    }

    /// Return the natural (right-aligned) value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<AudioSample> for i32 {
    fn from(sample: AudioSample) -> Self {
        sample.0
    }
}

impl TryFrom<i32> for AudioSample {
    type Error = OutOfRangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ── SampleRateHz ─────────────────────────────────────────────────────────────

/// I2S frame rate in Hz.
///
/// Valid range: 8000–192000 Hz. The PCM5102 accepts 8–384 kHz, but the
/// SAMD21 serial clock tops out well below what 384 kHz × 64 bits needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct SampleRateHz(u32);

impl SampleRateHz {
    /// Minimum supported sample rate: 8000 Hz (telephony).
    pub const MIN_HZ: u32 = 8_000;

    /// Maximum supported sample rate: 192000 Hz.
    pub const MAX_HZ: u32 = 192_000;

    /// Create a `SampleRateHz`, returning an error if out of 8000–192000 Hz.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `hz < 8000` or `hz > 192000`.
    pub const fn new(hz: u32) -> Result<Self, OutOfRangeError> {
        if hz < Self::MIN_HZ || hz > Self::MAX_HZ {
            Err(OutOfRangeError {
                value: hz as i64,
                min: Self::MIN_HZ as i64,
                max: Self::MAX_HZ as i64,
            })
        } else {
            Ok(Self(hz))
        }
    }

    /// Literal constructor for presets; range is checked by the preset's tests.
    pub(crate) const fn from_const(hz: u32) -> Self {
        Self(hz)
    }

    /// Return the sample rate in Hz.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

// ── ToneHz ───────────────────────────────────────────────────────────────────

/// Frequency of a synthesized tone in Hz.
///
/// Bounded by the Nyquist limit of the sample rate it will be played at,
/// so construction needs that rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct ToneHz(u32);

impl ToneHz {
    /// Create a `ToneHz` in `1..=rate/2`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] for 0 Hz or anything above Nyquist.
    pub const fn new(hz: u32, rate: SampleRateHz) -> Result<Self, OutOfRangeError> {
        let nyquist = rate.get() / 2;
        if hz == 0 || hz > nyquist {
            Err(OutOfRangeError {
                value: hz as i64,
                min: 1,
                max: nyquist as i64,
            })
        } else {
            Ok(Self(hz))
        }
    }

    /// Literal constructor for presets; range is checked by the preset's tests.
    pub(crate) const fn from_const(hz: u32) -> Self {
        Self(hz)
    }

    /// Return the tone frequency in Hz.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}
