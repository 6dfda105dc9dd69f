//! SAMD21 I2S register map and structured register values.
//!
//! Reference: SAM D21/DA1 Family Data Sheet (DS40001882), chapter 35 (I2S).
//!
//! Only the registers this firmware touches are described. Offsets are
//! relative to [`I2S_BASE`].
//!
//! | Register  | Offset | Width | Access |
//! |-----------|--------|-------|--------|
//! | CTRLA     | 0x00   | 8     | RW, write-synchronized |
//! | CLKCTRL0  | 0x04   | 32    | RW, enable-protected |
//! | CLKCTRL1  | 0x08   | 32    | RW, enable-protected |
//! | INTFLAG   | 0x14   | 16    | R/W1C |
//! | SYNCBUSY  | 0x18   | 16    | R |
//! | SERCTRL0  | 0x20   | 32    | RW, enable-protected |
//! | SERCTRL1  | 0x24   | 32    | RW, enable-protected |
//! | DATA0     | 0x30   | 32    | RW, write-synchronized |
//! | DATA1     | 0x34   | 32    | RW, write-synchronized |
//!
//! # Why value objects
//!
//! The clock unit and serializer registers pack up to fourteen fields into
//! one word and must be written in a single store. [`ClockUnitConfig`] and
//! [`SerializerConfig`] name every field; [`ClockUnitConfig::to_bits`] and
//! [`SerializerConfig::to_bits`] are the only places shifts appear. The
//! field tables ([`CLKCTRL_FIELDS`], [`SERCTRL_FIELDS`]) are tested for
//! pairwise disjointness.

// ── Addresses ────────────────────────────────────────────────────────────────

/// Base address of the I2S peripheral (APBC bridge).
pub const I2S_BASE: usize = 0x4200_5000;

/// CTRLA register offset (8-bit).
pub const CTRLA_OFFSET: usize = 0x00;
/// CLKCTRL0 register offset; CLKCTRL1 follows at +4.
pub const CLKCTRL0_OFFSET: usize = 0x04;
/// INTFLAG register offset (16-bit).
pub const INTFLAG_OFFSET: usize = 0x14;
/// SYNCBUSY register offset (16-bit).
pub const SYNCBUSY_OFFSET: usize = 0x18;
/// SERCTRL0 register offset; SERCTRL1 follows at +4.
pub const SERCTRL0_OFFSET: usize = 0x20;
/// DATA0 register offset; DATA1 follows at +4.
pub const DATA0_OFFSET: usize = 0x30;

// ── CTRLA bits ───────────────────────────────────────────────────────────────

/// CTRLA.SWRST: software reset, self-clearing.
pub const CTRLA_SWRST: u8 = 1 << 0;
/// CTRLA.ENABLE: peripheral enable.
pub const CTRLA_ENABLE: u8 = 1 << 1;
/// CTRLA.CKEN0: clock unit 0 enable.
pub const CTRLA_CKEN0: u8 = 1 << 2;
/// CTRLA.CKEN1: clock unit 1 enable.
pub const CTRLA_CKEN1: u8 = 1 << 3;
/// CTRLA.SEREN0: serializer 0 enable.
pub const CTRLA_SEREN0: u8 = 1 << 4;
/// CTRLA.SEREN1: serializer 1 enable.
pub const CTRLA_SEREN1: u8 = 1 << 5;

// ── SYNCBUSY bits (same positions as the CTRLA bits they shadow) ─────────────

/// SYNCBUSY.SWRST
pub const SYNCBUSY_SWRST: u16 = 1 << 0;
/// SYNCBUSY.ENABLE
pub const SYNCBUSY_ENABLE: u16 = 1 << 1;
/// SYNCBUSY.CKEN0
pub const SYNCBUSY_CKEN0: u16 = 1 << 2;
/// SYNCBUSY.CKEN1
pub const SYNCBUSY_CKEN1: u16 = 1 << 3;
/// SYNCBUSY.SEREN0
pub const SYNCBUSY_SEREN0: u16 = 1 << 4;
/// SYNCBUSY.SEREN1
pub const SYNCBUSY_SEREN1: u16 = 1 << 5;
/// SYNCBUSY.DATA0
pub const SYNCBUSY_DATA0: u16 = 1 << 8;
/// SYNCBUSY.DATA1
pub const SYNCBUSY_DATA1: u16 = 1 << 9;

// ── INTFLAG bits ─────────────────────────────────────────────────────────────

/// INTFLAG.RXRDY0: serializer 0 has received data.
pub const INTFLAG_RXRDY0: u16 = 1 << 0;
/// INTFLAG.RXRDY1
pub const INTFLAG_RXRDY1: u16 = 1 << 1;
/// INTFLAG.TXRDY0: DATA0 can take the next word.
pub const INTFLAG_TXRDY0: u16 = 1 << 8;
/// INTFLAG.TXRDY1: DATA1 can take the next word.
pub const INTFLAG_TXRDY1: u16 = 1 << 9;
/// INTFLAG.TXUR1: serializer 1 underrun.
pub const INTFLAG_TXUR1: u16 = 1 << 13;

// ── Unit / serializer selectors ──────────────────────────────────────────────

/// One of the two clock units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockUnit {
    /// Clock unit 0 (the only one this firmware runs).
    #[default]
    Unit0,
    /// Clock unit 1.
    Unit1,
}

impl ClockUnit {
    /// Index into CLKCTRL\[n\].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Unit0 => 0,
            Self::Unit1 => 1,
        }
    }

    /// Offset of this unit's CLKCTRL register.
    #[must_use]
    pub const fn clkctrl_offset(self) -> usize {
        match self {
            Self::Unit0 => CLKCTRL0_OFFSET,
            Self::Unit1 => CLKCTRL0_OFFSET + 4,
        }
    }

    /// CTRLA.CKENn bit for this unit.
    #[must_use]
    pub const fn cken(self) -> u8 {
        match self {
            Self::Unit0 => CTRLA_CKEN0,
            Self::Unit1 => CTRLA_CKEN1,
        }
    }
}

/// One of the two serializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Serializer {
    /// Serializer 0: receive side (ADC capture).
    Ser0,
    /// Serializer 1: transmit side (DAC output).
    Ser1,
}

impl Serializer {
    /// Index into SERCTRL\[n\] / DATA\[n\].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Ser0 => 0,
            Self::Ser1 => 1,
        }
    }

    /// Offset of this serializer's SERCTRL register.
    #[must_use]
    pub const fn serctrl_offset(self) -> usize {
        match self {
            Self::Ser0 => SERCTRL0_OFFSET,
            Self::Ser1 => SERCTRL0_OFFSET + 4,
        }
    }

    /// Offset of this serializer's DATA register.
    #[must_use]
    pub const fn data_offset(self) -> usize {
        match self {
            Self::Ser0 => DATA0_OFFSET,
            Self::Ser1 => DATA0_OFFSET + 4,
        }
    }

    /// CTRLA.SERENn bit.
    #[must_use]
    pub const fn seren(self) -> u8 {
        match self {
            Self::Ser0 => CTRLA_SEREN0,
            Self::Ser1 => CTRLA_SEREN1,
        }
    }

    /// SYNCBUSY.SERENn bit.
    #[must_use]
    pub const fn seren_busy(self) -> u16 {
        match self {
            Self::Ser0 => SYNCBUSY_SEREN0,
            Self::Ser1 => SYNCBUSY_SEREN1,
        }
    }

    /// INTFLAG.TXRDYn bit.
    #[must_use]
    pub const fn tx_ready(self) -> u16 {
        match self {
            Self::Ser0 => INTFLAG_TXRDY0,
            Self::Ser1 => INTFLAG_TXRDY1,
        }
    }
}

// ── Bit-field helper ─────────────────────────────────────────────────────────

/// A contiguous bit field inside a 32-bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Datasheet field name.
    pub name: &'static str,
    /// Position of the least significant bit.
    pub shift: u32,
    /// Width in bits (1..=32).
    pub width: u32,
}

impl Field {
    const fn new(name: &'static str, shift: u32, width: u32) -> Self {
        Self { name, shift, width }
    }

    /// Mask of the field in register position.
    #[must_use]
    pub const fn mask(self) -> u32 {
        let unshifted = match 1u32.checked_shl(self.width) {
            Some(bit) => bit.wrapping_sub(1),
            None => u32::MAX,
        };
        unshifted.wrapping_shl(self.shift)
    }

    /// Place `value` in the field; bits that do not fit are dropped.
    #[must_use]
    pub const fn insert(self, value: u32) -> u32 {
        value.wrapping_shl(self.shift) & self.mask()
    }

    /// Read the field out of a register word.
    #[must_use]
    pub const fn extract(self, word: u32) -> u32 {
        (word & self.mask()).wrapping_shr(self.shift)
    }
}

// ── CLKCTRLn ─────────────────────────────────────────────────────────────────

/// CLKCTRL.SLOTSIZE\[1:0\]
pub const SLOTSIZE: Field = Field::new("SLOTSIZE", 0, 2);
/// CLKCTRL.NBSLOTS\[4:2\] (slots − 1)
pub const NBSLOTS: Field = Field::new("NBSLOTS", 2, 3);
/// CLKCTRL.FSWIDTH\[6:5\]
pub const FSWIDTH: Field = Field::new("FSWIDTH", 5, 2);
/// CLKCTRL.BITDELAY\[7\]
pub const BITDELAY: Field = Field::new("BITDELAY", 7, 1);
/// CLKCTRL.FSSEL\[8\]
pub const FSSEL: Field = Field::new("FSSEL", 8, 1);
/// CLKCTRL.FSINV\[11\]
pub const FSINV: Field = Field::new("FSINV", 11, 1);
/// CLKCTRL.SCKSEL\[12\]
pub const SCKSEL: Field = Field::new("SCKSEL", 12, 1);
/// CLKCTRL.MCKSEL\[16\]
pub const MCKSEL: Field = Field::new("MCKSEL", 16, 1);
/// CLKCTRL.MCKEN\[18\]
pub const MCKEN: Field = Field::new("MCKEN", 18, 1);
/// CLKCTRL.MCKDIV\[23:19\]
pub const MCKDIV: Field = Field::new("MCKDIV", 19, 5);
/// CLKCTRL.MCKOUTDIV\[28:24\]
pub const MCKOUTDIV: Field = Field::new("MCKOUTDIV", 24, 5);
/// CLKCTRL.FSOUTINV\[29\]
pub const FSOUTINV: Field = Field::new("FSOUTINV", 29, 1);
/// CLKCTRL.SCKOUTINV\[30\]
pub const SCKOUTINV: Field = Field::new("SCKOUTINV", 30, 1);
/// CLKCTRL.MCKOUTINV\[31\]
pub const MCKOUTINV: Field = Field::new("MCKOUTINV", 31, 1);

/// Every CLKCTRL field [`ClockUnitConfig::to_bits`] writes.
pub const CLKCTRL_FIELDS: &[Field] = &[
    SLOTSIZE, NBSLOTS, FSWIDTH, BITDELAY, FSSEL, FSINV, SCKSEL, MCKSEL, MCKEN, MCKDIV,
    MCKOUTDIV, FSOUTINV, SCKOUTINV, MCKOUTINV,
];

/// Slot width on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotSize {
    /// 8-bit slots.
    Bits8 = 0,
    /// 16-bit slots.
    Bits16 = 1,
    /// 24-bit slots.
    Bits24 = 2,
    /// 32-bit slots.
    Bits32 = 3,
}

impl SlotSize {
    /// Slot width in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits24 => 24,
            Self::Bits32 => 32,
        }
    }

    const fn from_field(v: u32) -> Self {
        match v & 0b11 {
            0 => Self::Bits8,
            1 => Self::Bits16,
            2 => Self::Bits24,
            _ => Self::Bits32,
        }
    }
}

/// Frame sync pulse width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameSyncWidth {
    /// FS high for one slot (I2S word select).
    Slot = 0,
    /// FS high for half a frame.
    Half = 1,
    /// FS high for one bit.
    Bit = 2,
    /// FS high while a burst is in progress.
    Burst = 3,
}

impl FrameSyncWidth {
    const fn from_field(v: u32) -> Self {
        match v & 0b11 {
            0 => Self::Slot,
            1 => Self::Half,
            2 => Self::Bit,
            _ => Self::Burst,
        }
    }
}

/// Data delay relative to the frame sync edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitDelay {
    /// Left-justified: data starts on the FS edge.
    LeftJustified = 0,
    /// I2S: one bit of delay after FS.
    I2s = 1,
}

/// Where the frame sync comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameSyncSource {
    /// Divided from the serial clock (master).
    SerialClockDivided = 0,
    /// FSn pin input (slave).
    Pin = 1,
}

/// Where the serial clock comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialClockSource {
    /// Divided master clock (master).
    MasterClockDivided = 0,
    /// SCKn pin input (slave).
    Pin = 1,
}

/// Where the master clock comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MasterClockSource {
    /// The generic clock routed to this clock unit.
    GenericClock = 0,
    /// MCKn pin input.
    Pin = 1,
}

/// Clock unit configuration (CLKCTRLn).
///
/// Write only while CTRLA.ENABLE and CTRLA.CKENn are clear: the register is
/// enable-protected and the write is ignored otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockUnitConfig {
    /// Slot width.
    pub slot_size: SlotSize,
    /// Slots per frame, 1..=8.
    pub slot_count: u8,
    /// Frame sync pulse width.
    pub frame_sync_width: FrameSyncWidth,
    /// Bit delay after frame sync.
    pub bit_delay: BitDelay,
    /// Frame sync source.
    pub frame_sync_source: FrameSyncSource,
    /// Invert the frame sync input.
    pub frame_sync_invert: bool,
    /// Serial clock source.
    pub serial_clock_source: SerialClockSource,
    /// Master clock source.
    pub master_clock_source: MasterClockSource,
    /// Drive the MCKn output pin.
    pub master_clock_enable: bool,
    /// Serial clock = master clock / (div + 1); 0..=31.
    pub master_clock_div: u8,
    /// MCKn pin = master clock / (div + 1); 0..=31.
    pub master_clock_out_div: u8,
    /// Invert the FSn output.
    pub frame_sync_out_invert: bool,
    /// Invert the SCKn output.
    pub serial_clock_out_invert: bool,
    /// Invert the MCKn output.
    pub master_clock_out_invert: bool,
}

impl ClockUnitConfig {
    /// PCM5102 master: 2 × 32-bit slots, I2S bit delay, GCLK / 4 serial clock.
    ///
    /// Packs to `(3 << 19) | (1 << 18) | (1 << 7) | (1 << 2) | 3`.
    pub const PCM5102: Self = Self {
        slot_size: SlotSize::Bits32,
        slot_count: 2,
        frame_sync_width: FrameSyncWidth::Slot,
        bit_delay: BitDelay::I2s,
        frame_sync_source: FrameSyncSource::SerialClockDivided,
        frame_sync_invert: false,
        serial_clock_source: SerialClockSource::MasterClockDivided,
        master_clock_source: MasterClockSource::GenericClock,
        master_clock_enable: true,
        master_clock_div: 3,
        master_clock_out_div: 0,
        frame_sync_out_invert: false,
        serial_clock_out_invert: false,
        master_clock_out_invert: false,
    };

    /// Pack into the CLKCTRLn word.
    #[must_use]
    pub const fn to_bits(&self) -> u32 {
        SLOTSIZE.insert(self.slot_size as u32)
            | NBSLOTS.insert(self.slot_count.saturating_sub(1) as u32)
            | FSWIDTH.insert(self.frame_sync_width as u32)
            | BITDELAY.insert(self.bit_delay as u32)
            | FSSEL.insert(self.frame_sync_source as u32)
            | FSINV.insert(self.frame_sync_invert as u32)
            | SCKSEL.insert(self.serial_clock_source as u32)
            | MCKSEL.insert(self.master_clock_source as u32)
            | MCKEN.insert(self.master_clock_enable as u32)
            | MCKDIV.insert(self.master_clock_div as u32)
            | MCKOUTDIV.insert(self.master_clock_out_div as u32)
            | FSOUTINV.insert(self.frame_sync_out_invert as u32)
            | SCKOUTINV.insert(self.serial_clock_out_invert as u32)
            | MCKOUTINV.insert(self.master_clock_out_invert as u32)
    }

    /// Unpack a CLKCTRLn word (e.g. one captured by a register mock).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // fields are at most 5 bits wide
    pub const fn from_bits(word: u32) -> Self {
        Self {
            slot_size: SlotSize::from_field(SLOTSIZE.extract(word)),
            slot_count: (NBSLOTS.extract(word) as u8).wrapping_add(1),
            frame_sync_width: FrameSyncWidth::from_field(FSWIDTH.extract(word)),
            bit_delay: if BITDELAY.extract(word) == 0 {
                BitDelay::LeftJustified
            } else {
                BitDelay::I2s
            },
            frame_sync_source: if FSSEL.extract(word) == 0 {
                FrameSyncSource::SerialClockDivided
            } else {
                FrameSyncSource::Pin
            },
            frame_sync_invert: FSINV.extract(word) != 0,
            serial_clock_source: if SCKSEL.extract(word) == 0 {
                SerialClockSource::MasterClockDivided
            } else {
                SerialClockSource::Pin
            },
            master_clock_source: if MCKSEL.extract(word) == 0 {
                MasterClockSource::GenericClock
            } else {
                MasterClockSource::Pin
            },
            master_clock_enable: MCKEN.extract(word) != 0,
            master_clock_div: MCKDIV.extract(word) as u8,
            master_clock_out_div: MCKOUTDIV.extract(word) as u8,
            frame_sync_out_invert: FSOUTINV.extract(word) != 0,
            serial_clock_out_invert: SCKOUTINV.extract(word) != 0,
            master_clock_out_invert: MCKOUTINV.extract(word) != 0,
        }
    }

    /// Bits per frame (`slot_count × slot width`).
    #[must_use]
    pub const fn frame_bits(&self) -> u32 {
        (self.slot_count as u32).saturating_mul(self.slot_size.bits())
    }
}

// ── SERCTRLn ─────────────────────────────────────────────────────────────────

/// SERCTRL.SERMODE\[1:0\]
pub const SERMODE: Field = Field::new("SERMODE", 0, 2);
/// SERCTRL.TXDEFAULT\[3:2\]
pub const TXDEFAULT: Field = Field::new("TXDEFAULT", 2, 2);
/// SERCTRL.TXSAME\[4\]
pub const TXSAME: Field = Field::new("TXSAME", 4, 1);
/// SERCTRL.CLKSEL\[5\]
pub const CLKSEL: Field = Field::new("CLKSEL", 5, 1);
/// SERCTRL.SLOTADJ\[7\]
pub const SLOTADJ: Field = Field::new("SLOTADJ", 7, 1);
/// SERCTRL.DATASIZE\[10:8\]
pub const DATASIZE: Field = Field::new("DATASIZE", 8, 3);
/// SERCTRL.WORDADJ\[12\]
pub const WORDADJ: Field = Field::new("WORDADJ", 12, 1);
/// SERCTRL.EXTEND\[14:13\]
pub const EXTEND: Field = Field::new("EXTEND", 13, 2);
/// SERCTRL.BITREV\[15\]
pub const BITREV: Field = Field::new("BITREV", 15, 1);
/// SERCTRL.MONO\[24\]
pub const MONO: Field = Field::new("MONO", 24, 1);

/// Every SERCTRL field [`SerializerConfig::to_bits`] writes.
pub const SERCTRL_FIELDS: &[Field] = &[
    SERMODE, TXDEFAULT, TXSAME, CLKSEL, SLOTADJ, DATASIZE, WORDADJ, EXTEND, BITREV, MONO,
];

/// Serializer direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerializerMode {
    /// Receive.
    Rx = 0,
    /// Transmit.
    Tx = 1,
    /// PDM microphone receive.
    Pdm2 = 2,
}

/// Line level driven in slots with no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxDefault {
    /// Drive 0.
    Zero = 0,
    /// Drive 1.
    One = 1,
    /// High impedance.
    HighImpedance = 3,
}

/// What the transmitter sends when DATAn was not refilled in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxUnderrun {
    /// Send zero.
    Zero = 0,
    /// Repeat the last word.
    RepeatLast = 1,
}

/// Placement of the data word within its slot, or of the sample within the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Justify {
    /// Right-justified.
    Right = 0,
    /// Left-justified.
    Left = 1,
}

/// Sample width carried by the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataSize {
    /// 32 bits.
    Bits32 = 0,
    /// 24 bits.
    Bits24 = 1,
    /// 20 bits.
    Bits20 = 2,
    /// 18 bits.
    Bits18 = 3,
    /// 16 bits.
    Bits16 = 4,
    /// 16 bits, two per word.
    Bits16Compact = 5,
    /// 8 bits.
    Bits8 = 6,
    /// 8 bits, four per word.
    Bits8Compact = 7,
}

/// How unused bits of a received word are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Extend {
    /// Fill with zeros.
    Zero = 0,
    /// Fill with ones.
    One = 1,
    /// Sign-extend from the MSB.
    Msb = 2,
    /// Extend the LSB.
    Lsb = 3,
}

/// Serializer configuration (SERCTRLn).
///
/// Write only after the owning clock unit runs; on this part SERCTRL writes
/// made before the clock tree settles are not reliably latched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerializerConfig {
    /// Direction.
    pub mode: SerializerMode,
    /// Idle line level.
    pub tx_default: TxDefault,
    /// Underrun behavior.
    pub tx_underrun: TxUnderrun,
    /// Clock unit that clocks this serializer.
    pub clock_unit: ClockUnit,
    /// Word placement in the slot.
    pub slot_adjust: Justify,
    /// Sample width.
    pub data_size: DataSize,
    /// Sample placement in the word.
    pub word_adjust: Justify,
    /// Fill of unused received bits.
    pub extend: Extend,
    /// LSB first when `true`.
    pub bit_reverse: bool,
    /// Duplicate the left slot onto the right.
    pub mono: bool,
}

impl SerializerConfig {
    /// ADC capture on serializer 0: 24-bit left-justified receive.
    ///
    /// DATASIZE is 1 (24-bit), i.e. bit 8 of SERCTRL0. A bare `1 << 9` sets
    /// DATASIZE to 2, which is 20-bit and drops the four lowest ADC bits.
    pub const ADC_RX: Self = Self {
        mode: SerializerMode::Rx,
        tx_default: TxDefault::Zero,
        tx_underrun: TxUnderrun::Zero,
        clock_unit: ClockUnit::Unit0,
        slot_adjust: Justify::Left,
        data_size: DataSize::Bits24,
        word_adjust: Justify::Left,
        extend: Extend::Zero,
        bit_reverse: false,
        mono: false,
    };

    /// DAC output on serializer 1: full 32-bit words, repeat on underrun.
    ///
    /// Samples arrive pre-shifted into bits 31..8 (see [`crate::slot`]), so
    /// the serializer moves whole words.
    pub const DAC_TX: Self = Self {
        mode: SerializerMode::Tx,
        tx_default: TxDefault::Zero,
        tx_underrun: TxUnderrun::RepeatLast,
        clock_unit: ClockUnit::Unit0,
        slot_adjust: Justify::Right,
        data_size: DataSize::Bits32,
        word_adjust: Justify::Right,
        extend: Extend::Zero,
        bit_reverse: false,
        mono: false,
    };

    /// Pack into the SERCTRLn word.
    #[must_use]
    pub const fn to_bits(&self) -> u32 {
        SERMODE.insert(self.mode as u32)
            | TXDEFAULT.insert(self.tx_default as u32)
            | TXSAME.insert(self.tx_underrun as u32)
            | CLKSEL.insert(self.clock_unit.index() as u32)
            | SLOTADJ.insert(self.slot_adjust as u32)
            | DATASIZE.insert(self.data_size as u32)
            | WORDADJ.insert(self.word_adjust as u32)
            | EXTEND.insert(self.extend as u32)
            | BITREV.insert(self.bit_reverse as u32)
            | MONO.insert(self.mono as u32)
    }

    /// Unpack a SERCTRLn word.
    #[must_use]
    pub const fn from_bits(word: u32) -> Self {
        Self {
            mode: match SERMODE.extract(word) {
                0 => SerializerMode::Rx,
                1 => SerializerMode::Tx,
                _ => SerializerMode::Pdm2,
            },
            tx_default: match TXDEFAULT.extract(word) {
                0 => TxDefault::Zero,
                1 => TxDefault::One,
                _ => TxDefault::HighImpedance,
            },
            tx_underrun: if TXSAME.extract(word) == 0 {
                TxUnderrun::Zero
            } else {
                TxUnderrun::RepeatLast
            },
            clock_unit: if CLKSEL.extract(word) == 0 {
                ClockUnit::Unit0
            } else {
                ClockUnit::Unit1
            },
            slot_adjust: if SLOTADJ.extract(word) == 0 {
                Justify::Right
            } else {
                Justify::Left
            },
            data_size: match DATASIZE.extract(word) {
                0 => DataSize::Bits32,
                1 => DataSize::Bits24,
                2 => DataSize::Bits20,
                3 => DataSize::Bits18,
                4 => DataSize::Bits16,
                5 => DataSize::Bits16Compact,
                6 => DataSize::Bits8,
                _ => DataSize::Bits8Compact,
            },
            word_adjust: if WORDADJ.extract(word) == 0 {
                Justify::Right
            } else {
                Justify::Left
            },
            extend: match EXTEND.extract(word) {
                0 => Extend::Zero,
                1 => Extend::One,
                2 => Extend::Msb,
                _ => Extend::Lsb,
            },
            bit_reverse: BITREV.extract(word) != 0,
            mono: MONO.extract(word) != 0,
        }
    }
}
