//! Register: host1x command word

use crate::components::opcode_e::OpcodeE;

/// Host1x command word.
///
/// `[31:28]` opcode, `[27:16]` register offset, `[15:0]` count (INCR,
/// NONINCR), bit mask (MASK) or immediate value (IMM).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CommandWord(u32);

impl core::default::Default for CommandWord {
    fn default() -> Self {
        Self(0x0)
    }
}

impl CommandWord {
    pub const PAYLOAD_OFFSET: usize = 0;
    pub const PAYLOAD_WIDTH: usize = 16;
    pub const PAYLOAD_MASK: u32 = 0xFFFF;

    pub const OFFSET_OFFSET: usize = 16;
    pub const OFFSET_WIDTH: usize = 12;
    pub const OFFSET_MASK: u32 = 0xFFF;

    pub const OPCODE_OFFSET: usize = 28;
    pub const OPCODE_WIDTH: usize = 4;
    pub const OPCODE_MASK: u32 = 0xF;

    #[inline(always)]
    #[must_use]
    pub const fn from_raw(val: u32) -> Self {
        Self(val)
    }

    #[inline(always)]
    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    pub const fn new(opcode: OpcodeE, offset: u16, payload: u16) -> Self {
        Self(
            ((opcode.bits() as u32 & Self::OPCODE_MASK) << Self::OPCODE_OFFSET)
                | ((offset as u32 & Self::OFFSET_MASK) << Self::OFFSET_OFFSET)
                | ((payload as u32 & Self::PAYLOAD_MASK) << Self::PAYLOAD_OFFSET),
        )
    }

    /// SETCL: `class_id` goes in [15:6], `mask` in [5:0].
    #[must_use]
    pub const fn setcl(offset: u16, class_id: u16, mask: u16) -> Self {
        Self::new(OpcodeE::Setcl, offset, (class_id << 6) | (mask & 0x3F))
    }

    /// INCR: `count` payload words to `offset`, `offset + 1`, ...
    #[must_use]
    pub const fn incr(offset: u16, count: u16) -> Self {
        Self::new(OpcodeE::Incr, offset, count)
    }

    /// NONINCR: `count` payload words all to `offset`.
    #[must_use]
    pub const fn nonincr(offset: u16, count: u16) -> Self {
        Self::new(OpcodeE::Nonincr, offset, count)
    }

    /// MASK: one payload word to `offset + b` for every set bit `b` of `mask`.
    #[must_use]
    pub const fn mask(offset: u16, mask: u16) -> Self {
        Self::new(OpcodeE::Mask, offset, mask)
    }

    /// IMM: write `value` to `offset` without payload.
    #[must_use]
    pub const fn imm(offset: u16, value: u16) -> Self {
        Self::new(OpcodeE::Imm, offset, value)
    }

    /// EXTEND: no payload.
    #[must_use]
    pub const fn extend(subop: u16, value: u16) -> Self {
        Self::new(OpcodeE::Extend, subop, value)
    }

    /// OPCODE, undecoded.
    #[inline(always)]
    #[must_use]
    pub const fn opcode_bits(&self) -> u8 {
        ((self.0 >> Self::OPCODE_OFFSET) & Self::OPCODE_MASK) as u8
    }

    /// OPCODE
    ///
    /// # Errors
    /// Returns an error if the opcode field holds none of the defined forms.
    #[inline(always)]
    pub const fn opcode(&self) -> Result<OpcodeE, crate::encode::UnknownVariant<u8>> {
        OpcodeE::from_bits(self.opcode_bits())
    }

    /// OFFSET
    #[inline(always)]
    #[must_use]
    pub const fn offset(&self) -> u16 {
        ((self.0 >> Self::OFFSET_OFFSET) & Self::OFFSET_MASK) as u16
    }

    /// COUNT / MASK / IMMEDIATE, depending on the opcode.
    #[inline(always)]
    #[must_use]
    pub const fn payload(&self) -> u16 {
        ((self.0 >> Self::PAYLOAD_OFFSET) & Self::PAYLOAD_MASK) as u16
    }

    /// Number of payload words following this command.
    ///
    /// # Errors
    /// Returns an error if the opcode field holds none of the defined forms.
    pub const fn payload_len(&self) -> Result<usize, crate::encode::UnknownVariant<u8>> {
        match self.opcode() {
            Ok(OpcodeE::Incr | OpcodeE::Nonincr) => Ok(self.payload() as usize),
            Ok(OpcodeE::Mask) => Ok(self.payload().count_ones() as usize),
            Ok(OpcodeE::Setcl | OpcodeE::Imm | OpcodeE::Extend) => Ok(0),
            Err(e) => Err(e),
        }
    }
}

impl From<u32> for CommandWord {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<CommandWord> for u32 {
    fn from(val: CommandWord) -> Self {
        val.0
    }
}

impl core::fmt::Debug for CommandWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommandWord")
            .field("opcode", &self.opcode_bits())
            .field("offset", &self.offset())
            .field("payload", &self.payload())
            .finish()
    }
}
