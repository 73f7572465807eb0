//! Field Enum: OPCODE

/// Host1x command opcode, bits [31:28] of a command word.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpcodeE {
    /// Select the target class; no payload
    Setcl = 0,
    /// COUNT payload words to consecutive registers starting at OFFSET
    Incr = 1,
    /// COUNT payload words all to register OFFSET
    Nonincr = 2,
    /// One payload word per set bit of MASK, to OFFSET + bit
    Mask = 3,
    /// 16-bit immediate written to OFFSET; no payload
    Imm = 4,
    /// Extended operation; no payload
    Extend = 5,
}

impl OpcodeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Setcl),
            1 => Ok(Self::Incr),
            2 => Ok(Self::Nonincr),
            3 => Ok(Self::Mask),
            4 => Ok(Self::Imm),
            5 => Ok(Self::Extend),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Mnemonic used in stream dumps.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Setcl => "SETCL",
            Self::Incr => "INCR",
            Self::Nonincr => "NONINCR",
            Self::Mask => "MASK",
            Self::Imm => "IMM",
            Self::Extend => "EXTEND",
        }
    }
}
