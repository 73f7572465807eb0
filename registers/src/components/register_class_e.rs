//! Field Enum: REGISTER_CLASS

/// What a GR3D register (or register window) receives when written.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterClassE {
    /// Vertex program upload pointer reset (IMM)
    VertexReset = 0,
    /// Vertex program instruction port, 4 words per VLIW instruction
    Vertex = 1,
    /// Linker instruction window, 2 words per instruction
    Linker = 2,
    /// Fragment pipeline reset marker (IMM)
    FragmentReset = 3,
    /// Fixed fragment configuration word
    FragmentConfig = 4,
    /// PSEQ instruction port
    Pseq = 5,
    /// PSEQ to DW execution count (scalar, bits [12:6])
    PseqToDwExec = 6,
    /// MFU schedule port
    MfuSched = 7,
    /// MFU instruction port, 2 words per instruction
    Mfu = 8,
    /// TEX instruction port
    Tex = 9,
    /// ALU schedule port
    AluSched = 10,
    /// ALU instruction port, 8 words per instruction
    Alu = 11,
    /// ALU complement port
    AluComplement = 12,
    /// DW instruction port
    Dw = 13,
    /// ALU buffer size (scalar, bits [1:0] + 1)
    AluBufferSize = 14,
    /// Linker TRAM row configuration (scalar)
    LinkerTramConfig = 15,
}

impl RegisterClassE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::VertexReset),
            1 => Ok(Self::Vertex),
            2 => Ok(Self::Linker),
            3 => Ok(Self::FragmentReset),
            4 => Ok(Self::FragmentConfig),
            5 => Ok(Self::Pseq),
            6 => Ok(Self::PseqToDwExec),
            7 => Ok(Self::MfuSched),
            8 => Ok(Self::Mfu),
            9 => Ok(Self::Tex),
            10 => Ok(Self::AluSched),
            11 => Ok(Self::Alu),
            12 => Ok(Self::AluComplement),
            13 => Ok(Self::Dw),
            14 => Ok(Self::AluBufferSize),
            15 => Ok(Self::LinkerTramConfig),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// The bank map entry describing this class.
    #[must_use]
    pub fn bank(&self) -> &'static crate::components::gr3d_regs::BankEntry {
        &crate::components::gr3d_regs::BANK_MAP[*self as usize]
    }

    /// Short name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::VertexReset => "VPE-RESET",
            Self::Vertex => "VPE",
            Self::Linker => "LINKER",
            Self::FragmentReset => "FP-RESET",
            Self::FragmentConfig => "FP-CONFIG",
            Self::Pseq => "PSEQ",
            Self::PseqToDwExec => "PSEQ-DW-EXEC",
            Self::MfuSched => "MFU-SCHED",
            Self::Mfu => "MFU",
            Self::Tex => "TEX",
            Self::AluSched => "ALU-SCHED",
            Self::Alu => "ALU",
            Self::AluComplement => "ALU-COMPLEMENT",
            Self::Dw => "DW",
            Self::AluBufferSize => "ALU-BUFFER-SIZE",
            Self::LinkerTramConfig => "LINKER-TRAM",
        }
    }
}

impl core::fmt::Display for RegisterClassE {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
