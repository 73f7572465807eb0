//! Instruction records for every GR3D unit.
//!
//! Records are plain data. Multi-word records keep their parts in hardware
//! order (`parts[0]` holds bits `[31:0]`); the order in which those parts
//! travel in a command stream is fixed per class by
//! [`PackedInstr::STREAM_ORDER`].

use gr3d_registers::RegisterClassE;

/// An instruction record that is uploaded word by word to one register port.
pub trait PackedInstr: Copy + Default + PartialEq + core::fmt::Debug {
    /// Register class whose port receives the record.
    const CLASS: RegisterClassE;

    /// Stream position `k` (within one record) carries `parts()[STREAM_ORDER[k]]`.
    const STREAM_ORDER: &'static [usize];

    fn parts(&self) -> &[u32];
    fn parts_mut(&mut self) -> &mut [u32];

    /// 32-bit words per record.
    fn words() -> usize {
        Self::STREAM_ORDER.len()
    }

    /// Iterate the record's words in stream order.
    fn stream_words(&self) -> impl Iterator<Item = u32> + '_ {
        Self::STREAM_ORDER.iter().map(move |&p| self.parts()[p])
    }
}

macro_rules! single_word_instr {
    ($(#[$meta:meta])* $name:ident, $class:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            pub data: u32,
        }

        impl $name {
            #[must_use]
            pub const fn new(data: u32) -> Self {
                Self { data }
            }
        }

        impl PackedInstr for $name {
            const CLASS: RegisterClassE = $class;
            const STREAM_ORDER: &'static [usize] = &[0];

            fn parts(&self) -> &[u32] {
                core::slice::from_ref(&self.data)
            }

            fn parts_mut(&mut self) -> &mut [u32] {
                core::slice::from_mut(&mut self.data)
            }
        }
    };
}

single_word_instr!(
    /// Fragment program sequencer instruction.
    PseqInstr,
    RegisterClassE::Pseq
);
single_word_instr!(
    /// Texture unit instruction.
    TexInstr,
    RegisterClassE::Tex
);
single_word_instr!(
    /// Data write (render target output) instruction.
    DwInstr,
    RegisterClassE::Dw
);
single_word_instr!(
    /// Per-ALU-instruction complement word, correlated with the ALU table by index.
    AluComplement,
    RegisterClassE::AluComplement
);

/// Schedule word for the MFU and ALU tables.
///
/// `[1:0]` instruction count, `[7:2]` start address in the unit's table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstrSched {
    pub data: u32,
}

impl InstrSched {
    pub const INSTRUCTIONS_NB_OFFSET: u32 = 0;
    pub const INSTRUCTIONS_NB_MASK: u32 = 0x3;
    pub const ADDRESS_OFFSET: u32 = 2;
    pub const ADDRESS_MASK: u32 = 0x3F;

    #[must_use]
    pub const fn new(data: u32) -> Self {
        Self { data }
    }

    #[must_use]
    pub const fn from_fields(address: u32, instructions_nb: u32) -> Self {
        Self {
            data: ((address & Self::ADDRESS_MASK) << Self::ADDRESS_OFFSET)
                | ((instructions_nb & Self::INSTRUCTIONS_NB_MASK) << Self::INSTRUCTIONS_NB_OFFSET),
        }
    }

    #[must_use]
    pub const fn instructions_nb(&self) -> u32 {
        (self.data >> Self::INSTRUCTIONS_NB_OFFSET) & Self::INSTRUCTIONS_NB_MASK
    }

    #[must_use]
    pub const fn address(&self) -> usize {
        ((self.data >> Self::ADDRESS_OFFSET) & Self::ADDRESS_MASK) as usize
    }
}

/// MFU-SCHED and ALU-SCHED share the record layout but not the port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MfuSched(pub InstrSched);

/// See [`MfuSched`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluSched(pub InstrSched);

macro_rules! sched_instr {
    ($name:ident, $class:expr) => {
        impl PackedInstr for $name {
            const CLASS: RegisterClassE = $class;
            const STREAM_ORDER: &'static [usize] = &[0];

            fn parts(&self) -> &[u32] {
                core::slice::from_ref(&self.0.data)
            }

            fn parts_mut(&mut self) -> &mut [u32] {
                core::slice::from_mut(&mut self.0.data)
            }
        }

        impl core::ops::Deref for $name {
            type Target = InstrSched;

            fn deref(&self) -> &InstrSched {
                &self.0
            }
        }
    };
}

sched_instr!(MfuSched, RegisterClassE::MfuSched);
sched_instr!(AluSched, RegisterClassE::AluSched);

/// Multi-function unit instruction, two words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MfuInstr {
    pub parts: [u32; 2],
}

impl PackedInstr for MfuInstr {
    const CLASS: RegisterClassE = RegisterClassE::Mfu;
    const STREAM_ORDER: &'static [usize] = &[1, 0];

    fn parts(&self) -> &[u32] {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut [u32] {
        &mut self.parts
    }
}

/// ALU instruction, eight words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluInstr {
    pub parts: [u32; 8],
}

impl PackedInstr for AluInstr {
    const CLASS: RegisterClassE = RegisterClassE::Alu;
    const STREAM_ORDER: &'static [usize] = &[1, 0, 3, 2, 5, 4, 7, 6];

    fn parts(&self) -> &[u32] {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut [u32] {
        &mut self.parts
    }
}

/// 128-bit VLIW vertex processor instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VpeInstr {
    pub parts: [u32; 4],
}

impl VpeInstr {
    /// End-of-program flag, bit 0 of `parts[0]`.
    pub const END_OF_PROGRAM_MASK: u32 = 0x1;

    #[must_use]
    pub const fn from_u128(val: u128) -> Self {
        Self {
            parts: [val as u32, (val >> 32) as u32, (val >> 64) as u32, (val >> 96) as u32],
        }
    }

    #[must_use]
    pub const fn to_u128(&self) -> u128 {
        (self.parts[0] as u128)
            | ((self.parts[1] as u128) << 32)
            | ((self.parts[2] as u128) << 64)
            | ((self.parts[3] as u128) << 96)
    }

    #[must_use]
    pub const fn end_of_program(&self) -> bool {
        self.parts[0] & Self::END_OF_PROGRAM_MASK != 0
    }

    pub fn set_end_of_program(&mut self, val: bool) {
        if val {
            self.parts[0] |= Self::END_OF_PROGRAM_MASK;
        } else {
            self.parts[0] &= !Self::END_OF_PROGRAM_MASK;
        }
    }
}

impl PackedInstr for VpeInstr {
    const CLASS: RegisterClassE = RegisterClassE::Vertex;
    const STREAM_ORDER: &'static [usize] = &[3, 2, 1, 0];

    fn parts(&self) -> &[u32] {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut [u32] {
        &mut self.parts
    }
}

/// Linker instruction: one `(first, latter)` register pair in the linker window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkInstr {
    pub parts: [u32; 2],
}

impl LinkInstr {
    #[must_use]
    pub const fn new(first: u32, latter: u32) -> Self {
        Self {
            parts: [first, latter],
        }
    }

    #[must_use]
    pub const fn first(&self) -> u32 {
        self.parts[0]
    }

    #[must_use]
    pub const fn latter(&self) -> u32 {
        self.parts[1]
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.parts == [0, 0]
    }
}

impl PackedInstr for LinkInstr {
    const CLASS: RegisterClassE = RegisterClassE::Linker;
    const STREAM_ORDER: &'static [usize] = &[0, 1];

    fn parts(&self) -> &[u32] {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut [u32] {
        &mut self.parts
    }
}
