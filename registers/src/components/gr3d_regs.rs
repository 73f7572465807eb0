//! Addrmap: GR3D shader register banks
//!
//! Offsets are engine register addresses as carried in the OFFSET field of a
//! host1x command word, not byte addresses.

/// Named types defined within this component's body
pub mod named_types {
    pub mod alu_buffer_size_reg;
    pub mod pseq_dw_cfg_reg;
    pub mod tram_cfg_reg;
}

pub use crate::components::gr3d_regs::named_types::alu_buffer_size_reg as alu_buffer_size;
pub use crate::components::gr3d_regs::named_types::pseq_dw_cfg_reg as pseq_dw_cfg;
pub use crate::components::gr3d_regs::named_types::tram_cfg_reg as tram_cfg;

use crate::components::register_class_e::RegisterClassE;

// --- Vertex processor (0x205-0x206) ---

/// Vertex program upload pointer.
pub const VPE_INSTRUCTION_POINTER: u16 = 0x205;
/// Vertex program instruction data port.
pub const VPE_INSTRUCTION_DATA: u16 = 0x206;

// --- Linker (0x300-0x33f) ---

/// First register of the linker instruction window.
pub const LINKER_INSTRUCTION_FIRST: u16 = 0x300;
/// Last register of the linker instruction window.
pub const LINKER_INSTRUCTION_LAST: u16 = 0x33f;

// --- Fragment pipeline (0x500-0x901) ---

/// Fragment pipeline reset marker.
pub const FP_RESET: u16 = 0x500;
/// Fixed fragment pipeline configuration.
pub const FP_CONFIG: u16 = 0x501;
pub const PSEQ_INSTRUCTION_DATA: u16 = 0x541;
pub const PSEQ_DW_CFG: u16 = 0x546;
pub const MFU_SCHED_DATA: u16 = 0x601;
pub const MFU_INSTRUCTION_DATA: u16 = 0x604;
pub const TEX_INSTRUCTION_DATA: u16 = 0x701;
pub const ALU_SCHED_DATA: u16 = 0x801;
pub const ALU_INSTRUCTION_DATA: u16 = 0x804;
pub const ALU_COMPLEMENT_DATA: u16 = 0x806;
pub const DW_INSTRUCTION_DATA: u16 = 0x901;

// --- Global configuration (0xe20-0xe21) ---

pub const ALU_BUFFER_SIZE: u16 = 0xe20;
pub const LINKER_TRAM_CFG: u16 = 0xe21;

// --- Hardware constants ---
//
// These values come from traces of the vendor driver. They are a register
// contract with the hardware and are not derived here.

/// Per-class instruction capacity of every shader instruction table.
pub const INSTRUCTION_CAPACITY: u16 = 64;
/// Dividend of the ALU buffer ratio field.
pub const ALU_BUFFER_DIVIDEND: u32 = 0x12B;
/// Value written to [`FP_CONFIG`] by every fragment program.
pub const FRAGMENT_FIXED_CONFIG: u32 = 0x0032_12CF;
/// Dividend of the linker TRAM row stride field.
pub const TRAM_ROW_DIVIDEND: u32 = 64;

/// One entry of the register bank map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankEntry {
    /// Class of data written through these registers.
    pub class: RegisterClassE,
    /// First register offset (inclusive).
    pub first: u16,
    /// Last register offset (inclusive).
    pub last: u16,
    /// Payload words forming one table entry; 0 for markers.
    pub words_per_entry: u16,
    /// Table capacity in entries; 0 for markers and scalars.
    pub capacity: u16,
}

impl BankEntry {
    const fn marker(class: RegisterClassE, offset: u16) -> Self {
        Self {
            class,
            first: offset,
            last: offset,
            words_per_entry: 0,
            capacity: 0,
        }
    }

    const fn scalar(class: RegisterClassE, offset: u16) -> Self {
        Self {
            class,
            first: offset,
            last: offset,
            words_per_entry: 1,
            capacity: 0,
        }
    }

    const fn table(class: RegisterClassE, offset: u16, words_per_entry: u16) -> Self {
        Self {
            class,
            first: offset,
            last: offset,
            words_per_entry,
            capacity: INSTRUCTION_CAPACITY,
        }
    }

    /// True if `offset` falls inside this entry's register range.
    #[inline(always)]
    #[must_use]
    pub const fn contains(&self, offset: u16) -> bool {
        offset >= self.first && offset <= self.last
    }

    /// True for single-register configuration values.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.capacity == 0 && self.words_per_entry == 1
    }

    /// True for instruction tables.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        self.capacity != 0
    }

    /// Table capacity expressed in payload words.
    #[must_use]
    pub const fn word_capacity(&self) -> usize {
        self.capacity as usize * self.words_per_entry as usize
    }
}

/// The register bank map, indexed by [`RegisterClassE::bits`].
pub static BANK_MAP: [BankEntry; 16] = [
    BankEntry::marker(RegisterClassE::VertexReset, VPE_INSTRUCTION_POINTER),
    BankEntry::table(RegisterClassE::Vertex, VPE_INSTRUCTION_DATA, 4),
    // The linker window is addressed positionally: 64 registers, 32 pairs.
    BankEntry {
        class: RegisterClassE::Linker,
        first: LINKER_INSTRUCTION_FIRST,
        last: LINKER_INSTRUCTION_LAST,
        words_per_entry: 2,
        capacity: (LINKER_INSTRUCTION_LAST - LINKER_INSTRUCTION_FIRST + 1) / 2,
    },
    BankEntry::marker(RegisterClassE::FragmentReset, FP_RESET),
    BankEntry::scalar(RegisterClassE::FragmentConfig, FP_CONFIG),
    BankEntry::table(RegisterClassE::Pseq, PSEQ_INSTRUCTION_DATA, 1),
    BankEntry::scalar(RegisterClassE::PseqToDwExec, PSEQ_DW_CFG),
    BankEntry::table(RegisterClassE::MfuSched, MFU_SCHED_DATA, 1),
    BankEntry::table(RegisterClassE::Mfu, MFU_INSTRUCTION_DATA, 2),
    BankEntry::table(RegisterClassE::Tex, TEX_INSTRUCTION_DATA, 1),
    BankEntry::table(RegisterClassE::AluSched, ALU_SCHED_DATA, 1),
    BankEntry::table(RegisterClassE::Alu, ALU_INSTRUCTION_DATA, 8),
    BankEntry::table(RegisterClassE::AluComplement, ALU_COMPLEMENT_DATA, 1),
    BankEntry::table(RegisterClassE::Dw, DW_INSTRUCTION_DATA, 1),
    BankEntry::scalar(RegisterClassE::AluBufferSize, ALU_BUFFER_SIZE),
    BankEntry::scalar(RegisterClassE::LinkerTramConfig, LINKER_TRAM_CFG),
];

/// Find the bank map entry covering a register offset.
#[must_use]
pub fn lookup(offset: u16) -> Option<&'static BankEntry> {
    BANK_MAP.iter().find(|entry| entry.contains(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_indexed_by_class() {
        for (i, entry) in BANK_MAP.iter().enumerate() {
            assert_eq!(entry.class.bits() as usize, i);
            assert_eq!(entry.class.bank(), entry);
        }
    }

    #[test]
    fn test_ranges_do_not_overlap() {
        for (i, a) in BANK_MAP.iter().enumerate() {
            for b in BANK_MAP.iter().skip(i + 1) {
                assert!(a.last < b.first || b.last < a.first, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_linker_window() {
        let linker = RegisterClassE::Linker.bank();
        assert_eq!(linker.capacity, 32);
        assert_eq!(linker.word_capacity(), 64);
        assert_eq!(lookup(0x31f).map(|e| e.class), Some(RegisterClassE::Linker));
        assert_eq!(lookup(0x340), None);
    }
}
