use gr3d_registers::components::gr3d_regs;
use gr3d_registers::{lookup, CommandWord, OpcodeE, RegisterClassE, BANK_MAP};

/// Every bank map entry against the register address it was assigned.
#[test]
fn test_gr3d_regs_addresses() {
    let expected: [(RegisterClassE, u16, u16); 16] = [
        (RegisterClassE::VertexReset, 0x205, 0),
        (RegisterClassE::Vertex, 0x206, 4),
        (RegisterClassE::Linker, 0x300, 2),
        (RegisterClassE::FragmentReset, 0x500, 0),
        (RegisterClassE::FragmentConfig, 0x501, 1),
        (RegisterClassE::Pseq, 0x541, 1),
        (RegisterClassE::PseqToDwExec, 0x546, 1),
        (RegisterClassE::MfuSched, 0x601, 1),
        (RegisterClassE::Mfu, 0x604, 2),
        (RegisterClassE::Tex, 0x701, 1),
        (RegisterClassE::AluSched, 0x801, 1),
        (RegisterClassE::Alu, 0x804, 8),
        (RegisterClassE::AluComplement, 0x806, 1),
        (RegisterClassE::Dw, 0x901, 1),
        (RegisterClassE::AluBufferSize, 0xe20, 1),
        (RegisterClassE::LinkerTramConfig, 0xe21, 1),
    ];

    for (class, offset, words) in expected {
        let entry = class.bank();
        assert_eq!(entry.first, offset, "{class} first register");
        assert_eq!(entry.words_per_entry, words, "{class} words per entry");
        assert_eq!(lookup(offset).map(|e| e.class), Some(class));
    }
    assert_eq!(BANK_MAP.len(), expected.len());
}

#[test]
fn test_table_capacities() {
    assert_eq!(RegisterClassE::Pseq.bank().word_capacity(), 64);
    assert_eq!(RegisterClassE::Mfu.bank().word_capacity(), 64 * 2);
    assert_eq!(RegisterClassE::Alu.bank().word_capacity(), 64 * 8);
    assert_eq!(RegisterClassE::Vertex.bank().word_capacity(), 64 * 4);
    assert!(RegisterClassE::AluBufferSize.bank().is_scalar());
    assert!(!RegisterClassE::FragmentReset.bank().is_table());
}

#[test]
fn test_unmapped_offsets() {
    for offset in [0x000, 0x204, 0x207, 0x340, 0x540, 0x602, 0x805, 0xe22, 0xfff] {
        assert!(lookup(offset).is_none(), "0x{offset:03x} should be unmapped");
    }
}

#[test]
fn test_command_word_decode() {
    let word = CommandWord::from_raw(0x2804_0010);
    assert_eq!(word.opcode(), Ok(OpcodeE::Nonincr));
    assert_eq!(word.offset(), gr3d_regs::ALU_INSTRUCTION_DATA);
    assert_eq!(word.payload(), 16);
    assert_eq!(
        lookup(word.offset()).map(|e| e.class),
        Some(RegisterClassE::Alu)
    );
}
