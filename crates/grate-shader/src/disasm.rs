//! Textual disassembly of decoded command streams.
//!
//! Turning a single instruction into mnemonics is left to a
//! [`MnemonicFormatter`]; this module only walks the decoded tables and lays
//! out the listing.

use crate::error::ShaderError;
use crate::instr::{AluInstr, DwInstr, LinkInstr, MfuInstr, PseqInstr, TexInstr, VpeInstr};
use crate::stage::ShaderStage;
use crate::stream::{decode_fragment, decode_linker, decode_vertex};

/// One fragment instruction with the MFU and ALU records its schedule
/// words select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FragmentBundle {
    pub pseq: PseqInstr,
    pub mfu: MfuInstr,
    pub mfu_nb: u32,
    pub tex: TexInstr,
    pub alu: AluInstr,
    pub alu_complement: u32,
    pub alu_nb: u32,
    pub dw: DwInstr,
}

/// Formats single instructions as text.
pub trait MnemonicFormatter {
    fn vertex(&self, instr: &VpeInstr) -> String;
    fn fragment(&self, bundle: &FragmentBundle) -> String;
    fn linker(&self, instr: &LinkInstr) -> String;
}

/// Formatter printing the raw words of each record in hex.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawFormatter;

impl MnemonicFormatter for RawFormatter {
    fn vertex(&self, instr: &VpeInstr) -> String {
        let [p0, p1, p2, p3] = instr.parts;
        let mut out = format!("VPE: {p3:08x} {p2:08x} {p1:08x} {p0:08x}");
        if instr.end_of_program() {
            out.push_str(" (end)");
        }
        out
    }

    fn fragment(&self, bundle: &FragmentBundle) -> String {
        let alu = bundle
            .alu
            .parts
            .iter()
            .map(|p| format!("{p:08x}"))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "PSEQ: {:08x}\nMFU[{}]: {:08x} {:08x}\nTEX: {:08x}\nALU[{}]: {} | {:08x}\nDW: {:08x}",
            bundle.pseq.data,
            bundle.mfu_nb,
            bundle.mfu.parts[0],
            bundle.mfu.parts[1],
            bundle.tex.data,
            bundle.alu_nb,
            alu,
            bundle.alu_complement,
            bundle.dw.data
        )
    }

    fn linker(&self, instr: &LinkInstr) -> String {
        format!("LINK: {:08x} {:08x}", instr.first(), instr.latter())
    }
}

/// Disassemble a vertex stream, one blank-line separated entry per instruction.
pub fn disassemble_vertex(
    words: &[u32],
    fmt: &dyn MnemonicFormatter,
) -> Result<String, ShaderError> {
    let mut out = String::new();
    for instr in decode_vertex(words)? {
        out.push_str("\n\n");
        out.push_str(&fmt.vertex(&instr));
    }
    Ok(out)
}

/// Disassemble a fragment stream: scalar header, then one bundle per
/// fragment instruction.
pub fn disassemble_fragment(
    words: &[u32],
    fmt: &dyn MnemonicFormatter,
) -> Result<String, ShaderError> {
    let tables = decode_fragment(words)?;
    let mut out = format!(
        "\nalu_buffer_size = {}\npseq_to_dw_exec_nb = {}",
        tables.config.alu_buffer_size, tables.config.pseq_to_dw_exec_nb
    );
    for i in 0..tables.len() {
        let mfu_sched = tables.mfu_sched[i];
        let alu_sched = tables.alu_sched[i];
        let bundle = FragmentBundle {
            pseq: tables.pseq[i],
            mfu: tables.mfu.get(mfu_sched.address()).copied().unwrap_or_default(),
            mfu_nb: mfu_sched.instructions_nb(),
            tex: tables.tex[i],
            alu: tables.alu.get(alu_sched.address()).copied().unwrap_or_default(),
            alu_complement: tables
                .alu_complement
                .get(alu_sched.address())
                .map_or(0, |c| c.data),
            alu_nb: alu_sched.instructions_nb(),
            dw: tables.dw[i],
        };
        out.push_str("\n\n");
        out.push_str(&fmt.fragment(&bundle));
    }
    Ok(out)
}

/// Disassemble a linker stream, one line per non-zero instruction.
pub fn disassemble_linker(
    words: &[u32],
    fmt: &dyn MnemonicFormatter,
) -> Result<String, ShaderError> {
    let mut out = String::new();
    for instr in decode_linker(words)?.instructions {
        if instr.is_zero() {
            continue;
        }
        out.push('\n');
        out.push_str(&fmt.linker(&instr));
    }
    Ok(out)
}

/// Disassemble `words` as a stream of the given stage.
pub fn disassemble(
    stage: ShaderStage,
    words: &[u32],
    fmt: &dyn MnemonicFormatter,
) -> Result<String, ShaderError> {
    match stage {
        ShaderStage::Vertex => disassemble_vertex(words, fmt),
        ShaderStage::Fragment => disassemble_fragment(words, fmt),
        ShaderStage::Linker => disassemble_linker(words, fmt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linker_listing_skips_zero_entries() {
        // Word 0 and words 4..6 written, entry 1 left zero.
        let words = [0x1300_0001, 0x11, 0x1304_0002, 0x22, 0x33];
        let text = disassemble_linker(&words, &RawFormatter).unwrap();
        assert_eq!(
            text,
            "\nLINK: 00000011 00000000\nLINK: 00000022 00000033"
        );
    }

    #[test]
    fn test_vertex_listing() {
        let words = [0x4205_0000, 0x2206_0004, 0x4, 0x3, 0x2, 0x1];
        let text = disassemble_vertex(&words, &RawFormatter).unwrap();
        assert_eq!(text, "\n\nVPE: 00000004 00000003 00000002 00000001 (end)");
    }

    #[test]
    fn test_fragment_header_defaults() {
        let text = disassemble_fragment(&[], &RawFormatter).unwrap();
        assert_eq!(text, "\nalu_buffer_size = 1\npseq_to_dw_exec_nb = 1");
    }
}
