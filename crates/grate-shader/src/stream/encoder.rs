//! Instruction tables to host1x command streams.
//!
//! Every encoder checks capacity and configuration first, then sizes its
//! output exactly once; the emitted length always equals the matching
//! `*_word_count` function.

use gr3d_registers::components::gr3d_regs::{
    self, alu_buffer_size::AluBufferSizeReg, pseq_dw_cfg::PseqDwCfgReg, tram_cfg::TramCfgReg,
};
use gr3d_registers::{CommandWord, RegisterClassE};

use crate::error::ShaderError;
use crate::instr::{PackedInstr, VpeInstr};
use crate::stage::{FragmentTables, LinkerProgram, ShaderStage};
use crate::stream::validate;
use crate::table::check_capacity;

/// Words in an encoded vertex stream of `n` instructions.
#[must_use]
pub const fn vertex_word_count(n: usize) -> usize {
    2 + 4 * n
}

/// Words in an encoded fragment stream of `n` fragment, `mfu` MFU and `alu`
/// ALU instructions.
#[must_use]
pub const fn fragment_word_count(n: usize, mfu: usize, alu: usize) -> usize {
    6 * n + 2 * mfu + 8 * alu + 15
}

/// Words in an encoded linker stream of `n` instructions.
#[must_use]
pub const fn linker_word_count(n: usize) -> usize {
    2 * n + 3
}

struct StreamWriter {
    words: Vec<u32>,
}

impl StreamWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
        }
    }

    fn command(&mut self, cmd: CommandWord) {
        self.words.push(cmd.to_raw());
    }

    /// NONINCR block carrying every record of `records` to the class port.
    fn table<T: PackedInstr>(&mut self, records: &[T]) {
        let count = records.len() * T::words();
        self.command(CommandWord::nonincr(T::CLASS.bank().first, count as u16));
        for record in records {
            self.words.extend(record.stream_words());
        }
    }

    fn scalar(&mut self, offset: u16, value: u32) {
        self.command(CommandWord::nonincr(offset, 1));
        self.words.push(value);
    }

    fn finish(self, expected: usize) -> Vec<u32> {
        debug_assert_eq!(self.words.len(), expected);
        self.words
    }
}

/// Encode a vertex program. The last instruction is flagged end-of-program.
pub fn encode_vertex(instructions: &[VpeInstr]) -> Result<Vec<u32>, ShaderError> {
    let n = instructions.len();
    if n == 0 {
        return Err(ShaderError::EmptyProgram(ShaderStage::Vertex));
    }
    check_capacity(RegisterClassE::Vertex, 0, n * VpeInstr::words())?;

    let mut program = instructions.to_vec();
    if let Some(last) = program.last_mut() {
        last.set_end_of_program(true);
    }

    let expected = vertex_word_count(n);
    let mut writer = StreamWriter::with_capacity(expected);
    writer.command(CommandWord::imm(gr3d_regs::VPE_INSTRUCTION_POINTER, 0));
    writer.table(&program);

    log::debug!("encoded {n} vertex instructions into {expected} words");
    Ok(writer.finish(expected))
}

/// Encode the fragment tables and scalar configuration.
pub fn encode_fragment(tables: &FragmentTables) -> Result<Vec<u32>, ShaderError> {
    let n = tables.len();
    if n == 0 {
        return Err(ShaderError::EmptyProgram(ShaderStage::Fragment));
    }
    validate::uniform_count(&[
        (RegisterClassE::Pseq, n),
        (RegisterClassE::MfuSched, tables.mfu_sched.len()),
        (RegisterClassE::Tex, tables.tex.len()),
        (RegisterClassE::AluSched, tables.alu_sched.len()),
        (RegisterClassE::AluComplement, tables.alu_complement.len()),
        (RegisterClassE::Dw, tables.dw.len()),
    ])?;
    check_capacity(RegisterClassE::Pseq, 0, n)?;
    check_capacity(RegisterClassE::Mfu, 0, tables.mfu.len() * 2)?;
    check_capacity(RegisterClassE::Alu, 0, tables.alu.len() * 8)?;
    tables.config.validate()?;

    let expected = fragment_word_count(n, tables.mfu.len(), tables.alu.len());
    let mut writer = StreamWriter::with_capacity(expected);
    writer.table(&tables.pseq);
    writer.command(CommandWord::imm(gr3d_regs::FP_RESET, 0));
    writer.table(&tables.mfu_sched);
    writer.table(&tables.mfu);
    writer.table(&tables.tex);
    writer.table(&tables.alu_sched);
    writer.table(&tables.alu);
    writer.table(&tables.alu_complement);
    writer.table(&tables.dw);

    let alu_buffer_size = AluBufferSizeReg::for_buffer_size(tables.config.alu_buffer_size);
    let mut pseq_dw_cfg = PseqDwCfgReg::default();
    pseq_dw_cfg.set_exec_nb(tables.config.pseq_to_dw_exec_nb as u8);
    writer.scalar(gr3d_regs::ALU_BUFFER_SIZE, alu_buffer_size.to_raw());
    writer.scalar(gr3d_regs::FP_CONFIG, gr3d_regs::FRAGMENT_FIXED_CONFIG);
    writer.scalar(gr3d_regs::PSEQ_DW_CFG, pseq_dw_cfg.to_raw());

    log::debug!(
        "encoded {n} fragment instructions ({} MFU, {} ALU) into {expected} words",
        tables.mfu.len(),
        tables.alu.len()
    );
    Ok(writer.finish(expected))
}

/// Encode a linker program as one INCR block over the linker window.
pub fn encode_linker(program: &LinkerProgram) -> Result<Vec<u32>, ShaderError> {
    let n = program.instructions.len();
    if n == 0 {
        return Err(ShaderError::EmptyProgram(ShaderStage::Linker));
    }
    check_capacity(RegisterClassE::Linker, 0, n * 2)?;
    program.config.validate()?;

    let expected = linker_word_count(n);
    let mut writer = StreamWriter::with_capacity(expected);
    writer.command(CommandWord::incr(
        gr3d_regs::LINKER_INSTRUCTION_FIRST,
        (n * 2) as u16,
    ));
    for instr in &program.instructions {
        writer.words.extend(instr.stream_words());
    }
    let tram_cfg = TramCfgReg::for_rows(program.config.tram_rows_used);
    writer.scalar(gr3d_regs::LINKER_TRAM_CFG, tram_cfg.to_raw());

    log::debug!("encoded {n} linker instructions into {expected} words");
    Ok(writer.finish(expected))
}
