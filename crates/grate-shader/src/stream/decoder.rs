//! Host1x command streams back to instruction tables.
//!
//! One pass over the stream drives every register write through the bank
//! map. NONINCR blocks to a table port append to that table; INCR and MASK
//! writes land on individual registers, which only matters for scalar
//! configuration registers and the positional linker window.

use gr3d_registers::components::gr3d_regs::{
    alu_buffer_size::AluBufferSizeReg, pseq_dw_cfg::PseqDwCfgReg, tram_cfg::TramCfgReg,
};
use gr3d_registers::{lookup, OpcodeE, RegisterClassE};

use crate::error::ShaderError;
use crate::instr::{
    AluComplement, AluInstr, AluSched, DwInstr, MfuInstr, MfuSched, PseqInstr, TexInstr,
    VpeInstr,
};
use crate::stage::{FragmentConfig, FragmentTables, LinkerConfig, LinkerProgram, ShaderStage};
use crate::stream::reader::CommandReader;
use crate::stream::validate;
use crate::table::{InstructionTable, LinkerWindow};

/// Tables and scalars collected from one command stream.
#[derive(Clone, Debug, Default)]
pub struct DecodedStream {
    pub vertex: InstructionTable<VpeInstr>,
    pub pseq: InstructionTable<PseqInstr>,
    pub mfu_sched: InstructionTable<MfuSched>,
    pub mfu: InstructionTable<MfuInstr>,
    pub tex: InstructionTable<TexInstr>,
    pub alu_sched: InstructionTable<AluSched>,
    pub alu: InstructionTable<AluInstr>,
    pub alu_complement: InstructionTable<AluComplement>,
    pub dw: InstructionTable<DwInstr>,
    pub linker: LinkerWindow,
    /// Defaults to 1/1 when the stream never writes the registers.
    pub fragment_config: FragmentConfig,
    pub linker_config: LinkerConfig,
}

impl DecodedStream {
    /// Fragment instruction count, if the per-instruction tables agree.
    pub fn fragment_instruction_count(&self) -> Result<usize, ShaderError> {
        validate::fragment_instruction_count(
            self.pseq.len(),
            self.mfu_sched.len(),
            self.tex.len(),
            self.alu_sched.len(),
            self.dw.len(),
        )
    }

    /// Validated fragment tables.
    pub fn fragment_tables(&self) -> Result<FragmentTables, ShaderError> {
        self.fragment_instruction_count()?;
        Ok(FragmentTables {
            pseq: self.pseq.as_slice().to_vec(),
            mfu_sched: self.mfu_sched.as_slice().to_vec(),
            mfu: self.mfu.as_slice().to_vec(),
            tex: self.tex.as_slice().to_vec(),
            alu_sched: self.alu_sched.as_slice().to_vec(),
            alu: self.alu.as_slice().to_vec(),
            alu_complement: self.alu_complement.as_slice().to_vec(),
            dw: self.dw.as_slice().to_vec(),
            config: self.fragment_config,
        })
    }
}

/// Single-pass command stream decoder.
#[derive(Debug, Default)]
pub struct CommandStreamDecoder {
    stage: Option<ShaderStage>,
    out: DecodedStream,
}

impl CommandStreamDecoder {
    /// Decoder collecting every stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder that ignores writes belonging to other stages.
    #[must_use]
    pub fn for_stage(stage: ShaderStage) -> Self {
        Self {
            stage: Some(stage),
            out: DecodedStream::default(),
        }
    }

    pub fn decode(mut self, words: &[u32]) -> Result<DecodedStream, ShaderError> {
        for cmd in CommandReader::new(words) {
            let cmd = cmd?;
            log::trace!(
                "{:>5}: {} 0x{:03x} payload=0x{:04x}",
                cmd.at,
                cmd.opcode.name(),
                cmd.word.offset(),
                cmd.word.payload()
            );
            match cmd.opcode {
                OpcodeE::Nonincr => self.write_port(cmd.word.offset(), cmd.payload)?,
                OpcodeE::Incr | OpcodeE::Mask => {
                    for (reg, &value) in cmd.targets().zip(cmd.payload) {
                        self.write_register(reg, value)?;
                    }
                }
                OpcodeE::Setcl | OpcodeE::Imm | OpcodeE::Extend => {}
            }
        }
        Ok(self.out)
    }

    fn collects(&self, class: RegisterClassE) -> bool {
        self.stage.is_none_or(|stage| stage.owns(class))
    }

    /// NONINCR: every payload word goes to the same register.
    fn write_port(&mut self, offset: u16, payload: &[u32]) -> Result<(), ShaderError> {
        let Some(bank) = lookup(offset) else {
            return Ok(());
        };
        if !self.collects(bank.class) {
            return Ok(());
        }
        let out = &mut self.out;
        match bank.class {
            RegisterClassE::Vertex => out.vertex.extend_words(payload),
            RegisterClassE::Pseq => out.pseq.extend_words(payload),
            RegisterClassE::MfuSched => out.mfu_sched.extend_words(payload),
            RegisterClassE::Mfu => out.mfu.extend_words(payload),
            RegisterClassE::Tex => out.tex.extend_words(payload),
            RegisterClassE::AluSched => out.alu_sched.extend_words(payload),
            RegisterClassE::Alu => out.alu.extend_words(payload),
            RegisterClassE::AluComplement => out.alu_complement.extend_words(payload),
            RegisterClassE::Dw => out.dw.extend_words(payload),
            RegisterClassE::Linker => {
                log::trace!("ignoring NONINCR to linker register 0x{offset:03x}");
                Ok(())
            }
            _ => {
                for &value in payload {
                    self.write_register(u32::from(offset), value)?;
                }
                Ok(())
            }
        }
    }

    /// A single register write. Table ports written this way are ignored.
    fn write_register(&mut self, reg: u32, value: u32) -> Result<(), ShaderError> {
        let Some(bank) = u16::try_from(reg).ok().and_then(lookup) else {
            return Ok(());
        };
        if !self.collects(bank.class) {
            return Ok(());
        }
        match bank.class {
            RegisterClassE::AluBufferSize => {
                self.out.fragment_config.alu_buffer_size =
                    AluBufferSizeReg::from_raw(value).buffer_size();
            }
            RegisterClassE::PseqToDwExec => {
                self.out.fragment_config.pseq_to_dw_exec_nb =
                    u32::from(PseqDwCfgReg::from_raw(value).exec_nb());
            }
            RegisterClassE::LinkerTramConfig => {
                self.out.linker_config.tram_rows_used =
                    u32::from(TramCfgReg::from_raw(value).rows());
            }
            RegisterClassE::Linker => {
                let w = (reg - u32::from(bank.first)) as usize;
                self.out.linker.write(w, value)?;
            }
            class => log::trace!("ignoring single write 0x{value:08x} to {class}"),
        }
        Ok(())
    }
}

/// Decode a vertex stream into its instructions.
pub fn decode_vertex(words: &[u32]) -> Result<Vec<VpeInstr>, ShaderError> {
    let stream = CommandStreamDecoder::for_stage(ShaderStage::Vertex).decode(words)?;
    log::debug!("decoded {} vertex instructions", stream.vertex.len());
    Ok(stream.vertex.as_slice().to_vec())
}

/// Decode a fragment stream, validating that the per-instruction tables agree.
pub fn decode_fragment(words: &[u32]) -> Result<FragmentTables, ShaderError> {
    let stream = CommandStreamDecoder::for_stage(ShaderStage::Fragment).decode(words)?;
    let tables = stream.fragment_tables()?;
    log::debug!(
        "decoded {} fragment instructions ({} MFU, {} ALU)",
        tables.len(),
        tables.mfu.len(),
        tables.alu.len()
    );
    Ok(tables)
}

/// Decode a linker stream. `tram_rows_used` stays zero if never written.
pub fn decode_linker(words: &[u32]) -> Result<LinkerProgram, ShaderError> {
    let stream = CommandStreamDecoder::for_stage(ShaderStage::Linker).decode(words)?;
    log::debug!("decoded {} linker instructions", stream.linker.as_slice().len());
    Ok(LinkerProgram {
        instructions: stream.linker.as_slice().to_vec(),
        config: stream.linker_config,
    })
}
