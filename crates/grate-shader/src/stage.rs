//! Shader stages and the program records each stage is built from.

use std::collections::BTreeMap;

use gr3d_registers::components::gr3d_regs::{alu_buffer_size::AluBufferSizeReg, TRAM_ROW_DIVIDEND};
use gr3d_registers::RegisterClassE;

use crate::error::ShaderError;
use crate::instr::{
    AluComplement, AluInstr, AluSched, DwInstr, LinkInstr, MfuInstr, MfuSched, PseqInstr,
    TexInstr, VpeInstr,
};

/// Pipeline stage a command stream programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Linker,
}

impl ShaderStage {
    /// Whether writes to `class` belong to this stage.
    #[must_use]
    pub const fn owns(self, class: RegisterClassE) -> bool {
        use RegisterClassE as C;
        match self {
            Self::Vertex => matches!(class, C::VertexReset | C::Vertex),
            Self::Linker => matches!(class, C::Linker | C::LinkerTramConfig),
            Self::Fragment => !matches!(
                class,
                C::VertexReset | C::Vertex | C::Linker | C::LinkerTramConfig
            ),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
            Self::Linker => "linker",
        }
    }
}

impl core::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fragment scalar configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FragmentConfig {
    /// ALU buffer size, 1..=4.
    pub alu_buffer_size: u32,
    /// PSEQ executions per DW, 0..=127.
    pub pseq_to_dw_exec_nb: u32,
}

impl FragmentConfig {
    pub const MAX_PSEQ_TO_DW_EXEC_NB: u32 = 0x7F;

    /// Reject values the hardware registers cannot hold.
    pub fn validate(&self) -> Result<(), ShaderError> {
        if self.alu_buffer_size == 0 {
            return Err(ShaderError::DivideByZeroConfig("alu_buffer_size"));
        }
        if self.alu_buffer_size > AluBufferSizeReg::MAX_BUFFER_SIZE {
            return Err(ShaderError::ConfigOutOfRange {
                field: "alu_buffer_size",
                value: i64::from(self.alu_buffer_size),
                max: AluBufferSizeReg::MAX_BUFFER_SIZE,
            });
        }
        if self.pseq_to_dw_exec_nb > Self::MAX_PSEQ_TO_DW_EXEC_NB {
            return Err(ShaderError::ConfigOutOfRange {
                field: "pseq_to_dw_exec_nb",
                value: i64::from(self.pseq_to_dw_exec_nb),
                max: Self::MAX_PSEQ_TO_DW_EXEC_NB,
            });
        }
        Ok(())
    }
}

impl Default for FragmentConfig {
    fn default() -> Self {
        Self {
            alu_buffer_size: 1,
            pseq_to_dw_exec_nb: 1,
        }
    }
}

/// Linker configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkerConfig {
    /// TRAM rows used, 1..=64. Zero means "not configured".
    pub tram_rows_used: u32,
}

impl LinkerConfig {
    pub fn validate(&self) -> Result<(), ShaderError> {
        if self.tram_rows_used == 0 {
            return Err(ShaderError::DivideByZeroConfig("tram_rows_used"));
        }
        if self.tram_rows_used > TRAM_ROW_DIVIDEND {
            return Err(ShaderError::ConfigOutOfRange {
                field: "tram_rows_used",
                value: i64::from(self.tram_rows_used),
                max: TRAM_ROW_DIVIDEND,
            });
        }
        Ok(())
    }
}

/// Every fragment instruction table plus the scalar configuration.
///
/// `pseq`, `mfu_sched`, `tex`, `alu_sched`, `alu_complement` and `dw` hold one
/// entry per fragment instruction. `mfu` and `alu` are addressed through
/// the schedule words.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentTables {
    pub pseq: Vec<PseqInstr>,
    pub mfu_sched: Vec<MfuSched>,
    pub mfu: Vec<MfuInstr>,
    pub tex: Vec<TexInstr>,
    pub alu_sched: Vec<AluSched>,
    pub alu: Vec<AluInstr>,
    pub alu_complement: Vec<AluComplement>,
    pub dw: Vec<DwInstr>,
    pub config: FragmentConfig,
}

impl FragmentTables {
    /// Fragment instruction count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pseq.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pseq.is_empty()
    }
}

/// Assembled vertex program: instructions plus its symbol slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexProgram {
    pub instructions: Vec<VpeInstr>,
    /// Input attribute slot (0..16) to name.
    pub attributes: BTreeMap<u8, String>,
    /// Output export slot (0..16) to name.
    pub exports: BTreeMap<u8, String>,
    /// Constant slot to vec4 value.
    pub constants: BTreeMap<u8, [f32; 4]>,
}

/// Assembled fragment program: tables plus scalar constants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentProgram {
    pub tables: FragmentTables,
    /// Constant slot (0..32) to value. Zero values are not bound.
    pub constants: BTreeMap<u8, f32>,
}

/// Assembled linker program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkerProgram {
    pub instructions: Vec<LinkInstr>,
    pub config: LinkerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ownership() {
        assert!(ShaderStage::Vertex.owns(RegisterClassE::Vertex));
        assert!(!ShaderStage::Vertex.owns(RegisterClassE::Pseq));
        assert!(ShaderStage::Fragment.owns(RegisterClassE::AluBufferSize));
        assert!(ShaderStage::Fragment.owns(RegisterClassE::PseqToDwExec));
        assert!(!ShaderStage::Fragment.owns(RegisterClassE::LinkerTramConfig));
        assert!(ShaderStage::Linker.owns(RegisterClassE::Linker));
    }

    #[test]
    fn test_fragment_config_defaults() {
        let config = FragmentConfig::default();
        assert_eq!(config.alu_buffer_size, 1);
        assert_eq!(config.pseq_to_dw_exec_nb, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fragment_config_bounds() {
        let zero = FragmentConfig {
            alu_buffer_size: 0,
            ..FragmentConfig::default()
        };
        assert_eq!(
            zero.validate(),
            Err(ShaderError::DivideByZeroConfig("alu_buffer_size"))
        );

        let large = FragmentConfig {
            alu_buffer_size: 5,
            ..FragmentConfig::default()
        };
        assert!(matches!(
            large.validate(),
            Err(ShaderError::ConfigOutOfRange { field: "alu_buffer_size", .. })
        ));

        let exec = FragmentConfig {
            pseq_to_dw_exec_nb: 128,
            ..FragmentConfig::default()
        };
        assert!(matches!(
            exec.validate(),
            Err(ShaderError::ConfigOutOfRange { field: "pseq_to_dw_exec_nb", .. })
        ));
    }

    #[test]
    fn test_linker_config_bounds() {
        assert_eq!(
            LinkerConfig::default().validate(),
            Err(ShaderError::DivideByZeroConfig("tram_rows_used"))
        );
        assert!(LinkerConfig { tram_rows_used: 64 }.validate().is_ok());
        assert!(LinkerConfig { tram_rows_used: 65 }.validate().is_err());
    }
}
