use gr3d_registers::RegisterClassE;

use crate::stage::ShaderStage;

/// Errors produced while encoding or decoding a shader command stream.
///
/// Every error is fatal to the call that produced it; no partial output is
/// returned alongside one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShaderError {
    /// An instruction table would reach its hardware capacity.
    #[error("over {limit} {class} instructions")]
    CapacityExceeded { class: RegisterClassE, limit: usize },

    /// Per-instruction fragment classes disagree on the instruction count.
    #[error("fragment shader instructions stream is malformed: {class} has {count} entries, PSEQ has {expected}")]
    Malformed {
        class: RegisterClassE,
        count: usize,
        expected: usize,
    },

    /// A command word's opcode field holds none of the defined forms.
    #[error("host1x command stream is invalid: word 0x{word:08x} at index {at}")]
    InvalidOpcode { at: usize, word: u32 },

    /// A stage was given no instructions.
    #[error("no {0} instructions generated")]
    EmptyProgram(ShaderStage),

    /// A configuration value used as a divisor is zero.
    #[error("{0} must not be zero")]
    DivideByZeroConfig(&'static str),

    /// A configuration value does not fit its register field or bank.
    #[error("{field} = {value} is out of range (max {max})")]
    ConfigOutOfRange {
        field: &'static str,
        value: i64,
        max: u32,
    },

    /// A command's payload runs past the end of the stream.
    #[error("command at word {at} needs {needed} payload words, only {remaining} remain")]
    Truncated {
        at: usize,
        needed: usize,
        remaining: usize,
    },

    /// A symbol table reached its fixed capacity.
    #[error("symbol table full ({limit} symbols)")]
    SymbolTableFull { limit: usize },
}
