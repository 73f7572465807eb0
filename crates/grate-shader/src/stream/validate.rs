//! Per-instruction table consistency.

use gr3d_registers::RegisterClassE;

use crate::error::ShaderError;

/// Check that every class in `counts` holds the same number of entries as
/// the first one, returning that number.
pub fn uniform_count(counts: &[(RegisterClassE, usize)]) -> Result<usize, ShaderError> {
    let Some(&(_, expected)) = counts.first() else {
        return Ok(0);
    };
    for &(class, count) in &counts[1..] {
        if count != expected {
            return Err(ShaderError::Malformed {
                class,
                count,
                expected,
            });
        }
    }
    Ok(expected)
}

/// Fragment instruction count implied by the five per-instruction classes.
pub fn fragment_instruction_count(
    pseq: usize,
    mfu_sched: usize,
    tex: usize,
    alu_sched: usize,
    dw: usize,
) -> Result<usize, ShaderError> {
    uniform_count(&[
        (RegisterClassE::Pseq, pseq),
        (RegisterClassE::MfuSched, mfu_sched),
        (RegisterClassE::Tex, tex),
        (RegisterClassE::AluSched, alu_sched),
        (RegisterClassE::Dw, dw),
    ])
}
