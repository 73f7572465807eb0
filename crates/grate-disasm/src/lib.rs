/// Error types for stream loading and disassembly.
pub mod error;

/// Stream file readers (binary and hex text).
pub mod input;

/// Command-by-command stream listing.
pub mod dump;

pub use dump::dump_commands;
pub use error::DisasmError;
pub use input::{load_words, parse_hex_words, words_from_le_bytes, InputFormat};

use std::path::Path;

use grate_shader::disasm::{disassemble, RawFormatter};
use grate_shader::ShaderStage;

/// Load `input` and disassemble it as a stream of `stage`.
pub fn disassemble_file(
    input: &Path,
    format: InputFormat,
    stage: ShaderStage,
) -> Result<String, DisasmError> {
    let words = load_words(input, format)?;
    let text = disassemble(stage, &words, &RawFormatter)?;
    Ok(text)
}

/// Load `input` and list its commands.
pub fn dump_file(input: &Path, format: InputFormat) -> Result<String, DisasmError> {
    let words = load_words(input, format)?;
    dump_commands(&words)
}
