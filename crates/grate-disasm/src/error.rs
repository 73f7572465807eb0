use std::path::PathBuf;

use grate_shader::ShaderError;

/// Errors that can occur while loading or disassembling a stream file.
#[derive(Debug, thiserror::Error)]
pub enum DisasmError {
    /// I/O error reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A binary stream whose length is not a whole number of words.
    #[error("{path}: {len} bytes is not a multiple of 4")]
    PartialWord { path: PathBuf, len: usize },

    /// A token in a hex text stream is not a 32-bit hex number.
    #[error("line {line}: invalid word {token:?}")]
    HexParse { line: usize, token: String },

    /// The stream itself failed to decode.
    #[error(transparent)]
    Shader(#[from] ShaderError),
}
