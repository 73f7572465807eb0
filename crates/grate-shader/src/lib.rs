//! Tegra GR3D shader command streams.
//!
//! Encodes vertex, fragment and linker instruction tables into host1x
//! command word streams, decodes such streams back into tables, and links
//! shader symbols into a program.

pub mod disasm;
pub mod error;
pub mod instr;
pub mod program;
pub mod shader;
pub mod stage;
pub mod stream;
pub mod symbol;
pub mod table;

pub use error::ShaderError;
pub use program::Program;
pub use shader::Shader;
pub use stage::{
    FragmentConfig, FragmentProgram, FragmentTables, LinkerConfig, LinkerProgram, ShaderStage,
    VertexProgram,
};
