//! Register map component definitions

pub mod command_word;
pub mod gr3d_regs;
pub mod opcode_e;
pub mod register_class_e;
