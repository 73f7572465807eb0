//! GR3D register map and host1x command word layout.
//!
//! Both the shader stream encoder and the decoder consult the tables in
//! [`components::gr3d_regs`], so a register is only ever described once.
#![no_std]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::identity_op)]
#![allow(clippy::inline_always)]
#![allow(clippy::unnecessary_cast)]

pub mod components;
pub mod encode;

pub use crate::components::command_word::CommandWord;
pub use crate::components::gr3d_regs::{lookup, BankEntry, BANK_MAP};
pub use crate::components::opcode_e::OpcodeE;
pub use crate::components::register_class_e::RegisterClassE;
pub use crate::encode::UnknownVariant;
