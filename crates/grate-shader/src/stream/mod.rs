//! Host1x command stream encoding and decoding.

pub mod decoder;
pub mod encoder;
pub mod reader;
pub mod validate;

pub use decoder::{decode_fragment, decode_linker, decode_vertex, CommandStreamDecoder, DecodedStream};
pub use encoder::{
    encode_fragment, encode_linker, encode_vertex, fragment_word_count, linker_word_count,
    vertex_word_count,
};
pub use reader::{Command, CommandReader};
