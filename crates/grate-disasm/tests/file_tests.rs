//! End-to-end tests over stream files on disk.

use std::fs;

use grate_disasm::{disassemble_file, dump_file, load_words, DisasmError, InputFormat};
use grate_shader::instr::VpeInstr;
use grate_shader::stream::encode_vertex;
use grate_shader::{ShaderError, ShaderStage};

const LINKER_WORDS: [u32; 5] = [0x1300_0002, 0xAAAA, 0xBBBB, 0x2e21_0001, 0x0410];

fn le_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[test]
fn binary_linker_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linker.bin");
    fs::write(&path, le_bytes(&LINKER_WORDS)).unwrap();

    assert_eq!(load_words(&path, InputFormat::Binary).unwrap(), LINKER_WORDS);
    let text = disassemble_file(&path, InputFormat::Binary, ShaderStage::Linker).unwrap();
    assert_eq!(text, "\nLINK: 0000aaaa 0000bbbb");
}

#[test]
fn hex_vertex_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vertex.hex");
    let words = encode_vertex(&[VpeInstr::from_u128(0x1234 << 96)]).unwrap();
    let text: Vec<String> = words.iter().map(|w| format!("0x{w:08x}")).collect();
    fs::write(&path, format!("# one instruction\n{}\n", text.join(",\n"))).unwrap();

    let listing = disassemble_file(&path, InputFormat::Hex, ShaderStage::Vertex).unwrap();
    assert_eq!(listing, "\n\nVPE: 00001234 00000000 00000000 00000001 (end)");
}

#[test]
fn partial_word_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.bin");
    fs::write(&path, [0u8; 6]).unwrap();

    let err = load_words(&path, InputFormat::Binary).unwrap_err();
    assert!(matches!(err, DisasmError::PartialWord { len: 6, .. }));
}

#[test]
fn stream_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.bin");
    fs::write(&path, le_bytes(&[0x2541_0003, 1])).unwrap();

    let err = disassemble_file(&path, InputFormat::Binary, ShaderStage::Fragment).unwrap_err();
    assert!(matches!(
        err,
        DisasmError::Shader(ShaderError::Truncated { at: 0, needed: 3, remaining: 1 })
    ));
}

#[test]
fn dump_lists_each_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linker.bin");
    fs::write(&path, le_bytes(&LINKER_WORDS)).unwrap();

    let text = dump_file(&path, InputFormat::Binary).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("INCR"));
    assert!(text.contains("NONINCR"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_words(&dir.path().join("absent.bin"), InputFormat::Hex).unwrap_err();
    assert!(matches!(err, DisasmError::Io(_)));
}
