use gr3d_registers::lookup;
use grate_shader::stream::CommandReader;

use crate::error::DisasmError;

/// One line per command: word index, opcode, offset, payload field, the
/// register class the offset maps to, and the payload length.
pub fn dump_commands(words: &[u32]) -> Result<String, DisasmError> {
    let mut out = String::new();
    for cmd in CommandReader::new(words) {
        let cmd = cmd?;
        let offset = cmd.word.offset();
        let class = lookup(offset).map_or("-", |bank| bank.class.name());
        out.push_str(&format!(
            "{:5}: {:<7} 0x{:03x} 0x{:04x} {:<14} [{} words]\n",
            cmd.at,
            cmd.opcode.name(),
            offset,
            cmd.word.payload(),
            class,
            cmd.payload.len()
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_lines() {
        let text = dump_commands(&[0x1300_0002, 0xAAAA, 0xBBBB, 0x2e21_0001, 0x0410]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("    0: INCR    0x300 0x0002 LINKER"));
        assert!(lines[0].ends_with("[2 words]"));
        assert!(lines[1].starts_with("    3: NONINCR 0xe21 0x0001"));
    }

    #[test]
    fn test_dump_unmapped_offset() {
        let text = dump_commands(&[0x4123_0000]).unwrap();
        assert!(text.contains(" - "));
    }
}
