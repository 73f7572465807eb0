//! Compiled shaders: an encoded stream plus the symbols it binds.

use grate_hal::PushBuffer;

use crate::disasm::{self, MnemonicFormatter};
use crate::error::ShaderError;
use crate::stage::{FragmentProgram, LinkerProgram, ShaderStage, VertexProgram};
use crate::stream::{encode_fragment, encode_linker, encode_vertex};
use crate::symbol::{Symbol, SymbolTable};

/// Vertex input attribute slots.
pub const VERTEX_ATTRIBUTE_SLOTS: usize = 16;
/// Vertex export slots.
pub const VERTEX_EXPORT_SLOTS: usize = 16;
/// Vertex constant slots (vec4 each).
pub const VERTEX_CONSTANT_SLOTS: usize = 256;
/// Fragment constant slots (scalar each).
pub const FRAGMENT_CONSTANT_SLOTS: usize = 32;

fn check_slot(field: &'static str, slot: u8, slots: usize) -> Result<(), ShaderError> {
    if usize::from(slot) >= slots {
        return Err(ShaderError::ConfigOutOfRange {
            field,
            value: i64::from(slot),
            max: (slots - 1) as u32,
        });
    }
    Ok(())
}

/// An encoded shader stream for one stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Shader {
    stage: ShaderStage,
    words: Vec<u32>,
    symbols: SymbolTable,
}

impl Shader {
    /// Encode a vertex program and collect its attribute, export and
    /// constant symbols in slot order.
    pub fn vertex(program: &VertexProgram) -> Result<Self, ShaderError> {
        let words = encode_vertex(&program.instructions)?;
        let mut symbols = SymbolTable::with_limit(
            VERTEX_ATTRIBUTE_SLOTS + VERTEX_EXPORT_SLOTS + VERTEX_CONSTANT_SLOTS,
        );
        for (&slot, name) in &program.attributes {
            check_slot("vertex attribute slot", slot, VERTEX_ATTRIBUTE_SLOTS)?;
            symbols.push(Symbol::attribute(name, i32::from(slot), true))?;
        }
        for (&slot, name) in &program.exports {
            check_slot("vertex export slot", slot, VERTEX_EXPORT_SLOTS)?;
            symbols.push(Symbol::attribute(name, i32::from(slot), false))?;
        }
        for (&slot, &vector) in &program.constants {
            symbols.push(Symbol::constant(i32::from(slot), vector))?;
        }
        log_symbols(ShaderStage::Vertex, &symbols);
        Ok(Self {
            stage: ShaderStage::Vertex,
            words,
            symbols,
        })
    }

    /// Encode a fragment program. Constants equal to zero are not bound.
    pub fn fragment(program: &FragmentProgram) -> Result<Self, ShaderError> {
        let words = encode_fragment(&program.tables)?;
        let mut symbols = SymbolTable::with_limit(FRAGMENT_CONSTANT_SLOTS);
        for (&slot, &value) in &program.constants {
            check_slot("fragment constant slot", slot, FRAGMENT_CONSTANT_SLOTS)?;
            if value == 0.0 {
                continue;
            }
            symbols.push(Symbol::constant(i32::from(slot), [value, 0.0, 0.0, 0.0]))?;
        }
        log_symbols(ShaderStage::Fragment, &symbols);
        Ok(Self {
            stage: ShaderStage::Fragment,
            words,
            symbols,
        })
    }

    pub fn linker(program: &LinkerProgram) -> Result<Self, ShaderError> {
        Ok(Self {
            stage: ShaderStage::Linker,
            words: encode_linker(program)?,
            symbols: SymbolTable::default(),
        })
    }

    /// Wrap an already encoded stream, e.g. one read back from a file.
    #[must_use]
    pub fn from_words(stage: ShaderStage, words: Vec<u32>) -> Self {
        Self {
            stage,
            words,
            symbols: SymbolTable::default(),
        }
    }

    /// Replace the symbol table, e.g. with symbols from a compiler front end.
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    #[must_use]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Push the whole stream to a command buffer.
    pub fn emit<P: PushBuffer>(&self, pb: &mut P) -> Result<(), P::Error> {
        log::trace!("emitting {} {} words", self.words.len(), self.stage);
        pb.push_all(&self.words)
    }

    pub fn disassemble(&self, fmt: &dyn MnemonicFormatter) -> Result<String, ShaderError> {
        disasm::disassemble(self.stage, &self.words, fmt)
    }
}

fn log_symbols(stage: ShaderStage, symbols: &SymbolTable) {
    for symbol in symbols {
        log::debug!(
            "{stage} symbol {:?} \"{}\" location {} input {} used {} vector {:?}",
            symbol.kind,
            symbol.name,
            symbol.location,
            symbol.input,
            symbol.used,
            symbol.vector
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instr::{PseqInstr, VpeInstr};
    use crate::stage::FragmentTables;
    use crate::symbol::SymbolKind;

    fn one_instruction_fragment() -> FragmentTables {
        FragmentTables {
            pseq: vec![PseqInstr::new(1)],
            mfu_sched: vec![Default::default()],
            tex: vec![Default::default()],
            alu_sched: vec![Default::default()],
            alu_complement: vec![Default::default()],
            dw: vec![Default::default()],
            ..FragmentTables::default()
        }
    }

    #[test]
    fn test_vertex_symbols_in_slot_order() {
        let mut program = VertexProgram {
            instructions: vec![VpeInstr::default()],
            ..VertexProgram::default()
        };
        program.attributes.insert(3, "normal".into());
        program.attributes.insert(0, "position".into());
        program.exports.insert(1, "color".into());
        program.constants.insert(7, [0.5, 1.0, 0.0, 1.0]);

        let shader = Shader::vertex(&program).unwrap();
        let names: Vec<&str> = shader.symbols().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["position", "normal", "color", "asm-constant"]);
        let color = shader.symbols().get("color").unwrap();
        assert!(!color.input);
        assert_eq!(color.location, 1);
        let constant = shader.symbols().get("asm-constant").unwrap();
        assert_eq!(constant.kind, SymbolKind::Constant);
        assert!(constant.input);
        assert!(constant.used);
        assert_eq!(constant.vector, [0.5, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_vertex_attribute_slot_out_of_range() {
        let mut program = VertexProgram {
            instructions: vec![VpeInstr::default()],
            ..VertexProgram::default()
        };
        program.attributes.insert(16, "extra".into());
        assert!(matches!(
            Shader::vertex(&program),
            Err(ShaderError::ConfigOutOfRange { max: 15, .. })
        ));
    }

    #[test]
    fn test_fragment_skips_zero_constants() {
        let mut program = FragmentProgram {
            tables: one_instruction_fragment(),
            ..FragmentProgram::default()
        };
        program.constants.insert(0, 0.0);
        program.constants.insert(5, 2.5);
        let shader = Shader::fragment(&program).unwrap();
        assert_eq!(shader.symbols().len(), 1);
        let symbol = shader.symbols().iter().next().unwrap();
        assert_eq!(symbol.location, 5);
        assert_eq!(symbol.vector[0], 2.5);
    }
}
