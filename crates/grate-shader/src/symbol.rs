//! Shader symbols: attributes, uniforms and assembler constants.

use crate::error::ShaderError;

/// Name given to every constant the assembler emits.
pub const ASM_CONSTANT_NAME: &str = "asm-constant";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Attribute,
    Uniform,
    Constant,
}

/// One symbol bound by a shader.
#[derive(Clone, Debug, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Hardware slot; `-1` means unbound.
    pub location: i32,
    /// Value of a constant, unused otherwise.
    pub vector: [f32; 4],
    /// Attribute direction: vertex input if set, export otherwise.
    /// Constants are inputs.
    pub input: bool,
    /// Referenced by the program.
    pub used: bool,
}

impl Symbol {
    #[must_use]
    pub fn attribute(name: &str, location: i32, input: bool) -> Self {
        Self {
            name: name.to_owned(),
            kind: SymbolKind::Attribute,
            location,
            vector: [0.0; 4],
            input,
            used: true,
        }
    }

    #[must_use]
    pub fn constant(location: i32, vector: [f32; 4]) -> Self {
        Self {
            name: ASM_CONSTANT_NAME.to_owned(),
            kind: SymbolKind::Constant,
            location,
            vector,
            input: true,
            used: true,
        }
    }

    #[must_use]
    pub fn uniform(name: &str, location: i32) -> Self {
        Self {
            name: name.to_owned(),
            kind: SymbolKind::Uniform,
            location,
            vector: [0.0; 4],
            input: false,
            used: true,
        }
    }
}

/// Bounded symbol list, sized once when the shader is built.
///
/// The limit depends on the stage, so this is not a `heapless::Vec`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    limit: usize,
}

impl SymbolTable {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(limit),
            limit,
        }
    }

    pub fn push(&mut self, symbol: Symbol) -> Result<(), ShaderError> {
        if self.symbols.len() >= self.limit {
            return Err(ShaderError::SymbolTableFull { limit: self.limit });
        }
        self.symbols.push(symbol);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// First symbol with this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = core::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
