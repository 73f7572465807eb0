//! Linked vertex + fragment + linker programs.

use crate::error::ShaderError;
use crate::shader::{Shader, FRAGMENT_CONSTANT_SLOTS, VERTEX_ATTRIBUTE_SLOTS, VERTEX_CONSTANT_SLOTS};
use crate::symbol::{SymbolKind, ASM_CONSTANT_NAME};

/// Location value of an unbound symbol.
pub const UNBOUND_LOCATION: i32 = -1;

/// Named binding recorded at link time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub location: u32,
}

/// A vertex, fragment and linker shader bound together.
#[derive(Clone, Debug)]
pub struct Program {
    vs: Option<Shader>,
    fs: Option<Shader>,
    linker: Option<Shader>,
    attributes: Vec<Binding>,
    uniforms: Vec<Binding>,
    /// Bit `loc + 16` per vertex input, bit `loc` per vertex export.
    attributes_mask: u32,
    /// Vertex constant bank, four floats per slot.
    vs_constants: Vec<f32>,
    fs_constants: [f32; FRAGMENT_CONSTANT_SLOTS],
}

fn location(field: &'static str, location: i32, slots: usize) -> Result<usize, ShaderError> {
    usize::try_from(location)
        .ok()
        .filter(|&loc| loc < slots)
        .ok_or(ShaderError::ConfigOutOfRange {
            field,
            value: i64::from(location),
            max: (slots - 1) as u32,
        })
}

impl Program {
    #[must_use]
    pub fn new(vs: Option<Shader>, fs: Option<Shader>, linker: Option<Shader>) -> Self {
        Self {
            vs,
            fs,
            linker,
            attributes: Vec::new(),
            uniforms: Vec::new(),
            attributes_mask: 0,
            vs_constants: vec![0.0; VERTEX_CONSTANT_SLOTS * 4],
            fs_constants: [0.0; FRAGMENT_CONSTANT_SLOTS],
        }
    }

    /// Resolve every symbol of the vertex and fragment shaders.
    ///
    /// Returns `Ok(false)` without touching any state unless both shaders
    /// are present. Symbols at [`UNBOUND_LOCATION`] are skipped.
    pub fn link(&mut self) -> Result<bool, ShaderError> {
        let (Some(vs), Some(fs)) = (&self.vs, &self.fs) else {
            return Ok(false);
        };

        let mut attributes = Vec::new();
        let mut uniforms = Vec::new();
        let mut attributes_mask = 0u32;
        let mut vs_constants = vec![0.0; VERTEX_CONSTANT_SLOTS * 4];
        let mut fs_constants = [0.0; FRAGMENT_CONSTANT_SLOTS];

        for symbol in vs.symbols() {
            if symbol.location == UNBOUND_LOCATION {
                continue;
            }
            match symbol.kind {
                SymbolKind::Attribute => {
                    let loc = location(
                        "vertex attribute location",
                        symbol.location,
                        VERTEX_ATTRIBUTE_SLOTS,
                    )?;
                    if symbol.input {
                        attributes_mask |= 1 << (loc + 16);
                        attributes.push(Binding {
                            name: symbol.name.clone(),
                            location: loc as u32,
                        });
                    } else {
                        attributes_mask |= 1 << loc;
                    }
                }
                SymbolKind::Uniform => {
                    let loc = location(
                        "vertex uniform location",
                        symbol.location,
                        VERTEX_CONSTANT_SLOTS,
                    )?;
                    uniforms.push(Binding {
                        name: symbol.name.clone(),
                        location: loc as u32,
                    });
                }
                SymbolKind::Constant => {
                    let loc = location(
                        "vertex constant location",
                        symbol.location,
                        VERTEX_CONSTANT_SLOTS,
                    )?;
                    vs_constants[loc * 4..loc * 4 + 4].copy_from_slice(&symbol.vector);
                }
            }
            log::debug!(
                "linked vertex {:?} \"{}\" at {} input {} used {}",
                symbol.kind,
                symbol.name,
                symbol.location,
                symbol.input,
                symbol.used
            );
        }

        for symbol in fs.symbols() {
            if symbol.location == UNBOUND_LOCATION {
                continue;
            }
            // Fragment attributes and uniforms are not bound.
            if symbol.kind == SymbolKind::Constant && symbol.name == ASM_CONSTANT_NAME {
                let loc = location(
                    "fragment constant location",
                    symbol.location,
                    FRAGMENT_CONSTANT_SLOTS,
                )?;
                fs_constants[loc] = symbol.vector[0];
            }
            log::debug!(
                "fragment {:?} \"{}\" at {} input {} used {}",
                symbol.kind,
                symbol.name,
                symbol.location,
                symbol.input,
                symbol.used
            );
        }

        self.attributes = attributes;
        self.uniforms = uniforms;
        self.attributes_mask = attributes_mask;
        self.vs_constants = vs_constants;
        self.fs_constants = fs_constants;
        Ok(true)
    }

    #[must_use]
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.location)
    }

    #[must_use]
    pub fn uniform_location(&self, name: &str) -> Option<u32> {
        self.uniforms
            .iter()
            .find(|u| u.name == name)
            .map(|u| u.location)
    }

    #[must_use]
    pub fn attributes_mask(&self) -> u32 {
        self.attributes_mask
    }

    #[must_use]
    pub fn attributes(&self) -> &[Binding] {
        &self.attributes
    }

    #[must_use]
    pub fn uniforms(&self) -> &[Binding] {
        &self.uniforms
    }

    /// Vertex constant bank, `[x, y, z, w]` per slot.
    #[must_use]
    pub fn vs_constants(&self) -> &[f32] {
        &self.vs_constants
    }

    #[must_use]
    pub fn fs_constants(&self) -> &[f32; FRAGMENT_CONSTANT_SLOTS] {
        &self.fs_constants
    }

    #[must_use]
    pub fn vs(&self) -> Option<&Shader> {
        self.vs.as_ref()
    }

    #[must_use]
    pub fn fs(&self) -> Option<&Shader> {
        self.fs.as_ref()
    }

    #[must_use]
    pub fn linker(&self) -> Option<&Shader> {
        self.linker.as_ref()
    }
}
