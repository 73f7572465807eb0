//! Program linking across vertex and fragment shader symbols.

use grate_shader::instr::{PseqInstr, VpeInstr};
use grate_shader::symbol::{Symbol, SymbolTable};
use grate_shader::{FragmentProgram, FragmentTables, Program, Shader, ShaderError, VertexProgram};

fn vertex_shader() -> Shader {
    let mut program = VertexProgram {
        instructions: vec![VpeInstr::default(); 2],
        ..VertexProgram::default()
    };
    program.attributes.insert(0, "position".into());
    program.attributes.insert(2, "texcoord".into());
    program.exports.insert(1, "color".into());
    program.constants.insert(3, [1.0, 2.0, 3.0, 4.0]);
    Shader::vertex(&program).unwrap()
}

fn fragment_shader() -> Shader {
    let mut program = FragmentProgram {
        tables: FragmentTables {
            pseq: vec![PseqInstr::new(0x11)],
            mfu_sched: vec![Default::default()],
            tex: vec![Default::default()],
            alu_sched: vec![Default::default()],
            alu_complement: vec![Default::default()],
            dw: vec![Default::default()],
            ..FragmentTables::default()
        },
        ..FragmentProgram::default()
    };
    program.constants.insert(4, 0.25);
    program.constants.insert(31, -1.5);
    Shader::fragment(&program).unwrap()
}

#[test]
fn link_requires_both_stages() {
    let mut program = Program::new(Some(vertex_shader()), None, None);
    assert_eq!(program.link(), Ok(false));
    assert_eq!(program.attributes_mask(), 0);
    assert!(program.attributes().is_empty());

    let mut program = Program::new(None, Some(fragment_shader()), None);
    assert_eq!(program.link(), Ok(false));
}

#[test]
fn link_binds_attributes_and_mask() {
    let mut program = Program::new(Some(vertex_shader()), Some(fragment_shader()), None);
    assert_eq!(program.link(), Ok(true));

    // Inputs at 0 and 2 set bits 16 and 18; the export at 1 sets bit 1.
    assert_eq!(program.attributes_mask(), (1 << 16) | (1 << 18) | (1 << 1));
    assert_eq!(program.attribute_location("position"), Some(0));
    assert_eq!(program.attribute_location("texcoord"), Some(2));
    // Exports only set their mask bit.
    assert_eq!(program.attribute_location("color"), None);
    assert_eq!(program.attribute_location("normal"), None);
}

#[test]
fn link_fills_constant_banks() {
    let mut program = Program::new(Some(vertex_shader()), Some(fragment_shader()), None);
    program.link().unwrap();

    assert_eq!(program.vs_constants().len(), 256 * 4);
    assert_eq!(&program.vs_constants()[12..16], &[1.0, 2.0, 3.0, 4.0]);
    assert!(program.vs_constants()[..12].iter().all(|&c| c == 0.0));
    assert_eq!(program.fs_constants()[4], 0.25);
    assert_eq!(program.fs_constants()[31], -1.5);
    assert_eq!(program.fs_constants()[0], 0.0);
}

#[test]
fn link_is_repeatable() {
    let mut program = Program::new(Some(vertex_shader()), Some(fragment_shader()), None);
    program.link().unwrap();
    program.link().unwrap();
    assert_eq!(program.attributes().len(), 2);
}

#[test]
fn link_records_uniforms_and_skips_unbound() {
    let mut symbols = SymbolTable::with_limit(4);
    symbols.push(Symbol::uniform("mvp", 8)).unwrap();
    symbols.push(Symbol::uniform("unused", -1)).unwrap();
    symbols.push(Symbol::attribute("position", 0, true)).unwrap();
    let vs = vertex_shader().with_symbols(symbols);

    let mut program = Program::new(Some(vs), Some(fragment_shader()), None);
    assert_eq!(program.link(), Ok(true));
    assert_eq!(program.uniform_location("mvp"), Some(8));
    assert_eq!(program.uniform_location("unused"), None);
    assert_eq!(program.attributes_mask(), 1 << 16);
}

#[test]
fn link_rejects_out_of_range_locations() {
    let mut symbols = SymbolTable::with_limit(1);
    symbols.push(Symbol::attribute("position", 16, true)).unwrap();
    let vs = vertex_shader().with_symbols(symbols);

    let mut program = Program::new(Some(vs), Some(fragment_shader()), None);
    assert!(matches!(
        program.link(),
        Err(ShaderError::ConfigOutOfRange { value: 16, max: 15, .. })
    ));
}

#[test]
fn link_does_not_bind_fragment_uniforms() {
    let mut symbols = SymbolTable::with_limit(3);
    symbols.push(Symbol::uniform("tint", 3)).unwrap();
    symbols.push(Symbol::attribute("varying", 2, true)).unwrap();
    symbols.push(Symbol::constant(7, [0.5, 0.0, 0.0, 0.0])).unwrap();
    let fs = fragment_shader().with_symbols(symbols);

    let mut program = Program::new(Some(vertex_shader()), Some(fs), None);
    assert_eq!(program.link(), Ok(true));
    assert_eq!(program.uniform_location("tint"), None);
    assert_eq!(program.attribute_location("varying"), None);
    assert_eq!(program.fs_constants()[7], 0.5);
    assert!(program.uniforms().is_empty());
}
