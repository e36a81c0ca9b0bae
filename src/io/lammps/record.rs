use crate::io::error::Error;
use crate::io::tokenizer::Tokenizer;
use crate::model::record::AtomRecord;
use crate::model::style::AtomStyle;

const ATOMIC_RECORD: &str = "atomic atom record";
const MOLECULAR_RECORD: &str = "molecular atom record";

/// Decodes one atom line according to `style`.
pub fn decode(style: AtomStyle, text: &str, line: usize) -> Result<AtomRecord, Error> {
    match style {
        AtomStyle::Atomic => decode_atomic(text, line),
        AtomStyle::Molecular => decode_molecular(text, line),
    }
}

/// `id type x y z`; trailing tokens (image flags, comments) are ignored.
pub fn decode_atomic(text: &str, line: usize) -> Result<AtomRecord, Error> {
    let expected = AtomStyle::Atomic.field_count();
    let mut tokens = Tokenizer::new(text, line);

    let id = tokens.require("atom id", ATOMIC_RECORD, expected)?;
    let atom_type = tokens.require("atom type", ATOMIC_RECORD, expected)?;
    let position = read_position(&mut tokens, ATOMIC_RECORD, expected)?;

    Ok(AtomRecord::atomic(id, atom_type, position))
}

/// `id mol-id type x y z`; trailing tokens are ignored.
pub fn decode_molecular(text: &str, line: usize) -> Result<AtomRecord, Error> {
    let expected = AtomStyle::Molecular.field_count();
    let mut tokens = Tokenizer::new(text, line);

    let id = tokens.require("atom id", MOLECULAR_RECORD, expected)?;
    let mol_id = tokens.require("molecule id", MOLECULAR_RECORD, expected)?;
    let atom_type = tokens.require("atom type", MOLECULAR_RECORD, expected)?;
    let position = read_position(&mut tokens, MOLECULAR_RECORD, expected)?;

    Ok(AtomRecord::molecular(id, mol_id, atom_type, position))
}

fn read_position(
    tokens: &mut Tokenizer<'_>,
    record: &'static str,
    expected: usize,
) -> Result<[f32; 3], Error> {
    Ok([
        tokens.require("x coordinate", record, expected)?,
        tokens.require("y coordinate", record, expected)?,
        tokens.require("z coordinate", record, expected)?,
    ])
}
