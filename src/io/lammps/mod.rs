//! Reader for the LAMMPS data file subset
//!
//! ```text
//! <title>
//! <N> atoms
//! <M> atom types
//! <xlo> <xhi> xlo xhi
//! <ylo> <yhi> ylo yhi
//! <zlo> <zhi> zlo zhi
//! <xy> <xz> <yz> xy xz yz
//!
//! Atoms [# atomic|molecular]
//!
//! <N lines: id [mol-id] type x y z>
//! ```
//!
//! Anything after the last atom line is ignored.

pub mod header;
pub mod record;
pub mod style;

use super::ParseOptions;
use super::error::Error;
use super::tokenizer::LineCursor;
use crate::model::simbox::{AtomColumns, SimulationBox};
use crate::model::style::AtomStyle;
use style::StyleDetector;

const PROGRESS_INTERVAL: usize = 100_000;

/// Builds a [`SimulationBox`] from the full text of a data file.
///
/// Any failure aborts the whole parse; no partially filled box is returned.
pub fn parse(text: &str, options: &ParseOptions) -> Result<SimulationBox, Error> {
    let mut cursor = LineCursor::new(text);

    let header = header::read(&mut cursor, options)?;

    let section = cursor.next_line(|| "the Atoms section header".to_string())?;
    let declaration = StyleDetector::new().detect(&section)?;
    let style = declaration.style();
    cursor.skip("the blank line after the Atoms section header")?;

    let num_atoms = header.num_atoms;
    if num_atoms > max_atom_lines(cursor.remaining_len(), style) {
        return Err(Error::end_of_input(
            cursor.consumed() + 1,
            format!("{num_atoms} atom lines"),
        ));
    }

    let mut columns = AtomColumns::with_len(num_atoms);
    for slot in 0..num_atoms {
        let line = cursor.next_line(|| format!("atom line {} of {num_atoms}", slot + 1))?;
        let atom = record::decode(style, line.text, line.number)?;
        columns.set(slot, &atom);

        if (slot + 1) % PROGRESS_INTERVAL == 0 {
            tracing::trace!(decoded = slot + 1, total = num_atoms, "decoding atom lines");
        }
    }

    tracing::debug!(num_atoms, style = %style, "parsed LAMMPS data file");

    Ok(SimulationBox::new(header, declaration, columns))
}

/// Upper bound on the atom lines `remaining` bytes can hold.
///
/// A line of `k` fields takes at least `2k - 1` bytes and lines are joined
/// by one newline, so `n` lines need at least `2kn - 1` bytes.
fn max_atom_lines(remaining: usize, style: AtomStyle) -> usize {
    remaining.saturating_add(1) / (2 * style.field_count())
}
