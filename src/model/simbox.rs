use std::collections::BTreeMap;

use super::cell::SimulationCell;
use super::header::Header;
use super::record::AtomRecord;
use super::style::{AtomStyle, StyleDeclaration};

/// Fixed-length per-atom columns, filled slot by slot during a parse.
#[derive(Debug)]
pub(crate) struct AtomColumns {
    ids: Vec<i32>,
    types: Vec<i32>,
    mol_ids: Vec<i32>,
    positions: Vec<f32>,
}

impl AtomColumns {
    /// Allocates every column for exactly `len` atoms.
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            ids: vec![0; len],
            types: vec![0; len],
            mol_ids: vec![0; len],
            positions: vec![0.0; 3 * len],
        }
    }

    pub(crate) fn set(&mut self, slot: usize, record: &AtomRecord) {
        self.ids[slot] = record.id;
        self.types[slot] = record.atom_type;
        if let Some(mol_id) = record.mol_id {
            self.mol_ids[slot] = mol_id;
        }
        self.positions[3 * slot..3 * slot + 3].copy_from_slice(&record.position);
    }
}

/// A parsed LAMMPS data file: header scalars plus columnar atom arrays.
///
/// Slot `i` of every column describes the `i`-th line of the `Atoms`
/// section in file order, whatever its `id` field says. The box is immutable
/// once built; the slices it hands out borrow from it and cannot outlive it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationBox {
    header: Header,
    style: StyleDeclaration,
    ids: Vec<i32>,
    types: Vec<i32>,
    mol_ids: Vec<i32>,
    positions: Vec<f32>,
}

impl SimulationBox {
    pub(crate) fn new(header: Header, style: StyleDeclaration, columns: AtomColumns) -> Self {
        debug_assert_eq!(columns.ids.len(), header.num_atoms);
        debug_assert_eq!(columns.positions.len(), 3 * header.num_atoms);
        Self {
            header,
            style,
            ids: columns.ids,
            types: columns.types,
            mol_ids: columns.mol_ids,
            positions: columns.positions,
        }
    }

    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    #[inline]
    pub fn num_atoms(&self) -> usize {
        self.header.num_atoms
    }

    #[inline]
    pub fn num_atom_types(&self) -> usize {
        self.header.num_atom_types
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.header.num_atoms == 0
    }

    pub fn xlo(&self) -> f32 {
        self.header.xlo
    }

    pub fn xhi(&self) -> f32 {
        self.header.xhi
    }

    pub fn ylo(&self) -> f32 {
        self.header.ylo
    }

    pub fn yhi(&self) -> f32 {
        self.header.yhi
    }

    pub fn zlo(&self) -> f32 {
        self.header.zlo
    }

    pub fn zhi(&self) -> f32 {
        self.header.zhi
    }

    pub fn xy(&self) -> f32 {
        self.header.xy
    }

    pub fn xz(&self) -> f32 {
        self.header.xz
    }

    pub fn yz(&self) -> f32 {
        self.header.yz
    }

    #[inline]
    pub fn atom_style(&self) -> AtomStyle {
        self.style.style()
    }

    /// Whether the style was named in the file or assumed.
    #[inline]
    pub fn style_declaration(&self) -> &StyleDeclaration {
        &self.style
    }

    /// Atom ids in file order, `num_atoms` long.
    #[inline]
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    /// Atom types in file order, `num_atoms` long.
    #[inline]
    pub fn types(&self) -> &[i32] {
        &self.types
    }

    /// Raw molecule id column, `num_atoms` long.
    ///
    /// Only meaningful for [`AtomStyle::Molecular`]; in the atomic style
    /// every entry is zero. Prefer [`molecule_ids`](Self::molecule_ids) unless
    /// a fixed layout is required.
    #[inline]
    pub fn mol_ids(&self) -> &[i32] {
        &self.mol_ids
    }

    /// Molecule ids, or `None` when the box was read in the atomic style.
    pub fn molecule_ids(&self) -> Option<&[i32]> {
        self.atom_style()
            .has_molecule_ids()
            .then_some(self.mol_ids.as_slice())
    }

    /// Interleaved `x, y, z` coordinates, `3 * num_atoms` long.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        self.atom(index).map(|atom| atom.position)
    }

    /// Reassembles the record for slot `index`.
    pub fn atom(&self, index: usize) -> Option<AtomRecord> {
        (index < self.num_atoms()).then(|| self.record_at(index))
    }

    pub fn atoms(&self) -> impl ExactSizeIterator<Item = AtomRecord> + '_ {
        (0..self.num_atoms()).map(move |i| self.record_at(i))
    }

    fn record_at(&self, index: usize) -> AtomRecord {
        let xyz = &self.positions[3 * index..3 * index + 3];
        AtomRecord {
            id: self.ids[index],
            mol_id: self
                .atom_style()
                .has_molecule_ids()
                .then(|| self.mol_ids[index]),
            atom_type: self.types[index],
            position: [xyz[0], xyz[1], xyz[2]],
        }
    }

    pub fn cell(&self) -> SimulationCell {
        SimulationCell::from_header(&self.header)
    }

    /// Number of atoms per type value, ordered by type.
    pub fn type_counts(&self) -> Vec<(i32, usize)> {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for &t in &self.types {
            *counts.entry(t).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_atom_box(style: StyleDeclaration) -> SimulationBox {
        let header = Header {
            num_atoms: 2,
            num_atom_types: 2,
            xhi: 10.0,
            yhi: 10.0,
            zhi: 10.0,
            ..Header::default()
        };
        let mut columns = AtomColumns::with_len(2);
        columns.set(0, &AtomRecord::molecular(7, 4, 2, [1.0, 2.0, 3.0]));
        columns.set(1, &AtomRecord::molecular(3, 4, 1, [4.0, 5.0, 6.0]));
        SimulationBox::new(header, style, columns)
    }

    #[test]
    fn columns_are_allocated_to_declared_length() {
        let columns = AtomColumns::with_len(4);
        assert_eq!(columns.ids.len(), 4);
        assert_eq!(columns.types.len(), 4);
        assert_eq!(columns.mol_ids.len(), 4);
        assert_eq!(columns.positions.len(), 12);
    }

    #[test]
    fn slots_follow_insertion_not_ids() {
        let sim = two_atom_box(StyleDeclaration::Explicit(AtomStyle::Molecular));

        assert_eq!(sim.ids(), &[7, 3]);
        assert_eq!(sim.types(), &[2, 1]);
        assert_eq!(sim.molecule_ids(), Some(&[4, 4][..]));
        assert_eq!(sim.positions(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(sim.position(1), Some([4.0, 5.0, 6.0]));
        assert_eq!(sim.position(2), None);
    }

    #[test]
    fn atomic_style_hides_molecule_ids() {
        let sim = two_atom_box(StyleDeclaration::Defaulted { token: None });

        assert_eq!(sim.atom_style(), AtomStyle::Atomic);
        assert_eq!(sim.molecule_ids(), None);
        assert_eq!(sim.mol_ids().len(), 2);
        assert_eq!(sim.atom(0).map(|a| a.mol_id), Some(None));
    }

    #[test]
    fn atoms_iterates_in_file_order() {
        let sim = two_atom_box(StyleDeclaration::Explicit(AtomStyle::Molecular));
        let atoms: Vec<_> = sim.atoms().collect();

        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0], AtomRecord::molecular(7, 4, 2, [1.0, 2.0, 3.0]));
        assert_eq!(atoms[1], AtomRecord::molecular(3, 4, 1, [4.0, 5.0, 6.0]));
    }

    #[test]
    fn type_counts_are_sorted_by_type() {
        let sim = two_atom_box(StyleDeclaration::Explicit(AtomStyle::Molecular));
        assert_eq!(sim.type_counts(), vec![(1, 1), (2, 1)]);
    }
}
