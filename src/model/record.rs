/// One decoded line of an `Atoms` section.
///
/// `mol_id` is `Some` only for records decoded in the molecular style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomRecord {
    pub id: i32,
    pub mol_id: Option<i32>,
    pub atom_type: i32,
    pub position: [f32; 3],
}

impl AtomRecord {
    pub fn atomic(id: i32, atom_type: i32, position: [f32; 3]) -> Self {
        Self {
            id,
            mol_id: None,
            atom_type,
            position,
        }
    }

    pub fn molecular(id: i32, mol_id: i32, atom_type: i32, position: [f32; 3]) -> Self {
        Self {
            id,
            mol_id: Some(mol_id),
            atom_type,
            position,
        }
    }
}
