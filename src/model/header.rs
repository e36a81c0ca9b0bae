/// Scalar fields from the header of a LAMMPS data file.
///
/// Tilt factors are zero for orthogonal boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Header {
    pub num_atoms: usize,
    pub num_atom_types: usize,
    pub xlo: f32,
    pub xhi: f32,
    pub ylo: f32,
    pub yhi: f32,
    pub zlo: f32,
    pub zhi: f32,
    pub xy: f32,
    pub xz: f32,
    pub yz: f32,
}

impl Header {
    #[inline]
    pub fn is_triclinic(&self) -> bool {
        self.xy != 0.0 || self.xz != 0.0 || self.yz != 0.0
    }
}
