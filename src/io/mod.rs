use std::io::Read;

pub mod error;
pub mod lammps;
pub mod tokenizer;

use crate::model::simbox::SimulationBox;
use error::Error;

/// Handling of the `xy xz yz` tilt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiltPolicy {
    /// The line after `zlo zhi` must carry the tilt factors.
    #[default]
    Required,
    /// Orthogonal files may omit the tilt line; the tilts are then zero and
    /// the line after `zlo zhi` is taken as the header separator.
    Optional,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub tilt: TiltPolicy,
}

impl ParseOptions {
    pub fn tilt(mut self, tilt: TiltPolicy) -> Self {
        self.tilt = tilt;
        self
    }
}

/// Parses the full text of a LAMMPS data file with default options.
pub fn parse(text: &str) -> Result<SimulationBox, Error> {
    lammps::parse(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Result<SimulationBox, Error> {
    lammps::parse(text, options)
}

/// Reads the whole stream into memory and parses it.
pub fn read<R: Read>(mut reader: R, options: &ParseOptions) -> Result<SimulationBox, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    lammps::parse(&text, options)
}
