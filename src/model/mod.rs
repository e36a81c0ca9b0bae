//! In-memory representation of a parsed LAMMPS data file.
//!
//! - [`header`] – Atom and type counts, box bounds and tilt factors.
//! - [`style`] – Atom styles and how a file declared its style.
//! - [`record`] – A single decoded atom line.
//! - [`simbox`] – The columnar [`SimulationBox`](simbox::SimulationBox) built by a parse.
//! - [`cell`] – Edge vectors and geometry derived from the box bounds.

pub mod cell;
pub mod header;
pub mod record;
pub mod simbox;
pub mod style;
