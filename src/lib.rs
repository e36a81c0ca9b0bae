//! A pure Rust reader for LAMMPS data files that decodes the header and the
//! `Atoms` section into flat, columnar arrays ready to hand to a renderer or
//! another runtime without per-atom copying.
//!
//! # Features
//!
//! - **Strict header reading** — Counts, box bounds and tilt factors are read
//!   by position and each line is checked for its keyword
//! - **Atom styles** — `atomic` (`id type x y z`) and `molecular`
//!   (`id mol-id type x y z`), with the fallback to `atomic` reported
//!   separately from an explicit declaration
//! - **Columnar output** — `ids`, `types`, `mol_ids` as `i32` and interleaved
//!   positions as `f32`, exposed as slices borrowed from the box
//! - **All-or-nothing parsing** — Any malformed line aborts the parse with a
//!   typed error naming the line
//!
//! # Quick Start
//!
//! ```
//! use lmpdata::{AtomStyle, ParseError, parse};
//!
//! let text = "\
//! LAMMPS data file
//! 2 atoms
//! 1 atom types
//! 0.0 10.0 xlo xhi
//! 0.0 10.0 ylo yhi
//! 0.0 10.0 zlo zhi
//! 0.0 0.0 0.0 xy xz yz
//!
//! Atoms # atomic
//!
//! 1 1 0.0 0.0 0.0
//! 2 1 1.5 0.0 0.0
//! ";
//!
//! let sim = parse(text)?;
//!
//! assert_eq!(sim.num_atoms(), 2);
//! assert_eq!(sim.atom_style(), AtomStyle::Atomic);
//! assert_eq!(sim.ids(), &[1, 2]);
//! assert_eq!(sim.types(), &[1, 1]);
//! assert_eq!(sim.positions(), &[0.0, 0.0, 0.0, 1.5, 0.0, 0.0]);
//! assert_eq!(sim.cell().a, [10.0, 0.0, 0.0]);
//! # Ok::<(), ParseError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Parsing entry points, options, tokenizer and error types
//! - [`model`] — Header, atom style, atom record, box and cell types
//!
//! # Data Types
//!
//! - [`SimulationBox`] — Parsed header scalars and columnar atom arrays
//! - [`Header`] — Atom and type counts, bounds, tilt factors
//! - [`AtomStyle`] — Atomic or molecular record layout
//! - [`StyleDeclaration`] — Whether the style was declared or assumed
//! - [`AtomRecord`] — A single decoded atom line
//! - [`SimulationCell`] — Edge vectors derived from bounds and tilts
//! - [`ParseOptions`] / [`TiltPolicy`] — Parser configuration
//! - [`ParseError`] — Everything that can abort a parse

mod model;

pub mod io;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use model::cell::SimulationCell;
pub use model::header::Header;
pub use model::record::AtomRecord;
pub use model::simbox::SimulationBox;
pub use model::style::{AtomStyle, ParseAtomStyleError, StyleDeclaration};

pub use io::{ParseOptions, TiltPolicy, parse, parse_with, read};

pub use io::error::Error as ParseError;
pub use io::error::ErrorKind;
