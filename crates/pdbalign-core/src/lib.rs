#![forbid(unsafe_code)]
//! Core primitives for reading and writing PDB coordinate files.
//! The record model keeps the raw fixed-column fields so that filtered
//! structures can be written back out in the layout downstream
//! structural-biology tools expect.

pub mod error;
pub mod pdb;
pub mod record;
pub mod residue;
pub mod structure;

pub use error::{ParseError, ParseErrorKind};
pub use pdb::{load_file, parse_reader, parse_str, to_pdb_string, write_file};
pub use record::{AtomRecord, Coord};
pub use residue::{terminal_atom, STANDARD_AMINO_ACIDS};
pub use structure::Structure;
