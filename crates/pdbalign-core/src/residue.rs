//! Amino-acid lookup tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The 20 standard amino acids covered by the terminal-atom table.
pub const STANDARD_AMINO_ACIDS: [&str; 20] = [
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE", "LEU", "LYS", "MET",
    "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
];

/// Maps each standard amino acid to the side-chain atom farthest from the
/// alpha carbon. Glycine has no side chain and maps to the alpha carbon
/// itself.
static TERMINAL_ATOMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ALA", "CB"),
        ("ARG", "CZ"),
        ("ASN", "CG"),
        ("ASP", "CG"),
        ("CYS", "SG"),
        ("GLU", "CD"),
        ("GLN", "CD"),
        ("GLY", "CA"),
        ("HIS", "CE1"),
        ("ILE", "CD1"),
        ("LEU", "CG"),
        ("LYS", "NZ"),
        ("MET", "CE"),
        ("PHE", "CZ"),
        ("PRO", "CD"),
        ("SER", "OG"),
        ("THR", "OG1"),
        ("TRP", "CH2"),
        ("TYR", "OH"),
        ("VAL", "CB"),
    ])
});

/// Terminal side-chain atom for a 3-letter residue code, or `None` for a
/// code outside the 20 standard amino acids. Matching trims whitespace and
/// ignores case.
pub fn terminal_atom(residue_name: &str) -> Option<&'static str> {
    let upper = residue_name.trim().to_ascii_uppercase();
    TERMINAL_ATOMS.get(upper.as_str()).copied()
}
