//! Alpha-carbon midpoint normalization.
//!
//! Each residue is reduced to a single representative coordinate by moving
//! its alpha carbon to the midpoint between the original alpha-carbon
//! position and the residue's terminal side-chain atom.

use std::collections::HashMap;

use pdbalign_core::{terminal_atom, AtomRecord, Structure};

use crate::error::CompareError;

/// Rewrite every alpha-carbon record to the midpoint between itself and
/// the residue's terminal side-chain atom. Expects a structure already
/// filtered to `ATOM` records.
///
/// Records other than the alpha carbon pass through unchanged. A residue
/// whose terminal atom is absent from the input keeps its original
/// alpha-carbon coordinates; glycine always does, since its terminal atom
/// is the alpha carbon itself. When a residue carries several records with
/// the terminal atom name, the first in input order wins. A residue name
/// missing from the terminal-atom table aborts the run with
/// [`CompareError::UnknownResidueType`].
pub fn apply_midpoints(structure: &Structure) -> Result<Structure, CompareError> {
    let records = structure.records();

    // Peripheral (non-CA) records grouped per residue, preserving input
    // order within each group.
    let mut peripherals: HashMap<(&str, i32), Vec<&AtomRecord>> = HashMap::new();
    for record in records {
        if !record.is_alpha_carbon() {
            peripherals
                .entry((record.chain(), record.residue_seq))
                .or_default()
                .push(record);
        }
    }

    let mut adjusted = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_alpha_carbon() {
            adjusted.push(record.clone());
            continue;
        }
        let terminal = terminal_atom(record.residue()).ok_or_else(|| {
            CompareError::UnknownResidueType {
                residue: record.residue().to_string(),
                chain: record.chain().to_string(),
                seq: record.residue_seq,
            }
        })?;
        let peripheral = peripherals
            .get(&(record.chain(), record.residue_seq))
            .and_then(|group| group.iter().find(|candidate| candidate.name() == terminal));

        let mut updated = record.clone();
        if let Some(peripheral) = peripheral {
            updated.coord = record.coord.midpoint(peripheral.coord);
        }
        adjusted.push(updated);
    }

    Ok(Structure {
        entry_id: structure.entry_id.clone(),
        records: adjusted,
    })
}

/// Reduce a structure to its alpha-carbon records (strip mode).
pub fn strip_to_alpha(structure: &Structure) -> Structure {
    Structure {
        entry_id: structure.entry_id.clone(),
        records: structure
            .records()
            .iter()
            .filter(|record| record.is_alpha_carbon())
            .cloned()
            .collect(),
    }
}
