use std::collections::BTreeSet;

use crate::record::AtomRecord;

/// The full, ordered set of atom records parsed from one input file.
///
/// Record order is the input file order; the positional common-residue
/// heuristic depends on it, residue-number filtering does not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Structure {
    pub entry_id: Option<String>,
    pub records: Vec<AtomRecord>,
}

impl Structure {
    pub fn new(records: Vec<AtomRecord>) -> Self {
        Self {
            entry_id: None,
            records,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[AtomRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy of this structure reduced to records carrying the `ATOM`
    /// marker.
    pub fn retain_atom_records(&self) -> Self {
        Self {
            entry_id: self.entry_id.clone(),
            records: self
                .records
                .iter()
                .filter(|record| record.is_atom())
                .cloned()
                .collect(),
        }
    }

    /// Trimmed chain labels present in this structure, lexicographically
    /// ordered.
    pub fn chain_labels(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|record| record.chain().to_string())
            .collect()
    }

    /// Distinct residue numbers for `chain`, matched on the trimmed label.
    pub fn residue_numbers(&self, chain: &str) -> BTreeSet<i32> {
        self.records
            .iter()
            .filter(|record| record.chain() == chain)
            .map(|record| record.residue_seq)
            .collect()
    }
}
