//! Application of the common-residue registry to individual structures.

use pdbalign_core::Structure;

use crate::resolver::ResidueRegistry;

/// Select exactly the records whose (chain, residue number) pair survives
/// the registry.
///
/// Retained chains are concatenated in lexicographic order; within a
/// chain, records keep their input order. Records in removed chains or
/// with residue numbers outside the chain's common set are dropped. After
/// assembly every output structure of a run carries an identical
/// (chain, residue number) composition.
pub fn assemble(structure: &Structure, registry: &ResidueRegistry) -> Structure {
    let mut records = Vec::new();
    for (chain, numbers) in &registry.common {
        records.extend(
            structure
                .records()
                .iter()
                .filter(|record| record.chain() == chain && numbers.contains(&record.residue_seq))
                .cloned(),
        );
    }
    Structure {
        entry_id: structure.entry_id.clone(),
        records,
    }
}
