//! Determination of the residues common to every input structure.
//!
//! Two criteria run side by side: a positional residue-type mask over whole
//! structures, and the per-chain intersection of residue numbers. The
//! registry drives all filtering; the mask is a diagnostic signal carried
//! for parity with the original analysis. The coexistence is deliberate and
//! left unresolved.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use pdbalign_core::Structure;

/// Per-chain residue numbers present in every input structure, together
/// with the chains that had to be excluded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResidueRegistry {
    /// Trimmed chain label to the residue numbers shared by all inputs.
    pub common: BTreeMap<String, BTreeSet<i32>>,
    /// Chains absent from at least one input, lexicographically ordered.
    pub missing_chains: Vec<String>,
    /// Chains present everywhere whose residue-number intersection is
    /// empty, lexicographically ordered.
    pub empty_chains: Vec<String>,
}

impl ResidueRegistry {
    /// Retained chain labels in lexicographic order.
    pub fn chains(&self) -> impl Iterator<Item = &str> {
        self.common.keys().map(String::as_str)
    }

    pub fn is_retained(&self, chain: &str) -> bool {
        self.common.contains_key(chain)
    }
}

/// Positional residue-type mask across whole structures.
///
/// Index `i` is true iff every structure has a record at `i` whose residue
/// name matches the first structure's record at `i`. Structures shorter
/// than the longest input contribute `false` past their end. The mask does
/// not gate output rows; filtering is driven by
/// [`common_residue_registry`].
pub fn positional_type_mask(structures: &[Structure]) -> Vec<bool> {
    let Some(first) = structures.first() else {
        return Vec::new();
    };
    let max_length = structures
        .iter()
        .map(Structure::record_count)
        .max()
        .unwrap_or(0);

    (0..max_length)
        .map(|index| {
            let Some(reference) = first.records().get(index) else {
                return false;
            };
            structures.iter().all(|structure| {
                structure
                    .records()
                    .get(index)
                    .map(|record| record.residue() == reference.residue())
                    .unwrap_or(false)
            })
        })
        .collect()
}

/// Intersect per-chain residue numbers across all inputs.
///
/// A chain is retained only when present (after trimming) in every
/// structure and at least one residue number survives the intersection.
/// Excluded chains are logged in lexicographic order and reported on the
/// registry.
pub fn common_residue_registry(structures: &[Structure]) -> ResidueRegistry {
    let mut registry = ResidueRegistry::default();
    if structures.is_empty() {
        return registry;
    }

    let mut intersected: BTreeMap<String, BTreeSet<i32>> = BTreeMap::new();
    for structure in structures {
        for chain in structure.chain_labels() {
            let numbers = structure.residue_numbers(&chain);
            match intersected.entry(chain) {
                Entry::Occupied(mut entry) => {
                    let shared = entry.get().intersection(&numbers).copied().collect();
                    *entry.get_mut() = shared;
                }
                Entry::Vacant(entry) => {
                    entry.insert(numbers);
                }
            }
        }
    }

    // A chain must appear in every input, not merely in the union.
    let mut shared_chains: Option<BTreeSet<String>> = None;
    for structure in structures {
        let labels = structure.chain_labels();
        shared_chains = Some(match shared_chains {
            Some(shared) => shared.intersection(&labels).cloned().collect(),
            None => labels,
        });
    }
    let shared_chains = shared_chains.unwrap_or_default();

    for (chain, numbers) in intersected {
        if !shared_chains.contains(&chain) {
            log::info!("chain {chain} not common to all structures, excluded");
            registry.missing_chains.push(chain);
        } else if numbers.is_empty() {
            log::info!("chain {chain} has no shared residue numbers, excluded");
            registry.empty_chains.push(chain);
        } else {
            registry.common.insert(chain, numbers);
        }
    }
    registry
}
