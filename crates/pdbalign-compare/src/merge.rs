//! Collapse duplicate residue records into single averaged records.

use std::collections::{HashMap, HashSet};

use pdbalign_core::{Coord, Structure};

/// Merge atom records sharing a (chain, residue number) pair into one
/// record carrying the component-wise mean of the group's coordinates.
///
/// The retained record is the group's first in input order; its residue
/// and atom names are kept unchanged, without checking that later
/// duplicates agree. Duplicates are assumed to be alternate conformers of
/// the same atom. Running the merge on already-merged data is a no-op.
pub fn merge_duplicate_residues(structure: &Structure) -> Structure {
    let mut coords_by_residue: HashMap<(&str, i32), Vec<Coord>> = HashMap::new();
    for record in structure.records() {
        coords_by_residue
            .entry((record.chain(), record.residue_seq))
            .or_default()
            .push(record.coord);
    }

    let mut merged = Vec::with_capacity(coords_by_residue.len());
    let mut seen: HashSet<(&str, i32)> = HashSet::new();
    for record in structure.records() {
        let key = (record.chain(), record.residue_seq);
        if !seen.insert(key) {
            continue;
        }
        let mut kept = record.clone();
        if let Some(coords) = coords_by_residue.get(&key) {
            if coords.len() > 1 {
                kept.coord = Coord::mean(coords.iter().copied()).unwrap_or(record.coord);
                log::debug!(
                    "averaged {} duplicate records for chain {} residue {}",
                    coords.len(),
                    record.chain(),
                    record.residue_seq
                );
            }
        }
        merged.push(kept);
    }

    Structure {
        entry_id: structure.entry_id.clone(),
        records: merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdbalign_core::AtomRecord;
    use pretty_assertions::assert_eq;

    fn record(name: &str, chain: &str, seq: i32, x: f64) -> AtomRecord {
        AtomRecord {
            serial: 0,
            record_name: "ATOM".to_string(),
            atom_name: name.to_string(),
            alt_loc: None,
            residue_name: "ALA".to_string(),
            chain_id: chain.to_string(),
            residue_seq: seq,
            insertion_code: None,
            coord: Coord::new(x, 0.0, 0.0),
            occupancy: 1.0,
            b_factor: 0.0,
            element: None,
        }
    }

    #[test]
    fn duplicates_average_to_one_record() {
        let structure = Structure::new(vec![
            record("CA", "A", 5, 1.0),
            record("CA", "A", 5, 2.0),
            record("CA", "A", 5, 3.0),
        ]);
        let merged = merge_duplicate_residues(&structure);
        assert_eq!(merged.record_count(), 1);
        assert_eq!(merged.records()[0].coord, Coord::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn retained_record_keeps_first_identity() {
        let structure = Structure::new(vec![
            record("CA", "A", 5, 0.0),
            record("CB", "A", 5, 4.0),
        ]);
        let merged = merge_duplicate_residues(&structure);
        assert_eq!(merged.record_count(), 1);
        // Identity comes from the first record; coordinates are averaged
        // across the group regardless of labels.
        assert_eq!(merged.records()[0].name(), "CA");
        assert_eq!(merged.records()[0].coord, Coord::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn distinct_residues_are_untouched() {
        let structure = Structure::new(vec![
            record("CA", "A", 1, 1.0),
            record("CA", "A", 2, 2.0),
            record("CA", "B", 1, 3.0),
        ]);
        let merged = merge_duplicate_residues(&structure);
        assert_eq!(merged.records(), structure.records());
    }

    #[test]
    fn merge_is_idempotent() {
        let structure = Structure::new(vec![
            record("CA", "A", 1, 1.0),
            record("CA", "A", 1, 3.0),
            record("CA", "A", 2, 5.0),
        ]);
        let once = merge_duplicate_residues(&structure);
        let twice = merge_duplicate_residues(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_order_is_preserved() {
        let structure = Structure::new(vec![
            record("CA", "A", 9, 0.0),
            record("CA", "A", 3, 0.0),
            record("CA", "A", 9, 2.0),
            record("CA", "A", 1, 0.0),
        ]);
        let merged = merge_duplicate_residues(&structure);
        let order: Vec<i32> = merged.records().iter().map(|r| r.residue_seq).collect();
        assert_eq!(order, vec![9, 3, 1]);
    }
}
