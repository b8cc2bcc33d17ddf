#![forbid(unsafe_code)]
//! Residue alignment and coordinate reconciliation across PDB structures.
//!
//! Given two or more structures, the pipeline normalizes each residue to a
//! single representative coordinate, determines the chains and residue
//! numbers common to every input, collapses duplicate records, and emits
//! filtered structures whose (chain, residue number) compositions are
//! identical. The stages run strictly in sequence per invocation and own
//! their data exclusively; nothing persists across runs.

use std::path::Path;

use pdbalign_core::Structure;

pub mod assemble;
pub mod error;
pub mod merge;
pub mod midpoint;
pub mod resolver;

pub use assemble::assemble;
pub use error::CompareError;
pub use merge::merge_duplicate_residues;
pub use midpoint::{apply_midpoints, strip_to_alpha};
pub use resolver::{common_residue_registry, positional_type_mask, ResidueRegistry};

/// Options for a [`reconcile`] run.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReconcileOptions {
    /// Reduce each structure to midpoint-adjusted alpha carbons.
    pub strip: bool,
}

/// Everything produced by one reconciliation run.
#[derive(Clone, Debug)]
pub struct Reconciliation {
    /// Filtered structures, one per input, in input order. All share an
    /// identical (chain, residue number) composition.
    pub structures: Vec<Structure>,
    /// The chain/residue-number registry that drove filtering.
    pub registry: ResidueRegistry,
    /// Positional residue-type mask (diagnostic only, does not gate
    /// output rows).
    pub positional_mask: Vec<bool>,
}

/// Run the full pipeline: `ATOM` filtering, midpoint normalization,
/// optional side-chain stripping, common-residue resolution, duplicate
/// merging, and assembly.
///
/// All-or-nothing: a residue name missing from the terminal-atom table
/// aborts before any output structure is produced. The registry is built
/// from pre-merge residue numbers; rows are filtered post-merge.
pub fn reconcile(
    structures: &[Structure],
    options: ReconcileOptions,
) -> Result<Reconciliation, CompareError> {
    let mut normalized = Vec::with_capacity(structures.len());
    for structure in structures {
        let filtered = structure.retain_atom_records();
        let mut adjusted = midpoint::apply_midpoints(&filtered)?;
        if options.strip {
            log::info!("stripping {} down to alpha carbons", label(&adjusted));
            adjusted = midpoint::strip_to_alpha(&adjusted);
        }
        normalized.push(adjusted);
    }

    let positional_mask = resolver::positional_type_mask(&normalized);
    let registry = resolver::common_residue_registry(&normalized);

    let outputs = normalized
        .iter()
        .map(|structure| assemble::assemble(&merge::merge_duplicate_residues(structure), &registry))
        .collect();

    Ok(Reconciliation {
        structures: outputs,
        registry,
        positional_mask,
    })
}

/// Load each input, reconcile, and write one aligned output per input.
///
/// `outputs` must name one path per input. Nothing is written unless the
/// whole pipeline succeeds, since every output must share the common set.
pub fn reconcile_files<P, Q>(
    inputs: &[P],
    outputs: &[Q],
    options: ReconcileOptions,
) -> Result<Reconciliation, CompareError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    if inputs.len() != outputs.len() {
        return Err(CompareError::OutputArity {
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }

    let mut structures = Vec::with_capacity(inputs.len());
    for path in inputs {
        structures.push(pdbalign_core::load_file(path)?);
    }

    let reconciliation = reconcile(&structures, options)?;

    for (path, structure) in outputs.iter().zip(&reconciliation.structures) {
        pdbalign_core::write_file(path, structure)?;
        log::info!(
            "wrote {} ({} records)",
            path.as_ref().display(),
            structure.record_count()
        );
    }
    Ok(reconciliation)
}

fn label(structure: &Structure) -> &str {
    structure.entry_id.as_deref().unwrap_or("structure")
}
