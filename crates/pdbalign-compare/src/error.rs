use thiserror::Error;

/// Errors raised while reconciling structures. Any of these aborts the
/// whole run before a single output is written.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A residue name has no entry in the terminal-atom table.
    #[error("unknown residue type '{residue}' (chain {chain}, residue {seq})")]
    UnknownResidueType {
        residue: String,
        chain: String,
        seq: i32,
    },
    #[error("{inputs} inputs but {outputs} output paths")]
    OutputArity { inputs: usize, outputs: usize },
    #[error(transparent)]
    Parse(#[from] pdbalign_core::ParseError),
    #[error("failed to write aligned structure")]
    Io(#[from] std::io::Error),
}
