//! Command-line entry point for aligning PDB files onto their common
//! residue set.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use pdbalign_compare::{reconcile_files, ReconcileOptions};

#[derive(Parser, Debug)]
#[command(name = "pdbalign")]
#[command(version)]
#[command(about = "Compare PDB files and emit copies aligned onto their common residues")]
struct Args {
    /// PDB file(s) to compare
    #[arg(value_name = "FILE", required = true, num_args = 2..)]
    pdb: Vec<PathBuf>,

    /// Remove side chains, keeping midpoint-adjusted alpha carbons only
    #[arg(long)]
    strip: bool,

    /// Increase output verbosity
    #[arg(short, long)]
    verbose: bool,

    /// Logging level: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log: String,

    /// Directory to write aligned files into. Without it, each output
    /// overwrites its input.
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Output base filename, one per input (requires --out-dir)
    #[arg(long, value_name = "NAME")]
    base: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        args.log
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid log level: {}", args.log))?
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if !args.base.is_empty() {
        if args.base.len() != args.pdb.len() {
            bail!(
                "expected {} --base names, got {}",
                args.pdb.len(),
                args.base.len()
            );
        }
        if args.out_dir.is_none() {
            bail!("--base requires --out-dir");
        }
    }

    let outputs = output_paths(&args)?;
    let options = ReconcileOptions { strip: args.strip };
    let result = reconcile_files(&args.pdb, &outputs, options)?;

    for chain in result.registry.chains() {
        log::debug!("retained chain {chain}");
    }
    log::info!(
        "aligned {} structures over {} common chains",
        result.structures.len(),
        result.registry.common.len()
    );
    Ok(())
}

fn output_paths(args: &Args) -> Result<Vec<PathBuf>> {
    let Some(dir) = &args.out_dir else {
        return Ok(args.pdb.clone());
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    args.pdb
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let name = if args.base.is_empty() {
                input
                    .file_name()
                    .with_context(|| format!("input {} has no file name", input.display()))?
                    .to_os_string()
            } else {
                args.base[index].clone().into()
            };
            Ok(dir.join(name))
        })
        .collect()
}
