use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdbalign_compare::{
    common_residue_registry, merge_duplicate_residues, positional_type_mask, reconcile,
    ReconcileOptions,
};
use pdbalign_core::{AtomRecord, Coord, Structure};

const BACKBONE: [&str; 4] = [" N  ", " CA ", " C  ", " O  "];

/// Synthesize a polyalanine structure of `residues` residues, each with a
/// backbone plus CB, shifted by `offset` along x.
fn synthetic_structure(residues: i32, offset: f64) -> Structure {
    let mut records = Vec::new();
    let mut serial = 0;
    for seq in 1..=residues {
        for name in BACKBONE.iter().chain([" CB "].iter()) {
            serial += 1;
            records.push(AtomRecord {
                serial,
                record_name: "ATOM".to_string(),
                atom_name: (*name).to_string(),
                alt_loc: None,
                residue_name: "ALA".to_string(),
                chain_id: "A".to_string(),
                residue_seq: seq,
                insertion_code: None,
                coord: Coord::new(seq as f64 * 3.8 + offset, serial as f64 * 0.1, 0.0),
                occupancy: 1.0,
                b_factor: 0.0,
                element: None,
            });
        }
    }
    Structure::new(records)
}

fn bench_reconcile(c: &mut Criterion) {
    let a = synthetic_structure(500, 0.0);
    let b = synthetic_structure(480, 0.5);
    let inputs = [a, b];
    c.bench_function("reconcile 500x480 residues", |bench| {
        bench.iter(|| {
            let result = reconcile(black_box(&inputs), ReconcileOptions::default())
                .expect("reconcile");
            black_box(result.structures.len());
        });
    });
}

fn bench_reconcile_strip(c: &mut Criterion) {
    let a = synthetic_structure(500, 0.0);
    let b = synthetic_structure(480, 0.5);
    let inputs = [a, b];
    c.bench_function("reconcile 500x480 residues (strip)", |bench| {
        bench.iter(|| {
            let result = reconcile(black_box(&inputs), ReconcileOptions { strip: true })
                .expect("reconcile");
            black_box(result.structures.len());
        });
    });
}

fn bench_registry(c: &mut Criterion) {
    let a = synthetic_structure(500, 0.0);
    let b = synthetic_structure(480, 0.5);
    let inputs = [a, b];
    c.bench_function("common residue registry", |bench| {
        bench.iter(|| {
            let registry = common_residue_registry(black_box(&inputs));
            black_box(registry.common.len());
        });
    });
}

fn bench_positional_mask(c: &mut Criterion) {
    let a = synthetic_structure(500, 0.0);
    let b = synthetic_structure(480, 0.5);
    let inputs = [a, b];
    c.bench_function("positional type mask", |bench| {
        bench.iter(|| {
            let mask = positional_type_mask(black_box(&inputs));
            black_box(mask.len());
        });
    });
}

fn bench_merge(c: &mut Criterion) {
    let structure = synthetic_structure(500, 0.0);
    c.bench_function("merge duplicate residues", |bench| {
        bench.iter(|| {
            let merged = merge_duplicate_residues(black_box(&structure));
            black_box(merged.record_count());
        });
    });
}

criterion_group!(
    align_benches,
    bench_reconcile,
    bench_reconcile_strip,
    bench_registry,
    bench_positional_mask,
    bench_merge,
);
criterion_main!(align_benches);
