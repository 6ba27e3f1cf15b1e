#![allow(dead_code)]

use bsmat::{
    AnyMatrix, AnyVector, Engine, EngineConfig, MatrixOperations, SparseMatrix, SparseVector,
    WindowedMatrix,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Dense row-major bits with roughly `density` percent ones
pub fn random_values(rng: &mut StdRng, cells: usize, density: u32) -> Vec<u8> {
    (0..cells)
        .map(|_| (rng.gen_range(0..100) < density) as u8)
        .collect()
}

/// A transposed window in the middle of a larger store, filled with `values`
///
/// Exercises offset and orientation translation on every access.
pub fn embedded_window(rows: usize, cols: usize, values: &[u8]) -> WindowedMatrix {
    let parent = WindowedMatrix::new(cols + 3, rows + 2);
    let mut window = parent
        .slice(1, 2, cols, rows)
        .expect("window fits inside parent")
        .t();
    for (i, v) in values.iter().enumerate() {
        window.set(i / cols, i % cols, *v).expect("in range");
    }
    window
}

/// The same matrix in every engine, plus an embedded window
pub fn every_engine(rows: usize, cols: usize, values: &[u8]) -> Vec<AnyMatrix> {
    let mut out: Vec<AnyMatrix> = Engine::ALL
        .iter()
        .map(|&engine| {
            EngineConfig::new(engine)
                .matrix_from_values(rows, cols, values)
                .expect("valid seed")
        })
        .collect();
    out.push(AnyMatrix::Windowed(embedded_window(rows, cols, values)));
    out
}

pub fn every_vector_engine(len: usize, values: &[u8]) -> Vec<AnyVector> {
    Engine::ALL
        .iter()
        .map(|&engine| {
            EngineConfig::new(engine)
                .vector_from_values(len, values)
                .expect("valid seed")
        })
        .collect()
}

/// Dense row-major bits of any matrix
pub fn dense(m: &dyn SparseMatrix) -> Vec<u8> {
    let (rows, cols) = m.dims();
    let mut out = vec![0u8; rows * cols];
    for (r, c) in m.nonzero_entries() {
        out[r * cols + c] = 1;
    }
    out
}

pub fn dense_vector(v: &dyn SparseVector) -> Vec<u8> {
    let mut out = vec![0u8; v.len()];
    for i in v.nonzero_indices() {
        out[i] = 1;
    }
    out
}

pub fn assert_all_equal(engines: &[AnyMatrix], context: &str) {
    let reference = dense(&engines[0]);
    for m in &engines[1..] {
        assert_eq!(dense(m), reference, "{context}: {:?} diverged", m.engine());
        assert!(m.equals(&engines[0]), "{context}: equals disagrees");
    }
}
