//! Reduce a parity-check matrix to row echelon form over GF(2)
//!
//! Usage: cargo run --example row_reduce -- [compact|map|windowed]

use bsmat::{AnyMatrix, Engine, EngineConfig, MatrixOperations, SparseMatrix, SparseVector};
use env_logger::Env;
use std::time::Instant;

/// Gaussian elimination with row swaps and row additions; returns the rank
fn row_reduce(m: &mut AnyMatrix) -> bsmat::Result<usize> {
    let (rows, cols) = m.dims();
    let mut rank = 0;
    for col in 0..cols {
        if rank == rows {
            break;
        }
        let column = m.column(col)?;
        let pivot = match column.next_set(rank)? {
            Some(pivot) => pivot,
            None => continue,
        };
        m.swap_rows(rank, pivot)?;
        for row in m.column_support(col) {
            if row != rank {
                m.add_rows(row, rank, row)?;
            }
        }
        rank += 1;
    }
    Ok(rank)
}

fn main() -> bsmat::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let engine = match std::env::args().nth(1) {
        Some(name) => name.parse::<Engine>()?,
        None => Engine::Compact,
    };
    let config = EngineConfig::new(engine).with_capacity_hint(32);

    // (7,4) Hamming code parity checks, with a dependent fourth row
    #[rustfmt::skip]
    let values = [
        1, 1, 0, 1, 1, 0, 0,
        1, 0, 1, 1, 0, 1, 0,
        0, 1, 1, 1, 0, 0, 1,
        0, 0, 0, 1, 1, 1, 1,
    ];
    let mut m = config.matrix_from_values(4, 7, &values)?;
    println!("Parity-check matrix ({engine} engine):\n{m}\n");

    let start = Instant::now();
    let rank = row_reduce(&mut m)?;
    let elapsed = start.elapsed();

    println!("Row echelon form:\n{m}\n");
    println!("Rank: {rank} (reduced in {:.3}ms)", elapsed.as_secs_f64() * 1000.0);

    let codeword = config.vector_from_values(7, &[1, 1, 1, 0, 0, 0, 0])?;
    let mut syndrome = config.new_vector(4);
    syndrome.mat_mul(&m, &codeword)?;
    println!("Syndrome of {codeword}: {syndrome}");

    #[cfg(feature = "serde")]
    println!("Snapshot: {}", bsmat::to_json(&m)?);

    Ok(())
}
