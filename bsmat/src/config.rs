//! Runtime engine selection
//!
//! [`EngineConfig`] picks the storage engine for values built through it,
//! returning [`AnyMatrix`] / [`AnyVector`] wrappers.

use bsmat_core::{Engine, MatrixWire, Result, SparseMatrix, SparseVector, VectorWire};

use crate::compact::{CompactMatrix, CompactVector};
use crate::dynamic::{AnyMatrix, AnyVector};
use crate::map::{MapMatrix, MapVector};
use crate::windowed::{WindowedMatrix, WindowedVector};

/// Engine choice and allocation hint for new values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Engine for every value built through this config
    pub engine: Engine,
    /// Expected number of set bits in a new matrix, 0 for no hint
    pub capacity_hint: usize,
}

impl EngineConfig {
    /// Config building values of `engine`
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            capacity_hint: 0,
        }
    }

    /// Set the engine
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Set the expected number of set bits in new matrices
    pub fn with_capacity_hint(mut self, entries: usize) -> Self {
        self.capacity_hint = entries;
        self
    }

    /// Create an all-zero matrix
    pub fn new_matrix(&self, rows: usize, cols: usize) -> AnyMatrix {
        let hint = self.capacity_hint;
        match self.engine {
            Engine::Compact => CompactMatrix::with_capacity(rows, cols, hint).into(),
            Engine::Map => MapMatrix::with_capacity(rows, cols, hint).into(),
            Engine::Windowed => WindowedMatrix::with_capacity(rows, cols, hint).into(),
        }
    }

    /// Create a matrix from row-major dense values
    pub fn matrix_from_values(&self, rows: usize, cols: usize, values: &[u8]) -> Result<AnyMatrix> {
        Ok(match self.engine {
            Engine::Compact => CompactMatrix::from_values(rows, cols, values)?.into(),
            Engine::Map => MapMatrix::from_values(rows, cols, values)?.into(),
            Engine::Windowed => WindowedMatrix::from_values(rows, cols, values)?.into(),
        })
    }

    /// Create the `size x size` identity
    pub fn identity(&self, size: usize) -> AnyMatrix {
        match self.engine {
            Engine::Compact => CompactMatrix::identity(size).into(),
            Engine::Map => MapMatrix::identity(size).into(),
            Engine::Windowed => WindowedMatrix::identity(size).into(),
        }
    }

    /// Copy any matrix into the configured engine
    pub fn copy_matrix(&self, m: &dyn SparseMatrix) -> AnyMatrix {
        match self.engine {
            Engine::Compact => CompactMatrix::copy_from(m).into(),
            Engine::Map => MapMatrix::copy_from(m).into(),
            Engine::Windowed => WindowedMatrix::copy_from(m).into(),
        }
    }

    /// Rebuild a wire payload into the configured engine
    pub fn matrix_from_wire(&self, wire: MatrixWire) -> Result<AnyMatrix> {
        AnyMatrix::from_wire(wire, self.engine)
    }

    /// Create an all-zero vector
    pub fn new_vector(&self, len: usize) -> AnyVector {
        match self.engine {
            Engine::Compact => CompactVector::new(len).into(),
            Engine::Map => MapVector::new(len).into(),
            Engine::Windowed => WindowedVector::new(len).into(),
        }
    }

    /// Create a vector from dense values
    pub fn vector_from_values(&self, len: usize, values: &[u8]) -> Result<AnyVector> {
        Ok(match self.engine {
            Engine::Compact => CompactVector::from_values(len, values)?.into(),
            Engine::Map => MapVector::from_values(len, values)?.into(),
            Engine::Windowed => WindowedVector::from_values(len, values)?.into(),
        })
    }

    /// Copy any vector into the configured engine
    pub fn copy_vector(&self, v: &dyn SparseVector) -> AnyVector {
        match self.engine {
            Engine::Compact => CompactVector::copy_from(v).into(),
            Engine::Map => MapVector::copy_from(v).into(),
            Engine::Windowed => WindowedVector::copy_from(v).into(),
        }
    }

    /// Rebuild a wire payload into the configured engine
    pub fn vector_from_wire(&self, wire: VectorWire) -> Result<AnyVector> {
        AnyVector::from_wire(wire, self.engine)
    }
}
