use hashbrown::HashSet;

use bsmat_core::validation::{check_seed_len, check_window};
use bsmat_core::{Result, SparseVector, VectorOperations, VectorWire};

use crate::compact::CompactVector;

/// GF(2) vector stored as a hash set of its set positions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapVector {
    len: usize,
    bits: HashSet<usize>,
}

impl MapVector {
    /// Create an all-zero vector
    pub fn new(len: usize) -> Self {
        Self {
            len,
            bits: HashSet::new(),
        }
    }

    /// Create a vector from dense values; odd values are set bits
    pub fn from_values(len: usize, values: &[u8]) -> Result<Self> {
        check_seed_len(values.len(), len)?;
        let bits = values
            .iter()
            .enumerate()
            .filter(|(_, v)| *v % 2 == 1)
            .map(|(i, _)| i)
            .collect();
        Ok(Self { len, bits })
    }

    /// Copy any vector into the map form
    pub fn copy_from(v: &dyn SparseVector) -> Self {
        Self {
            len: v.len(),
            bits: v.nonzero_indices().into_iter().collect(),
        }
    }

    /// Convert to the wire representation
    pub fn to_wire(&self) -> VectorWire {
        CompactVector::copy_from(self).into_wire()
    }

    /// Rebuild from a wire payload
    pub fn from_wire(wire: VectorWire) -> Result<Self> {
        Ok(Self::copy_from(&CompactVector::from_wire(wire)?))
    }
}

impl SparseVector for MapVector {
    fn len(&self) -> usize {
        self.len
    }

    fn bit(&self, index: usize) -> bool {
        self.bits.contains(&index)
    }

    fn put_bit(&mut self, index: usize, value: bool) {
        if value {
            self.bits.insert(index);
        } else {
            self.bits.remove(&index);
        }
    }

    fn nonzero_indices(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.bits.iter().copied().collect();
        out.sort_unstable();
        out
    }

    fn hamming_weight(&self) -> usize {
        self.bits.len()
    }

    fn zeroize(&mut self) {
        self.bits.clear();
    }
}

impl VectorOperations for MapVector {
    fn slice(&self, start: usize, len: usize) -> Result<Self> {
        check_window(start, len, self.len)?;
        let bits = self
            .bits
            .iter()
            .filter(|&&i| i >= start && i < start + len)
            .map(|&i| i - start)
            .collect();
        Ok(Self { len, bits })
    }
}

impl std::fmt::Display for MapVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::render_vector(self, f)
    }
}
