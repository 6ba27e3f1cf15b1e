use bsmat_core::index::{contains_sorted, locate, splice_cut, splice_insert_one};
use bsmat_core::validation::{check_seed_len, check_window};
use bsmat_core::{Result, SparseVector, VectorOperations, VectorWire};

/// GF(2) vector stored as its sorted set positions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompactVector {
    len: usize,
    indices: Vec<usize>,
}

impl CompactVector {
    /// Create an all-zero vector
    pub fn new(len: usize) -> Self {
        Self {
            len,
            indices: Vec::new(),
        }
    }

    /// Create a vector from dense values; odd values are set bits
    ///
    /// An empty `values` slice yields the zero vector.
    pub fn from_values(len: usize, values: &[u8]) -> Result<Self> {
        check_seed_len(values.len(), len)?;
        let indices = values
            .iter()
            .enumerate()
            .filter(|(_, v)| *v % 2 == 1)
            .map(|(i, _)| i)
            .collect();
        Ok(Self { len, indices })
    }

    /// Copy any vector into the compact form
    pub fn copy_from(v: &dyn SparseVector) -> Self {
        Self {
            len: v.len(),
            indices: v.nonzero_indices(),
        }
    }

    /// Build from already sorted, in-range, duplicate-free positions
    pub(crate) fn from_sorted(len: usize, indices: Vec<usize>) -> Self {
        Self { len, indices }
    }

    /// Sorted set positions
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Copy out the wire representation
    pub fn to_wire(&self) -> VectorWire {
        self.clone().into_wire()
    }

    /// Convert to the wire representation
    pub fn into_wire(self) -> VectorWire {
        VectorWire {
            length: self.len,
            indices: self.indices,
        }
    }

    /// Rebuild from a wire payload, rejecting unsorted or out-of-range data
    pub fn from_wire(wire: VectorWire) -> Result<Self> {
        wire.validate()?;
        Ok(Self {
            len: wire.length,
            indices: wire.indices,
        })
    }
}

impl SparseVector for CompactVector {
    fn len(&self) -> usize {
        self.len
    }

    fn bit(&self, index: usize) -> bool {
        contains_sorted(&self.indices, index)
    }

    fn put_bit(&mut self, index: usize, value: bool) {
        let pos = locate(&self.indices, index);
        let present = pos < self.indices.len() && self.indices[pos] == index;
        if value && !present {
            splice_insert_one(&mut self.indices, pos, index);
        } else if !value && present {
            splice_cut(&mut self.indices, pos, pos + 1);
        }
    }

    fn nonzero_indices(&self) -> Vec<usize> {
        self.indices.clone()
    }

    fn hamming_weight(&self) -> usize {
        self.indices.len()
    }

    fn zeroize(&mut self) {
        self.indices.clear();
    }
}

impl VectorOperations for CompactVector {
    fn slice(&self, start: usize, len: usize) -> Result<Self> {
        check_window(start, len, self.len)?;
        let from = locate(&self.indices, start);
        let to = locate(&self.indices, start + len);
        let indices = self.indices[from..to].iter().map(|i| i - start).collect();
        Ok(Self { len, indices })
    }
}

impl std::fmt::Display for CompactVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::render_vector(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsmat_core::BsmatError;

    #[test]
    fn test_from_values() {
        let v = CompactVector::from_values(5, &[1, 0, 3, 0, 2]).unwrap();
        assert_eq!(v.indices(), &[0, 2]);
        assert_eq!(v.len(), 5);
        assert!(CompactVector::from_values(5, &[]).unwrap().is_zero());
        assert!(matches!(
            CompactVector::from_values(5, &[1, 0]),
            Err(BsmatError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_set_keeps_order() {
        let mut v = CompactVector::new(8);
        for i in [5, 1, 7, 3] {
            v.set(i, 1).unwrap();
        }
        assert_eq!(v.indices(), &[1, 3, 5, 7]);
        v.set(3, 0).unwrap();
        v.set(3, 0).unwrap();
        v.set(5, 1).unwrap();
        assert_eq!(v.indices(), &[1, 5, 7]);
        assert_eq!(
            v.set(8, 1),
            Err(BsmatError::IndexOutOfRange { index: 8, extent: 8 })
        );
    }

    #[test]
    fn test_negate() {
        let mut v = CompactVector::from_values(5, &[1, 0, 1, 0, 1]).unwrap();
        v.negate();
        assert_eq!(v, CompactVector::from_values(5, &[0, 1, 0, 1, 0]).unwrap());
    }

    #[test]
    fn test_slice_is_copy() {
        let v = CompactVector::from_values(6, &[1, 0, 1, 1, 0, 1]).unwrap();
        let mut s = v.slice(2, 3).unwrap();
        assert_eq!(s.indices(), &[0, 1]);
        s.set(2, 1).unwrap();
        assert_eq!(v.at(4), Ok(0));
        assert!(v.slice(4, 3).is_err());
        assert!(v.slice(0, 0).is_err());
    }

    #[test]
    fn test_from_wire_rejects_unsorted() {
        let wire = VectorWire {
            length: 4,
            indices: vec![2, 1],
        };
        assert!(matches!(
            CompactVector::from_wire(wire),
            Err(BsmatError::CorruptedData(_))
        ));
    }

    #[test]
    fn test_display() {
        let v = CompactVector::from_values(4, &[1, 0, 0, 1]).unwrap();
        assert_eq!(v.to_string(), "1 0 0 1");
    }
}
