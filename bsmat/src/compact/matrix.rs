use std::ops::Range;

use bsmat_core::index::{
    contains_sorted, locate, range_of_row, splice_cut, splice_insert_one, splice_insert_range,
    xor_merge,
};
use bsmat_core::validation::{check_index, check_seed_len, check_window};
use bsmat_core::{
    BsmatError, MatrixOperations, MatrixWire, Result, SparseMatrix, SparseVector,
};

use super::CompactVector;

/// GF(2) matrix stored as parallel sorted coordinate arrays
///
/// Entry `k` is the set bit `(row_indices[k], col_indices[k])`. Rows are
/// non-decreasing and columns strictly increase within a row, so a row is a
/// contiguous run found by binary search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompactMatrix {
    rows: usize,
    cols: usize,
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
}

impl CompactMatrix {
    /// Create an all-zero matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_indices: Vec::new(),
            col_indices: Vec::new(),
        }
    }

    /// Create an all-zero matrix with room for `entries` set bits
    pub fn with_capacity(rows: usize, cols: usize, entries: usize) -> Self {
        Self {
            rows,
            cols,
            row_indices: Vec::with_capacity(entries),
            col_indices: Vec::with_capacity(entries),
        }
    }

    /// Create a matrix from row-major dense values; odd values are set bits
    ///
    /// An empty `values` slice yields the zero matrix.
    pub fn from_values(rows: usize, cols: usize, values: &[u8]) -> Result<Self> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(BsmatError::InvalidArgument("matrix cell count overflows"))?;
        check_seed_len(values.len(), cells)?;
        let mut m = Self::new(rows, cols);
        for (i, v) in values.iter().enumerate() {
            if v % 2 == 1 {
                m.row_indices.push(i / cols);
                m.col_indices.push(i % cols);
            }
        }
        Ok(m)
    }

    /// Create the `size x size` identity
    pub fn identity(size: usize) -> Self {
        Self {
            rows: size,
            cols: size,
            row_indices: (0..size).collect(),
            col_indices: (0..size).collect(),
        }
    }

    /// Copy any matrix into the compact form
    pub fn copy_from(m: &dyn SparseMatrix) -> Self {
        let (rows, cols) = m.dims();
        let (row_indices, col_indices) = m.nonzero_entries().into_iter().unzip();
        Self {
            rows,
            cols,
            row_indices,
            col_indices,
        }
    }

    /// Create a `1 x len` matrix holding the bits of `v`
    pub fn from_vector(v: &dyn SparseVector) -> Self {
        let col_indices = v.nonzero_indices();
        Self {
            rows: 1,
            cols: v.len(),
            row_indices: vec![0; col_indices.len()],
            col_indices,
        }
    }

    /// Row index of every set bit
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Column index of every set bit
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Copy out the wire representation
    pub fn to_wire(&self) -> MatrixWire {
        self.clone().into_wire()
    }

    /// Convert to the wire representation
    pub fn into_wire(self) -> MatrixWire {
        MatrixWire {
            rows: self.rows,
            cols: self.cols,
            row_indices: self.row_indices,
            col_indices: self.col_indices,
        }
    }

    /// Rebuild from a wire payload, rejecting data that breaks the ordering
    /// or bounds invariants
    pub fn from_wire(wire: MatrixWire) -> Result<Self> {
        wire.validate()?;
        Ok(Self {
            rows: wire.rows,
            cols: wire.cols,
            row_indices: wire.row_indices,
            col_indices: wire.col_indices,
        })
    }

    fn run(&self, row: usize) -> Range<usize> {
        range_of_row(&self.row_indices, row)
    }

    /// Replace the run of `row` with the sorted columns in `support`
    fn replace_run(&mut self, row: usize, support: &[usize]) {
        let run = self.run(row);
        splice_cut(&mut self.row_indices, run.start, run.end);
        splice_cut(&mut self.col_indices, run.start, run.end);
        splice_insert_range(&mut self.row_indices, run.start, &vec![row; support.len()]);
        splice_insert_range(&mut self.col_indices, run.start, support);
    }
}

impl SparseMatrix for CompactMatrix {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn bit(&self, row: usize, col: usize) -> bool {
        let run = self.run(row);
        contains_sorted(&self.col_indices[run], col)
    }

    fn put_bit(&mut self, row: usize, col: usize, value: bool) {
        let run = self.run(row);
        let pos = run.start + locate(&self.col_indices[run.clone()], col);
        let present = pos < run.end && self.col_indices[pos] == col;
        if value && !present {
            splice_insert_one(&mut self.row_indices, pos, row);
            splice_insert_one(&mut self.col_indices, pos, col);
        } else if !value && present {
            splice_cut(&mut self.row_indices, pos, pos + 1);
            splice_cut(&mut self.col_indices, pos, pos + 1);
        }
    }

    fn row_support(&self, row: usize) -> Vec<usize> {
        self.col_indices[self.run(row)].to_vec()
    }

    fn column_support(&self, col: usize) -> Vec<usize> {
        self.row_indices
            .iter()
            .zip(&self.col_indices)
            .filter(|&(_, &c)| c == col)
            .map(|(&r, _)| r)
            .collect()
    }

    fn nnz(&self) -> usize {
        self.row_indices.len()
    }

    fn nonzero_entries(&self) -> Vec<(usize, usize)> {
        self.row_indices
            .iter()
            .copied()
            .zip(self.col_indices.iter().copied())
            .collect()
    }

    fn zeroize(&mut self) {
        self.row_indices.clear();
        self.col_indices.clear();
    }

    fn set_row(&mut self, row: usize, vec: &dyn SparseVector) -> Result<()> {
        check_index(row, self.rows)?;
        if vec.len() != self.cols {
            return Err(BsmatError::ShapeMismatch {
                expected: (1, self.cols),
                found: (1, vec.len()),
            });
        }
        self.replace_run(row, &vec.nonzero_indices());
        Ok(())
    }

    fn swap_rows(&mut self, i1: usize, i2: usize) -> Result<()> {
        check_index(i1, self.rows)?;
        check_index(i2, self.rows)?;
        if i1 == i2 {
            return Ok(());
        }
        let (lo, hi) = if i1 < i2 { (i1, i2) } else { (i2, i1) };
        let lo_run = self.run(lo);
        let hi_run = self.run(hi);

        if lo_run.len() == hi_run.len() {
            log::trace!("swap_rows({lo}, {hi}): equal runs of {}, in place", lo_run.len());
            for k in 0..lo_run.len() {
                self.col_indices.swap(lo_run.start + k, hi_run.start + k);
            }
            return Ok(());
        }

        log::trace!(
            "swap_rows({lo}, {hi}): runs of {} and {}, cut and reinsert",
            lo_run.len(),
            hi_run.len()
        );
        let lo_cols = self.col_indices[lo_run.clone()].to_vec();
        let hi_cols = self.col_indices[hi_run.clone()].to_vec();

        // cut the high run first so the low run's offsets stay valid
        splice_cut(&mut self.row_indices, hi_run.start, hi_run.end);
        splice_cut(&mut self.col_indices, hi_run.start, hi_run.end);
        splice_cut(&mut self.row_indices, lo_run.start, lo_run.end);
        splice_cut(&mut self.col_indices, lo_run.start, lo_run.end);

        splice_insert_range(&mut self.row_indices, lo_run.start, &vec![lo; hi_cols.len()]);
        splice_insert_range(&mut self.col_indices, lo_run.start, &hi_cols);

        let hi_start = self.run(hi).start;
        splice_insert_range(&mut self.row_indices, hi_start, &vec![hi; lo_cols.len()]);
        splice_insert_range(&mut self.col_indices, hi_start, &lo_cols);
        Ok(())
    }

    fn swap_columns(&mut self, j1: usize, j2: usize) -> Result<()> {
        check_index(j1, self.cols)?;
        check_index(j2, self.cols)?;
        if j1 == j2 {
            return Ok(());
        }
        // rows holding both or neither column are unchanged
        for row in xor_merge(&self.column_support(j1), &self.column_support(j2)) {
            let had_first = self.bit(row, j1);
            self.put_bit(row, j1, !had_first);
            self.put_bit(row, j2, had_first);
        }
        Ok(())
    }

    fn add_rows(&mut self, i1: usize, i2: usize, dest: usize) -> Result<()> {
        check_index(i1, self.rows)?;
        check_index(i2, self.rows)?;
        check_index(dest, self.rows)?;
        let sum = xor_merge(
            &self.col_indices[self.run(i1)],
            &self.col_indices[self.run(i2)],
        );
        self.replace_run(dest, &sum);
        Ok(())
    }
}

impl MatrixOperations for CompactMatrix {
    type Vector = CompactVector;

    fn row(&self, row: usize) -> Result<CompactVector> {
        check_index(row, self.rows)?;
        Ok(CompactVector::from_sorted(self.cols, self.row_support(row)))
    }

    fn column(&self, col: usize) -> Result<CompactVector> {
        check_index(col, self.cols)?;
        Ok(CompactVector::from_sorted(self.rows, self.column_support(col)))
    }

    fn slice(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        check_window(row, rows, self.rows)?;
        check_window(col, cols, self.cols)?;
        let from = self.run(row).start;
        let to = self.run(row + rows - 1).end;
        let mut out = Self::new(rows, cols);
        for k in from..to {
            let c = self.col_indices[k];
            if c >= col && c < col + cols {
                out.row_indices.push(self.row_indices[k] - row);
                out.col_indices.push(c - col);
            }
        }
        Ok(out)
    }

    fn t(&self) -> Self {
        let mut pairs: Vec<(usize, usize)> = self
            .col_indices
            .iter()
            .copied()
            .zip(self.row_indices.iter().copied())
            .collect();
        pairs.sort_unstable();
        let (row_indices, col_indices) = pairs.into_iter().unzip();
        Self {
            rows: self.cols,
            cols: self.rows,
            row_indices,
            col_indices,
        }
    }
}

impl std::fmt::Display for CompactMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::render_matrix(self, f)
    }
}
