use hashbrown::{HashMap, HashSet};

/// Row-to-columns and column-to-rows maps kept mutually consistent
///
/// `(r, c)` is set iff `c` is in `rows[r]` iff `r` is in `cols[c]`. Inner
/// sets are removed as soon as they become empty, so two maps holding the
/// same bits compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DualMap {
    rows: HashMap<usize, HashSet<usize>>,
    cols: HashMap<usize, HashSet<usize>>,
}

fn sorted(set: Option<&HashSet<usize>>) -> Vec<usize> {
    let mut out: Vec<usize> = set.map(|s| s.iter().copied().collect()).unwrap_or_default();
    out.sort_unstable();
    out
}

fn remove_pruning(map: &mut HashMap<usize, HashSet<usize>>, outer: usize, inner: usize) {
    if let Some(set) = map.get_mut(&outer) {
        set.remove(&inner);
        if set.is_empty() {
            map.remove(&outer);
        }
    }
}

impl DualMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map expecting roughly `rows` non-empty rows and `cols`
    /// non-empty columns
    pub fn with_capacity(rows: usize, cols: usize) -> Self {
        Self {
            rows: HashMap::with_capacity(rows),
            cols: HashMap::with_capacity(cols),
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.get(&row).is_some_and(|s| s.contains(&col))
    }

    pub fn insert(&mut self, row: usize, col: usize) {
        self.rows.entry(row).or_default().insert(col);
        self.cols.entry(col).or_default().insert(row);
    }

    pub fn remove(&mut self, row: usize, col: usize) {
        remove_pruning(&mut self.rows, row, col);
        remove_pruning(&mut self.cols, col, row);
    }

    pub fn put(&mut self, row: usize, col: usize, value: bool) {
        if value {
            self.insert(row, col);
        } else {
            self.remove(row, col);
        }
    }

    /// Sorted columns set in `row`
    pub fn row(&self, row: usize) -> Vec<usize> {
        sorted(self.rows.get(&row))
    }

    /// Sorted rows set in `col`
    pub fn column(&self, col: usize) -> Vec<usize> {
        sorted(self.cols.get(&col))
    }

    /// Number of set bits in `row`
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(&row).map_or(0, HashSet::len)
    }

    /// Number of set bits in `col`
    pub fn column_len(&self, col: usize) -> usize {
        self.cols.get(&col).map_or(0, HashSet::len)
    }

    pub fn nnz(&self) -> usize {
        self.rows.values().map(HashSet::len).sum()
    }

    /// Every set bit in row-major order
    pub fn entries(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = self
            .rows
            .iter()
            .flat_map(|(&r, set)| set.iter().map(move |&c| (r, c)))
            .collect();
        out.sort_unstable();
        out
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.cols.clear();
    }

    /// Remove row `row` entirely, returning its columns
    fn take_row(&mut self, row: usize) -> HashSet<usize> {
        let set = self.rows.remove(&row).unwrap_or_default();
        for &c in &set {
            remove_pruning(&mut self.cols, c, row);
        }
        set
    }

    fn put_row(&mut self, row: usize, set: HashSet<usize>) {
        if set.is_empty() {
            return;
        }
        for &c in &set {
            self.cols.entry(c).or_default().insert(row);
        }
        self.rows.insert(row, set);
    }

    /// Exchange the contents of two rows
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        let first = self.take_row(r1);
        let second = self.take_row(r2);
        self.put_row(r1, second);
        self.put_row(r2, first);
    }

    /// The same bits with rows and columns exchanged
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols.clone(),
            cols: self.rows.clone(),
        }
    }
}
