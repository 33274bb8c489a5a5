//! Compressed Sparse Row matrix.
//!
//! # Layout
//!
//! For a matrix with `rows` rows and `nnz` stored entries:
//! - `row_ptr` has length `rows + 1`
//! - `col_indices` and `values` each have length `nnz`
//! - row `i` spans `row_ptr[i] .. row_ptr[i + 1]`, columns ascending

#[derive(Debug, Clone, Default)]
pub struct CsrMatrix {
    pub row_ptr:     Vec<usize>,
    pub col_indices: Vec<usize>,
    pub values:      Vec<f64>,
    pub rows:        usize,
    pub cols:        usize,
}

impl CsrMatrix {
    /// Build from `(row, col, value)` triplets.  Duplicates are summed.
    pub fn from_triplets(rows: usize, cols: usize, mut entries: Vec<(usize, usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(r, c, _)| (r, c));

        let mut row_ptr = vec![0usize; rows + 1];
        let mut col_indices = Vec::with_capacity(entries.len());
        let mut values: Vec<f64> = Vec::with_capacity(entries.len());
        let mut last: Option<(usize, usize)> = None;

        for (r, c, v) in entries {
            debug_assert!(r < rows && c < cols, "triplet ({r}, {c}) outside {rows}x{cols}");
            if last == Some((r, c)) {
                if let Some(tail) = values.last_mut() {
                    *tail += v;
                }
                continue;
            }
            last = Some((r, c));
            row_ptr[r + 1] += 1;
            col_indices.push(c);
            values.push(v);
        }
        for i in 1..=rows {
            row_ptr[i] += row_ptr[i - 1];
        }

        Self { row_ptr, col_indices, values, rows, cols }
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// `(col, value)` pairs of row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let span = self.row_ptr[i]..self.row_ptr[i + 1];
        self.col_indices[span.clone()].iter().copied().zip(self.values[span].iter().copied())
    }

    /// Entry `(i, j)`, zero when not stored.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let span = self.row_ptr[i]..self.row_ptr[i + 1];
        match self.col_indices[span.clone()].binary_search(&j) {
            Ok(k) => self.values[span.start + k],
            Err(_) => 0.0,
        }
    }

    /// Sum of the entries of row `i`.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).map(|(_, v)| v).sum()
    }

    /// `sum_j A[i, j] * x[j]` for one row.
    #[inline]
    pub fn row_dot(&self, i: usize, x: &[f64]) -> f64 {
        self.row(i).map(|(j, v)| v * x[j]).sum()
    }

    /// Sparse matrix-vector multiply: `y = A * x`.
    pub fn spmv(&self, x: &[f64], y: &mut [f64]) {
        debug_assert!(x.len() >= self.cols, "spmv: x.len()={} < cols={}", x.len(), self.cols);
        debug_assert!(y.len() >= self.rows, "spmv: y.len()={} < rows={}", y.len(), self.rows);
        for (i, yi) in y.iter_mut().enumerate().take(self.rows) {
            *yi = self.row_dot(i, x);
        }
    }

    /// Dense copy, row-major.  Intended for small systems and tests.
    pub fn to_dense(&self) -> Vec<Vec<f64>> {
        let mut dense = vec![vec![0.0; self.cols]; self.rows];
        for (i, row) in dense.iter_mut().enumerate() {
            for (j, v) in self.row(i) {
                row[j] = v;
            }
        }
        dense
    }
}
