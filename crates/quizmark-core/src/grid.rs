//! Flat dynamic-programming table shared by the scorer and the aligner.

/// A `rows x cols` table stored row-major in one allocation.
pub(crate) struct Grid {
    cells: Vec<usize>,
    cols: usize,
}

impl Grid {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }
}
