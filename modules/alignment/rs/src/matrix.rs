use std::ops::{Index, IndexMut};

use derive_getters::{Dissolve, Getters};

/// Dense row-major DP matrix backed by a single contiguous allocation.
///
/// Sentinel borders are part of the matrix dimensions, the builders bake them into their index
/// arithmetic.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        log::debug!("Allocating {rows}x{cols} DP matrix");
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    /// Returns the row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// The value in the bottom-right corner, i.e. the last computed cell.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "Cell ({row}, {col}) is outside of the {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}
