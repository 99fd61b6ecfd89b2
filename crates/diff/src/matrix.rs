use crate::error::DiffError;

/// A resizable dense 2-D store used for the edit value and action tables
///
/// The backing buffer is grow-only: shrinking a matrix keeps the larger
/// allocation around for the next comparison, so repeated runs over
/// similarly sized inputs reuse one allocation.
#[derive(Debug, Clone, Default)]
pub(crate) struct Matrix<T> {
    buf: Vec<T>,
    cols: usize,
}

impl<T: Copy + Default> Matrix<T> {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            cols: 0,
        }
    }

    /// Resize the matrix to (rows, cols) and clear all cells
    ///
    /// Allocation failure is reported to the caller instead of aborting,
    /// since full-path tables grow as the product of the input lengths.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), DiffError> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(DiffError::TableAlloc { rows, cols })?;
        if cells > self.buf.capacity() {
            let extra = cells - self.buf.len();
            self.buf
                .try_reserve(extra)
                .map_err(|_| DiffError::TableAlloc { rows, cols })?;
        }
        self.buf.clear();
        self.buf.resize(cells, T::default());
        self.cols = cols;
        Ok(())
    }

    /// Get the value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < self.cols);
        self.buf[row * self.cols + col]
    }

    /// Set the value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, val: T) {
        debug_assert!(col < self.cols);
        self.buf[row * self.cols + col] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_clears() {
        let mut mat: Matrix<usize> = Matrix::new();
        mat.resize(2, 3).unwrap();
        mat.set(1, 2, 42);
        assert_eq!(mat.get(1, 2), 42);

        mat.resize(3, 2).unwrap();
        for row in 0..3 {
            for col in 0..2 {
                assert_eq!(mat.get(row, col), 0);
            }
        }
    }

    #[test]
    fn test_single_row() {
        let mut mat: Matrix<usize> = Matrix::new();
        mat.resize(1, 5).unwrap();
        for col in 0..5 {
            mat.set(0, col, col);
        }
        assert_eq!(mat.get(0, 4), 4);
    }

    #[test]
    fn test_overflowing_dimensions() {
        let mut mat: Matrix<usize> = Matrix::new();
        let err = mat.resize(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, DiffError::TableAlloc { .. }));
    }
}
