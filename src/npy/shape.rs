use std::fmt;
use std::mem;

use crate::error::{NpyError, Result};

/// Dimensions of a rectangular 2d array, rows first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    /// number of rows
    pub rows: usize,
    /// number of columns, i.e. the length of every row
    pub cols: usize,
}

impl Shape {
    /// Measure `arr` and check that it can be written.
    ///
    /// The column count is taken from the first row; every other row must
    /// have the same length. Zero rows or zero columns are rejected.
    pub fn of<R: AsRef<[f32]>>(arr: &[R]) -> Result<Shape> {
        let rows = arr.len();
        let cols = arr.first().map_or(0, |row| row.as_ref().len());
        if rows == 0 || cols == 0 {
            warn!("refusing to encode empty array ({} x {})", rows, cols);
            return Err(NpyError::EmptyArray { rows, cols });
        }

        for (row, r) in arr.iter().enumerate().skip(1) {
            let found = r.as_ref().len();
            if found != cols {
                warn!("row {} has {} columns, expected {}", row, found, cols);
                return Err(NpyError::RaggedArray { row, expected: cols, found });
            }
        }

        Ok(Shape { rows, cols })
    }

    /// total number of elements
    pub fn num_elements(&self) -> usize {
        self.rows * self.cols
    }

    /// size of the raw data section in bytes
    pub fn payload_len(&self) -> usize {
        self.num_elements() * mem::size_of::<f32>()
    }
}

/// python tuple notation, no space after the comma: `(2,3)`
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.rows, self.cols)
    }
}
