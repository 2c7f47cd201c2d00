//! Read-only views over model output tensors.
//!
//! `TensorView` is a borrowed 2-D view into a flat row-major buffer with an
//! explicit stride, matching how multi-array model outputs are laid out in
//! memory. The stride counts elements between the starts of consecutive rows,
//! so a stride larger than the column count represents rows with trailing
//! padding. The view never owns or mutates the buffer and cannot outlive it.

use crate::util::{DetPostError, DetPostResult};

/// Borrowed 2-D tensor view with an explicit row stride.
#[derive(Copy, Clone, Debug)]
pub struct TensorView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T> TensorView<'a, T> {
    /// Creates a contiguous view with `stride == cols`.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> DetPostResult<Self> {
        Self::new(data, rows, cols, cols)
    }

    /// Creates a view with an explicit row stride.
    ///
    /// A view with zero rows is valid and represents an inference call that
    /// produced no candidates.
    pub fn new(data: &'a [T], rows: usize, cols: usize, stride: usize) -> DetPostResult<Self> {
        if stride < cols {
            return Err(DetPostError::InvalidStride { cols, stride });
        }
        let needed = required_len(rows, cols, stride)?;
        if data.len() < needed {
            return Err(DetPostError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            stride,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the element at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.stride + col)
    }

    /// Returns a contiguous slice for `row` with length `cols`.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.stride;
        self.data.get(start..start + self.cols)
    }

    /// Iterates over the rows as contiguous slices of length `cols`.
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [T]> + 'a {
        let data = self.data;
        let cols = self.cols;
        let stride = self.stride;
        (0..self.rows).map(move |row| {
            let start = row * stride;
            &data[start..start + cols]
        })
    }
}

fn required_len(rows: usize, cols: usize, stride: usize) -> DetPostResult<usize> {
    if rows == 0 {
        return Ok(0);
    }
    (rows - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(cols))
        .ok_or(DetPostError::ShapeOverflow { rows, cols })
}
