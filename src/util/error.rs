//! Error types for detpost.

use thiserror::Error;

/// Result alias for detpost operations.
pub type DetPostResult<T> = std::result::Result<T, DetPostError>;

/// Errors that can occur while post-processing model output.
///
/// The variants fall into two groups: malformed model output (inconsistent or
/// missing tensor data; the whole call fails with no partial results) and
/// invalid arguments (a threshold outside its documented range). Filtering
/// decisions such as "below the confidence threshold" are normal control
/// flow, never errors.
#[derive(Debug, Error, PartialEq)]
pub enum DetPostError {
    /// Box and confidence tensors disagree on the number of rows.
    #[error("malformed model output: {boxes} box rows vs {confidences} confidence rows")]
    RowCountMismatch { boxes: usize, confidences: usize },
    /// The box tensor does not carry the four leading coordinate columns.
    #[error("malformed model output: box tensor has {cols} columns, need at least 4")]
    BoxTensorTooNarrow { cols: usize },
    /// The confidence tensor has no class columns.
    #[error("malformed model output: confidence tensor has zero class columns")]
    NoClasses,
    /// A tensor stride is smaller than its column count.
    #[error("malformed model output: stride {stride} is smaller than column count {cols}")]
    InvalidStride { cols: usize, stride: usize },
    /// A tensor buffer is shorter than its declared shape requires.
    #[error("malformed model output: buffer holds {got} elements, shape needs {needed}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A tensor shape overflows the address space.
    #[error("malformed model output: shape {rows}x{cols} overflows")]
    ShapeOverflow { rows: usize, cols: usize },
    /// A threshold or cap parameter is outside its documented range.
    #[error("invalid argument: {name} = {value}")]
    InvalidArgument { name: &'static str, value: f32 },
}

impl DetPostError {
    /// True for errors caused by inconsistent or missing model output.
    pub fn is_malformed_output(&self) -> bool {
        !matches!(self, DetPostError::InvalidArgument { .. })
    }

    /// True for errors caused by an out-of-range caller parameter.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DetPostError::InvalidArgument { .. })
    }
}
