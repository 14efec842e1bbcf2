#[derive(thiserror::Error, Debug)]
pub enum LinalgError {
    /// Operand shapes are incompatible (vector lengths, inner matrix dimensions, ragged rows).
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Trace or determinant requested on a rectangular matrix.
    #[error("NotSquare: matrix is {rows}x{columns}, expected a square matrix")]
    NotSquare { rows: usize, columns: usize },
    /// Row or column removal outside of `0..len`.
    #[error("IndexOutOfRange: {axis} index {index} is out of range for length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        axis: &'static str,
    },
    #[error("Empty: {0}")]
    Empty(String),
    #[error("TooLarge: determinant of order {order} exceeds the configured maximum of {max_order}")]
    TooLarge { order: usize, max_order: usize },
    /// A fixed-width scalar could not hold an intermediate or final result.
    #[error("Overflow: {0}")]
    Overflow(String),
    #[error("InvalidExponent: power must be >= 1, got {0}")]
    InvalidExponent(u32),
    #[error("NormNotRepresentable: {0}")]
    NormNotRepresentable(String),
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),

    #[error("Data serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
