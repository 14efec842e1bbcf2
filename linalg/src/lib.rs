//! # Exact Linalg
//!
//! Dense vectors and matrices over exact scalars (integers and rationals): addition, scalar and
//! matrix multiplication, transpose, row/column removal, trace, memoized cofactor determinant,
//! integer powers and a rational Euclidean norm.
//!
//! ```
//! # use exact_linalg::{LinalgError, Matrix};
//! let m = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]])?;
//! assert_eq!(m.determinant()?, -2);
//! assert_eq!(m.transpose().to_string(), "1 3\n2 4");
//! # Ok::<(), LinalgError>(())
//! ```

pub mod codec;
pub mod determinant;
pub mod errors;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use determinant::{CacheStats, DeterminantCache, DeterminantConfig};
pub use errors::LinalgError;
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use vector::Vector;
