//! # Matrix Module
//!
//! Provides the [`Matrix`] type: a rectangular, immutable matrix of exact scalars stored as row
//! [`Vector`]s together with a derived column view.

pub mod ops;

use crate::errors::LinalgError;
use crate::scalar::Scalar;
use crate::vector::Vector;

use itertools::Itertools;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Rectangular matrix over an exact scalar type.
///
/// `columns` always equals the rows of the transpose. It is computed once when a matrix is built
/// from rows and handed over as-is on transposition, which makes [`Matrix::transpose`] O(1).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vector<T>>", into = "Vec<Vector<T>>")]
#[serde(bound(
    serialize = "T: Scalar + Serialize",
    deserialize = "T: Scalar + Deserialize<'de>"
))]
pub struct Matrix<T> {
    rows: Arc<[Vector<T>]>,
    columns: Arc<[Vector<T>]>,
}

impl<T: Scalar> Matrix<T> {
    /// Builds a matrix from its rows and derives the column view.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::Empty` if there are no rows or the rows have no scalars.
    /// Returns `LinalgError::DimensionMismatch` if the rows have different lengths.
    pub fn new(rows: Vec<Vector<T>>) -> Result<Self, LinalgError> {
        let Some(first) = rows.first() else {
            return Err(LinalgError::Empty(
                "a matrix needs at least one row".to_string(),
            ));
        };
        let width = first.len();
        if width == 0 {
            return Err(LinalgError::Empty(
                "a matrix needs at least one column".to_string(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LinalgError::DimensionMismatch(format!(
                    "Row {} has length {} but expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        Ok(Self::from_valid_rows(rows))
    }

    /// Same as [`Matrix::new`] for plain nested `Vec`s.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        Self::new(rows.into_iter().map(Vector::from).collect())
    }

    /// Builds a `rows × columns` matrix with `entry[i][j] = f(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::Empty` if either dimension is zero.
    pub fn from_function<F>(rows: usize, columns: usize, mut f: F) -> Result<Self, LinalgError>
    where
        F: FnMut(usize, usize) -> T,
    {
        if rows == 0 || columns == 0 {
            return Err(LinalgError::Empty(format!(
                "cannot build a {}x{} matrix",
                rows, columns
            )));
        }
        let rows = (0..rows)
            .map(|i| (0..columns).map(|j| f(i, j)).collect())
            .collect();

        Ok(Self::from_valid_rows(rows))
    }

    pub fn zeros(rows: usize, columns: usize) -> Result<Self, LinalgError> {
        Self::from_function(rows, columns, |_, _| T::zero())
    }

    pub fn ones(rows: usize, columns: usize) -> Result<Self, LinalgError> {
        Self::from_function(rows, columns, |_, _| T::one())
    }

    /// The `n × n` identity matrix.
    pub fn unit(n: usize) -> Result<Self, LinalgError> {
        Self::from_function(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Caller guarantees a non-empty, rectangular set of rows.
    pub(crate) fn from_valid_rows(rows: Vec<Vector<T>>) -> Self {
        let width = rows.first().map_or(0, Vector::len);
        let columns: Vec<Vector<T>> = (0..width)
            .map(|j| rows.iter().map(|row| row[j].clone()).collect())
            .collect();

        Self::from_parts(rows.into(), columns.into())
    }

    /// Pairs rows with an already known column view; no recomputation.
    pub(crate) fn from_parts(rows: Arc<[Vector<T>]>, columns: Arc<[Vector<T>]>) -> Self {
        Self { rows, columns }
    }

    /// `(row_count, column_count)`.
    pub fn size(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_square(&self) -> bool {
        self.row_count() == self.column_count()
    }

    pub fn rows(&self) -> &[Vector<T>] {
        &self.rows
    }

    pub fn columns(&self) -> &[Vector<T>] {
        &self.columns
    }

    pub fn row(&self, i: usize) -> Option<&Vector<T>> {
        self.rows.get(i)
    }

    pub fn column(&self, j: usize) -> Option<&Vector<T>> {
        self.columns.get(j)
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.rows.get(i).and_then(|row| row.get(j))
    }

    /// All scalars in row-major order.
    pub fn flatten(&self) -> Vec<T> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().cloned())
            .collect()
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: Hash> Hash for Matrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
    }
}

impl<T: Scalar> TryFrom<Vec<Vector<T>>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vector<T>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl<T: Clone> From<Matrix<T>> for Vec<Vector<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.rows.to_vec()
    }
}

/// One line per row, scalars separated by single spaces.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.iter().join("\n"))
    }
}
