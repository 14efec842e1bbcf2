//! Algebraic operations on [`Matrix`]. Every operation returns a new matrix or scalar.

use super::Matrix;
use crate::errors::LinalgError;
use crate::scalar::{Scalar, try_add};
use crate::vector::Vector;

impl<T: Scalar> Matrix<T> {
    /// Returns the transpose, `result[j][i] = self[i][j]`.
    ///
    /// The stored row and column views are swapped, nothing is recomputed.
    pub fn transpose(&self) -> Self {
        Self::from_parts(self.columns.clone(), self.rows.clone())
    }

    /// Multiplies every entry by `k`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::Overflow` if a product does not fit in `T`.
    pub fn scale(&self, k: &T) -> Result<Self, LinalgError> {
        let rows = self
            .rows
            .iter()
            .map(|row| row.scale(k))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_valid_rows(rows))
    }

    /// Computes the matrix product `C = AB`, `C[i][j] = A.rows[i] · B.columns[j]`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if `A` has not as many columns as `B` has rows.
    /// Returns `LinalgError::Overflow` if an entry does not fit in `T`.
    pub fn multiply(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.column_count() != other.row_count() {
            return Err(LinalgError::DimensionMismatch(format!(
                "Inner dimensions must match for matrix multiplication ({}x{} * {}x{})",
                self.row_count(),
                self.column_count(),
                other.row_count(),
                other.column_count()
            )));
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                other
                    .columns
                    .iter()
                    .map(|column| row.dot(column))
                    .collect::<Result<Vector<T>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_valid_rows(rows))
    }

    /// Returns a copy without row `i`. The remaining rows are shared, not copied.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if `i >= row_count`.
    /// Returns `LinalgError::Empty` if `i` is the only row.
    pub fn remove_row(&self, i: usize) -> Result<Self, LinalgError> {
        check_index(i, self.row_count(), "row")?;
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i)
            .map(|(_, row)| row.clone())
            .collect();

        Ok(Self::from_valid_rows(rows))
    }

    /// Returns a copy without column `j`, i.e. `transpose(remove_row(transpose(m), j))`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if `j >= column_count`.
    /// Returns `LinalgError::Empty` if `j` is the only column.
    pub fn remove_column(&self, j: usize) -> Result<Self, LinalgError> {
        check_index(j, self.column_count(), "column")?;
        Ok(self.transpose().remove_row(j)?.transpose())
    }

    /// The sub-matrix without row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Result<Self, LinalgError> {
        self.remove_column(j)?.remove_row(i)
    }

    /// Returns the order of the matrix if it is square.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::NotSquare` otherwise.
    pub fn assert_square(&self) -> Result<usize, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.row_count(),
                columns: self.column_count(),
            });
        }
        Ok(self.row_count())
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> Result<T, LinalgError> {
        let order = self.assert_square()?;
        (0..order).try_fold(T::zero(), |acc, i| try_add(&acc, &self.rows[i][i]))
    }

    /// `self` multiplied by itself `n - 1` times, strictly left to right: `((A·A)·A)·…`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidExponent` if `n == 0`.
    /// Returns `LinalgError::DimensionMismatch` if `n >= 2` and the matrix is not square.
    pub fn power(&self, n: u32) -> Result<Self, LinalgError> {
        if n == 0 {
            return Err(LinalgError::InvalidExponent(n));
        }

        let mut result = self.clone();
        for _ in 1..n {
            result = result.multiply(self)?;
        }
        Ok(result)
    }
}

fn check_index(index: usize, len: usize, axis: &'static str) -> Result<(), LinalgError> {
    if index >= len {
        return Err(LinalgError::IndexOutOfRange { index, len, axis });
    }
    if len == 1 {
        return Err(LinalgError::Empty(format!(
            "removing the only {} would leave an empty matrix",
            axis
        )));
    }
    Ok(())
}
