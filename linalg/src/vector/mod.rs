//! # Vector Module
//!
//! Provides the [`Vector`] type: a fixed-length sequence of exact scalars.

use crate::errors::LinalgError;
use crate::scalar::{Scalar, try_add, try_mul};

use itertools::Itertools;

use num_rational::BigRational;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// An immutable, fixed-length vector of exact scalars.
///
/// Cloning is cheap: the scalars live behind an `Arc`, so matrices and their minors share rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    scalars: Arc<[T]>,
}

impl<T> Vector<T> {
    pub fn new(scalars: Vec<T>) -> Self {
        Self {
            scalars: scalars.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.scalars.get(index)
    }

    pub fn scalars(&self) -> &[T] {
        &self.scalars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.scalars.iter()
    }
}

impl<T: Scalar> Vector<T> {
    /// Computes the elementwise sum `a + b`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the vectors have different lengths.
    /// Returns `LinalgError::Overflow` if a component does not fit in `T`.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_len(other, "addition")?;
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| try_add(a, b))
            .collect()
    }

    /// Computes `a - b` as `a + (-1 * b)`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the vectors have different lengths.
    /// Returns `LinalgError::Overflow` if a component does not fit in `T`.
    pub fn subtract(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_len(other, "subtraction")?;
        self.add(&other.scale(&-T::one())?)
    }

    /// Multiplies every component by `k`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::Overflow` if a product does not fit in `T`; never for big types.
    pub fn scale(&self, k: &T) -> Result<Self, LinalgError> {
        self.iter().map(|s| try_mul(s, k)).collect()
    }

    /// Computes the dot product `∑ a[i]·b[i]`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the vectors have different lengths.
    /// Returns `LinalgError::Overflow` if a product or partial sum does not fit in `T`.
    pub fn dot(&self, other: &Self) -> Result<T, LinalgError> {
        self.check_same_len(other, "dot product")?;
        self.iter()
            .zip(other.iter())
            .try_fold(T::zero(), |acc, (a, b)| try_add(&acc, &try_mul(a, b)?))
    }

    /// Euclidean norm `sqrt(v·v)`.
    ///
    /// The square root is taken in `f64` and the float is converted back to the rational it
    /// exactly represents. Perfect squares of moderate size come back exact; irrational norms
    /// are approximations at machine precision, not symbolic values.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::NormNotRepresentable` if `v·v` has no finite `f64` value.
    /// Returns `LinalgError::Overflow` if `v·v` does not fit in `T`.
    pub fn norm(&self) -> Result<BigRational, LinalgError> {
        let squared = self.dot(self)?;
        let approx = squared
            .to_f64()
            .filter(|value| value.is_finite())
            .ok_or_else(|| {
                LinalgError::NormNotRepresentable(format!(
                    "sum of squares {} has no finite f64 value",
                    squared
                ))
            })?;

        BigRational::from_float(approx.sqrt()).ok_or_else(|| {
            LinalgError::NormNotRepresentable(format!(
                "square root of {} is not a finite number",
                squared
            ))
        })
    }

    fn check_same_len(&self, other: &Self, operation: &str) -> Result<(), LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch(format!(
                "Vector lengths must match for {} ({} vs {})",
                operation,
                self.len(),
                other.len()
            )));
        }
        Ok(())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(scalars: Vec<T>) -> Self {
        Self::new(scalars)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            scalars: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.scalars[index]
    }
}

/// Scalars separated by single spaces, e.g. `1 2 3`.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalars.iter().join(" "))
    }
}
