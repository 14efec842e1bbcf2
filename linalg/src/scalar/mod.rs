//! # Scalar Module
//!
//! Provides the [`Scalar`] trait, implemented by the exact numeric types that may populate a
//! [`Vector`](crate::vector::Vector) or a [`Matrix`](crate::matrix::Matrix).
//!
//! All arithmetic goes through the checked operations of `num-traits`. Fixed-width types
//! (`i64`, `i128`, `Rational64`) report `LinalgError::Overflow` instead of wrapping or panicking;
//! `BigInt` and `BigRational` never overflow.

use crate::determinant::DeterminantCache;
use crate::errors::LinalgError;

use lazy_static::lazy_static;

use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, ToPrimitive, Zero};

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

/// An exact numeric value usable as a vector or matrix entry.
pub trait Scalar:
    Clone
    + Eq
    + Hash
    + Debug
    + Display
    + Zero
    + One
    + ToPrimitive
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + Send
    + Sync
    + 'static
{
    /// Process-wide determinant cache shared by every matrix over this scalar type.
    ///
    /// Unbounded and never evicted. Long-running processes should prefer
    /// [`Matrix::determinant_with`](crate::matrix::Matrix::determinant_with) and a scoped cache.
    fn determinant_cache() -> &'static DeterminantCache<Self>;
}

/// `a + b`, or `LinalgError::Overflow` if the sum does not fit in `T`.
pub(crate) fn try_add<T: Scalar>(a: &T, b: &T) -> Result<T, LinalgError> {
    a.checked_add(b).ok_or_else(|| overflow(a, "+", b))
}

/// `a - b`, or `LinalgError::Overflow` if the difference does not fit in `T`.
pub(crate) fn try_sub<T: Scalar>(a: &T, b: &T) -> Result<T, LinalgError> {
    a.checked_sub(b).ok_or_else(|| overflow(a, "-", b))
}

/// `a * b`, or `LinalgError::Overflow` if the product does not fit in `T`.
pub(crate) fn try_mul<T: Scalar>(a: &T, b: &T) -> Result<T, LinalgError> {
    a.checked_mul(b).ok_or_else(|| overflow(a, "*", b))
}

fn overflow<T: Scalar>(a: &T, op: &str, b: &T) -> LinalgError {
    LinalgError::Overflow(format!(
        "{} {} {} does not fit in {}",
        a,
        op,
        b,
        std::any::type_name::<T>()
    ))
}

macro_rules! impl_scalar {
    ($($ty:ty => $cache:ident),* $(,)?) => {
        lazy_static! {
            $(static ref $cache: DeterminantCache<$ty> = DeterminantCache::new();)*
        }

        $(
            impl Scalar for $ty {
                fn determinant_cache() -> &'static DeterminantCache<Self> {
                    &$cache
                }
            }
        )*
    };
}

impl_scalar! {
    i64 => I64_DETERMINANTS,
    i128 => I128_DETERMINANTS,
    BigInt => BIG_INT_DETERMINANTS,
    Rational64 => RATIONAL64_DETERMINANTS,
    BigRational => BIG_RATIONAL_DETERMINANTS,
}
