//! # Determinant Module
//!
//! Laplace (cofactor) expansion along the first row, memoized through a [`DeterminantCache`].
//!
//! The expansion is exponential in the matrix order; the cache collapses repeated minors but
//! does not change that bound. Exactness over any [`Scalar`] is the point, not speed.

pub mod cache;

pub use cache::{CacheStats, DeterminantCache, DeterminantConfig};

use crate::errors::LinalgError;
use crate::matrix::Matrix;
use crate::scalar::{Scalar, try_add, try_mul, try_sub};

use log::{debug, trace};

impl<T: Scalar> Matrix<T> {
    /// Determinant using the process-wide cache of `T` (see [`Scalar::determinant_cache`]).
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::NotSquare` if the matrix is not square.
    pub fn determinant(&self) -> Result<T, LinalgError> {
        self.determinant_with(T::determinant_cache())
    }

    /// Determinant using a caller-owned cache and its limits.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::NotSquare` if the matrix is not square.
    /// Returns `LinalgError::TooLarge` if the order exceeds the cache's `max_order`.
    /// Returns `LinalgError::Overflow` if a partial result does not fit in `T`.
    pub fn determinant_with(&self, cache: &DeterminantCache<T>) -> Result<T, LinalgError> {
        let order = self.assert_square()?;
        if let Some(max_order) = cache.config().max_order {
            if order > max_order {
                return Err(LinalgError::TooLarge { order, max_order });
            }
        }

        debug!(
            "determinant of order {} ({} cached entries)",
            order,
            cache.len()
        );
        expand(self, cache)
    }
}

fn expand<T: Scalar>(matrix: &Matrix<T>, cache: &DeterminantCache<T>) -> Result<T, LinalgError> {
    let key = matrix.flatten();
    if let Some(det) = cache.get(&key) {
        trace!("determinant cache hit for order {}", matrix.row_count());
        return Ok(det);
    }

    let det = match matrix.row_count() {
        1 => key[0].clone(),
        2 => try_sub(&try_mul(&key[0], &key[3])?, &try_mul(&key[1], &key[2])?)?,
        order => {
            let top = &matrix.rows()[0];
            let mut sum = T::zero();
            for j in 0..order {
                let term = try_mul(&top[j], &expand(&matrix.minor(0, j)?, cache)?)?;
                sum = if j % 2 == 0 {
                    try_add(&sum, &term)?
                } else {
                    try_sub(&sum, &term)?
                };
            }
            sum
        }
    };

    cache.insert(key, det.clone());
    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigInt;
    use num_rational::{BigRational, Rational64};

    fn m(rows: &[&[i64]]) -> Matrix<i64> {
        Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_determinant_small() -> Result<(), LinalgError> {
        let cache = DeterminantCache::new();
        assert_eq!(m(&[&[7]]).determinant_with(&cache)?, 7);
        assert_eq!(m(&[&[1, 2], &[3, 4]]).determinant_with(&cache)?, -2);
        assert_eq!(m(&[&[3, 4], &[1, 2]]).determinant_with(&cache)?, 2);
        Ok(())
    }

    #[test]
    fn test_determinant_expansion() -> Result<(), LinalgError> {
        let cache = DeterminantCache::new();
        let a = m(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 2]]);
        assert_eq!(a.determinant_with(&cache)?, 6);

        let b = m(&[
            &[1, 0, 2, -1],
            &[3, 0, 0, 5],
            &[2, 1, 4, -3],
            &[1, 0, 5, 0],
        ]);
        assert_eq!(b.determinant_with(&cache)?, 30);

        let singular = m(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(singular.determinant_with(&cache)?, 0);
        Ok(())
    }

    #[test]
    fn test_determinant_not_square() {
        let cache = DeterminantCache::new();
        let err = m(&[&[1, 2, 3], &[4, 5, 6]]).determinant_with(&cache).unwrap_err();
        assert!(matches!(err, LinalgError::NotSquare { rows: 2, columns: 3 }));
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_determinant_too_large() -> Result<(), LinalgError> {
        let cache = DeterminantCache::with_config(DeterminantConfig::try_with(Some(2), None)?);
        let err = Matrix::<i64>::unit(3)?.determinant_with(&cache).unwrap_err();
        assert!(matches!(err, LinalgError::TooLarge { order: 3, max_order: 2 }));
        assert!(cache.is_empty());
        assert_eq!(Matrix::<i64>::unit(2)?.determinant_with(&cache)?, 1);
        Ok(())
    }

    #[test]
    fn test_fixed_width_overflow_is_an_error() -> Result<(), LinalgError> {
        let cache = DeterminantCache::new();
        let a = m(&[&[3_037_000_500, 0], &[0, 3_037_000_500]]);
        assert!(matches!(
            a.determinant_with(&cache),
            Err(LinalgError::Overflow(_))
        ));
        assert!(cache.is_empty());

        let wide = Matrix::from_rows(vec![
            vec![3_037_000_500i128, 0],
            vec![0, 3_037_000_500],
        ])?;
        assert_eq!(wide.determinant_with(&DeterminantCache::new())?, 3_037_000_500i128.pow(2));
        Ok(())
    }

    #[test]
    fn test_repeated_calls_hit_the_cache() -> Result<(), LinalgError> {
        let cache = DeterminantCache::new();
        let first = m(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 2]]);
        assert_eq!(first.determinant_with(&cache)?, 6);
        // one 3x3 and three distinct 2x2 minors
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 0,
                misses: 4,
                entries: 4
            }
        );

        let rebuilt = Matrix::from_function(3, 3, |i, j| first.rows()[i][j])?;
        assert_eq!(rebuilt.determinant_with(&cache)?, 6);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 4,
                entries: 4
            }
        );
        Ok(())
    }

    #[test]
    fn test_shared_minors_are_computed_once() -> Result<(), LinalgError> {
        let cache = DeterminantCache::new();
        let ones = Matrix::<i64>::ones(3, 3)?;
        assert_eq!(ones.determinant_with(&cache)?, 0);
        // every minor of the all-ones matrix is the same 2x2 block
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 2,
                misses: 2,
                entries: 2
            }
        );
        Ok(())
    }

    #[test]
    fn test_bounded_cache_still_correct() -> Result<(), LinalgError> {
        let cache = DeterminantCache::with_config(DeterminantConfig::try_with(None, Some(1))?);
        let b = m(&[
            &[1, 0, 2, -1],
            &[3, 0, 0, 5],
            &[2, 1, 4, -3],
            &[1, 0, 5, 0],
        ]);
        assert_eq!(b.determinant_with(&cache)?, 30);
        assert_eq!(b.determinant_with(&cache)?, 30);
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    #[test]
    fn test_global_cache_is_used() -> Result<(), LinalgError> {
        let a = m(&[&[11, 3, 5], &[-7, 2, 13], &[4, 9, -6]]);
        let det = a.determinant()?;
        let before = i64::determinant_cache().stats().hits;
        assert_eq!(a.determinant()?, det);
        assert!(i64::determinant_cache().stats().hits > before);
        Ok(())
    }

    #[test]
    fn test_determinant_over_rationals() -> Result<(), LinalgError> {
        let r = |n, d| Rational64::new(n, d);
        let a = Matrix::from_rows(vec![vec![r(1, 2), r(1, 3)], vec![r(1, 4), r(1, 5)]])?;
        let cache = DeterminantCache::new();
        // 1/10 - 1/12
        assert_eq!(a.determinant_with(&cache)?, r(1, 60));

        let big = Matrix::<BigRational>::unit(4)?
            .scale(&BigRational::new(BigInt::from(3), BigInt::from(2)))?;
        assert_eq!(
            big.determinant()?,
            BigRational::new(BigInt::from(81), BigInt::from(16))
        );
        Ok(())
    }

    #[test]
    fn test_concurrent_callers_agree() -> Result<(), LinalgError> {
        let cache = DeterminantCache::new();
        let a = Matrix::from_function(5, 5, |i, j| ((i * 7 + j * 3) % 11) as i64 - 5)?;
        let expected = a.determinant_with(&DeterminantCache::new())?;

        let results = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| a.determinant_with(&cache)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("determinant thread panicked"))
                .collect::<Result<Vec<i64>, LinalgError>>()
        })?;

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|&det| det == expected));
        Ok(())
    }
}
