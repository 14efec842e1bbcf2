//! JSON encoding of matrices. A matrix is written as its list of rows, e.g. `[[1,2],[3,4]]`;
//! decoding rebuilds the column view and re-validates the shape.

use crate::errors::LinalgError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn to_json<T: Scalar + Serialize>(matrix: &Matrix<T>) -> Result<String, LinalgError> {
    Ok(serde_json::to_string(matrix)?)
}

/// # Errors
///
/// Returns `LinalgError::Serialization` for malformed JSON and for rows that do not form a
/// non-empty rectangular matrix.
pub fn from_json<T: Scalar + DeserializeOwned>(json: &str) -> Result<Matrix<T>, LinalgError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_rational::Rational64;

    #[test]
    fn test_matrix_is_written_as_rows() -> Result<(), LinalgError> {
        let m = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]])?;
        assert_eq!(to_json(&m)?, "[[1,2],[3,4]]");
        Ok(())
    }

    #[test]
    fn test_decoding_derives_columns() -> Result<(), LinalgError> {
        let m: Matrix<i64> = from_json("[[1,2,3],[4,5,6]]")?;
        assert_eq!(m.size(), (2, 3));
        assert_eq!(m.columns()[2].scalars(), &[3, 6]);
        Ok(())
    }

    #[test]
    fn test_decoding_rejects_ragged_rows() {
        let err = from_json::<i64>("[[1,2],[3]]").unwrap_err();
        assert!(matches!(err, LinalgError::Serialization(_)));
        assert!(err.to_string().contains("DimensionMismatch"));

        assert!(from_json::<i64>("[]").is_err());
        assert!(from_json::<i64>("not json").is_err());
    }

    #[test]
    fn test_rationals_survive_encoding() -> Result<(), LinalgError> {
        let m = Matrix::from_rows(vec![vec![Rational64::new(1, 3), Rational64::new(-2, 5)]])?;
        assert_eq!(from_json::<Rational64>(&to_json(&m)?)?, m);
        Ok(())
    }
}
