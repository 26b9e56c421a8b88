use crate::error::{Result, VectorizerError};

/// Dense token counts, one row per document
pub type CountMatrix = Vec<Vec<u32>>;

/// Dense TF or TF-IDF weights, one row per document
pub type WeightMatrix = Vec<Vec<f64>>;

/// Check that `matrix` has at least one row and that every row is as wide as
/// the first one. Returns that width.
///
/// The counter always produces such matrices; this guards matrices handed to
/// the transformer from elsewhere.
pub fn validate_shape<N>(matrix: &[Vec<N>]) -> Result<usize> {
    let first = matrix.first().ok_or(VectorizerError::EmptyMatrix)?;
    let expected = first.len();
    for (row, values) in matrix.iter().enumerate().skip(1) {
        if values.len() != expected {
            return Err(VectorizerError::RaggedRow {
                row,
                expected,
                found: values.len(),
            });
        }
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rectangular_matrix() {
        assert_eq!(validate_shape(&[vec![1u32, 2], vec![0, 3]]).unwrap(), 2);
        assert_eq!(validate_shape(&[Vec::<u32>::new()]).unwrap(), 0);
    }

    #[test]
    fn rejects_empty_matrix() {
        let empty: CountMatrix = Vec::new();
        assert!(matches!(validate_shape(&empty), Err(VectorizerError::EmptyMatrix)));
    }

    #[test]
    fn reports_first_ragged_row() {
        let matrix = vec![vec![1u32, 1], vec![1, 1], vec![1], vec![1, 1, 1]];
        match validate_shape(&matrix) {
            Err(VectorizerError::RaggedRow { row, expected, found }) => {
                assert_eq!((row, expected, found), (2, 2, 1));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
