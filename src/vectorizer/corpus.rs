use num::Num;
use serde::{Deserialize, Serialize};

use crate::{error::Result, vectorizer::matrix::validate_shape};

/// keep document count and per-column document frequency
///
/// Built from a count matrix; it is the input of the IDF calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// number of documents (rows)
    doc_num: u64,
    /// doc_freq[i] = number of rows with a non-zero entry in column i
    doc_freq: Vec<u64>,
}

impl CorpusStats {
    /// Count document frequencies column by column.
    /// The width comes from the first row; every other row must match it.
    pub fn from_counts<N>(count_matrix: &[Vec<N>]) -> Result<Self>
    where
        N: Num + Copy,
    {
        let width = validate_shape(count_matrix)?;
        let mut stats = Self {
            doc_num: 0,
            doc_freq: vec![0; width],
        };
        for row in count_matrix {
            stats.add_row(row);
        }
        Ok(stats)
    }

    /// Add one document's counts
    fn add_row<N>(&mut self, row: &[N])
    where
        N: Num + Copy,
    {
        self.doc_num += 1;
        for (df, value) in self.doc_freq.iter_mut().zip(row) {
            if !value.is_zero() {
                *df += 1;
            }
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of column `idx`
    #[inline]
    pub fn doc_freq(&self, idx: usize) -> Option<u64> {
        self.doc_freq.get(idx).copied()
    }

    #[inline]
    pub fn doc_freqs(&self) -> &[u64] {
        &self.doc_freq
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.doc_freq.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorizerError;

    #[test]
    fn counts_rows_with_nonzero_entries() {
        let counts = vec![vec![1u32, 2, 0], vec![0, 5, 0], vec![3, 1, 0]];
        let stats = CorpusStats::from_counts(&counts).unwrap();

        assert_eq!(stats.doc_num(), 3);
        assert_eq!(stats.doc_freqs(), &[2, 3, 0]);
        assert_eq!(stats.doc_freq(1), Some(3));
        assert_eq!(stats.doc_freq(3), None);
        assert_eq!(stats.width(), 3);
    }

    #[test]
    fn counts_repeated_tokens_once_per_document() {
        let stats = CorpusStats::from_counts(&[vec![7u8]]).unwrap();
        assert_eq!(stats.doc_freqs(), &[1]);
    }

    #[test]
    fn rejects_malformed_matrices() {
        let empty: Vec<Vec<u32>> = Vec::new();
        assert!(matches!(
            CorpusStats::from_counts(&empty),
            Err(VectorizerError::EmptyMatrix)
        ));
        assert!(matches!(
            CorpusStats::from_counts(&[vec![1u32, 0], vec![1]]),
            Err(VectorizerError::RaggedRow { row: 1, .. })
        ));
    }
}
