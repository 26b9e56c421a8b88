use thiserror::Error;

/// Errors raised by the TF-IDF side of the pipeline.
/// Counting never fails; everything here comes from a count matrix that
/// cannot be turned into frequencies, or from decoding persisted state.
#[derive(Debug, Error)]
pub enum VectorizerError {
    /// A document without tokens reached the TF step.
    /// TF is `count / row_sum`, so a zero row sum is a division by zero.
    #[error("division by zero: row {row} of the count matrix has no tokens")]
    ZeroRowSum { row: usize },
    /// The transformer needs at least one row to know the column count.
    #[error("count matrix has no rows")]
    EmptyMatrix,
    #[error("count matrix row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Cbor(#[from] serde_cbor::Error),
}

pub type Result<T> = std::result::Result<T, VectorizerError>;
