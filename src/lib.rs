/// This crate turns a small text corpus into bag-of-words counts and TF-IDF weights.
pub mod error;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Vectorizer
/// The top-level struct of this crate: corpus in, TF-IDF matrix out.
///
/// Internally, it holds:
/// - A `CountVectorizer` owning the vocabulary
/// - A `TfidfTransformer` doing the weighting
/// - The IDF vector of the last fit
///
/// Every TF, IDF and TF-IDF value is rounded to 3 decimals by default
/// (configurable through `VectorizerParams`). The product is rounded again
/// after multiplying the rounded TF with the rounded IDF.
///
/// # Serialization
/// Supported, without the engine.
/// Deserialize into `VectorizerData` and call `into_tf_idf_vectorizer`.
pub use vectorizer::TfidfVectorizer;

/// Vocabulary Builder / Counter
/// Splits documents on whitespace, lowercases tokens and assigns columns in
/// first-seen order. Produces a dense count matrix, one row per document.
///
/// By default the vocabulary accumulates over repeated `fit_transform` calls
/// on one instance; `FitMode::Reset` starts every call from scratch.
pub use vectorizer::count::CountVectorizer;

/// TF-IDF Transformer
/// Count matrix to TF matrix, IDF vector and TF-IDF matrix.
///
/// `TFIDFEngine` holds the per-value formulas so other weighting schemes can
/// be plugged in. `DefaultTFIDFEngine` implements
/// `tf = count / row_sum` and `idf = 1 + ln((D + 1) / (df + 1))`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine, TfidfTransformer};

/// Vectorizer configuration
/// - `FitMode`: accumulate or reset the vocabulary between calls
/// - `decimals`: digits kept at each rounding step
pub use vectorizer::params::{FitMode, VectorizerParams};

/// Serializable fitted state of a `TfidfVectorizer`
pub use vectorizer::serde::VectorizerData;

/// Token Frequency structure
/// Per-document token counts in first-seen order.
pub use vectorizer::token::{tokenize, TokenFrequency};

pub use vectorizer::corpus::CorpusStats;
pub use vectorizer::matrix::{CountMatrix, WeightMatrix};
pub use vectorizer::vocabulary::Vocabulary;

pub use error::{Result, VectorizerError};
