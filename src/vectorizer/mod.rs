pub mod corpus;
pub mod count;
pub mod matrix;
pub mod params;
pub mod serde;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use log::debug;

use crate::{
    error::Result,
    vectorizer::{
        count::CountVectorizer,
        matrix::{CountMatrix, WeightMatrix},
        params::VectorizerParams,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine, TfidfTransformer},
    },
};

/// Corpus to TF-IDF matrix in one call.
///
/// Owns a `CountVectorizer` for the vocabulary and a `TfidfTransformer` for
/// the weights. Feature names come from the counter, so they follow the
/// counter's fit mode.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    counter: CountVectorizer,
    transformer: TfidfTransformer<E>,
    params: VectorizerParams,
    /// IDF of the last successful fit
    idf: Vec<f64>,
}

impl TfidfVectorizer<DefaultTFIDFEngine> {
    pub fn new() -> Self {
        Self::with_params(VectorizerParams::default())
    }

    pub fn with_params(params: VectorizerParams) -> Self {
        let transformer = TfidfTransformer::with_decimals(params.decimals());
        Self::from_parts(
            CountVectorizer::with_fit_mode(params.fit_mode()),
            transformer,
            params,
            Vec::new(),
        )
    }
}

impl Default for TfidfVectorizer<DefaultTFIDFEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TfidfVectorizer<E>
where
    E: TFIDFEngine + Send + Sync,
{
    /// Plug a custom engine; `params.decimals()` is then up to that engine
    pub fn with_engine(params: VectorizerParams, engine: E) -> Self {
        Self::from_parts(
            CountVectorizer::with_fit_mode(params.fit_mode()),
            TfidfTransformer::with_engine(engine),
            params,
            Vec::new(),
        )
    }

    pub(crate) fn from_parts(
        counter: CountVectorizer,
        transformer: TfidfTransformer<E>,
        params: VectorizerParams,
        idf: Vec<f64>,
    ) -> Self {
        Self {
            counter,
            transformer,
            params,
            idf,
        }
    }

    /// Fit the vocabulary to `corpus` and return its TF-IDF matrix.
    ///
    /// An empty corpus gives an empty matrix. A document without tokens fails
    /// with `VectorizerError::ZeroRowSum` since its TF is undefined.
    pub fn fit_transform<T>(&mut self, corpus: &[T]) -> Result<WeightMatrix>
    where
        T: AsRef<str> + Sync,
    {
        let counts = self.counter.fit_transform(corpus);
        if counts.is_empty() {
            debug!("Empty corpus, nothing to weight");
            self.idf.clear();
            return Ok(Vec::new());
        }
        let (tfidf, idf) = self.transformer.fit_transform_with_idf(&counts)?;
        self.idf = idf;
        Ok(tfidf)
    }

    /// Count matrix of `corpus` against the fitted vocabulary
    pub fn count_matrix<T>(&self, corpus: &[T]) -> CountMatrix
    where
        T: AsRef<str> + Sync,
    {
        self.counter.transform(corpus)
    }

    /// Feature names in column order
    pub fn get_feature_names(&self) -> Vec<String> {
        self.counter.get_feature_names()
    }

    /// IDF per column as of the last successful `fit_transform`
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn params(&self) -> &VectorizerParams {
        &self.params
    }

    pub fn counter(&self) -> &CountVectorizer {
        &self.counter
    }

    pub fn transformer(&self) -> &TfidfTransformer<E> {
        &self.transformer
    }
}
