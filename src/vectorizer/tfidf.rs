use log::debug;
use num::Num;
use rayon::prelude::*;

use crate::{
    error::{Result, VectorizerError},
    utils::round::{row_sum, RoundTo},
    vectorizer::{
        corpus::CorpusStats,
        matrix::{validate_shape, WeightMatrix},
        params::DEFAULT_DECIMALS,
    },
};

/// The formulas behind one TF, IDF and TF-IDF value.
///
/// `TfidfTransformer` takes care of walking the matrix, shape checks and
/// division-by-zero detection; an engine only sees well-formed inputs.
pub trait TFIDFEngine {
    /// TF of one cell
    /// # Arguments
    /// * `count` - セルの出現回数
    /// * `row_sum` - 行の合計 (always > 0)
    fn tf(&self, count: f64, row_sum: f64) -> f64;
    /// IDF of one column
    /// # Arguments
    /// * `doc_num` - ドキュメント数
    /// * `doc_freq` - トークンを含むドキュメント数
    fn idf(&self, doc_num: u64, doc_freq: u64) -> f64;
    /// Combine an already computed TF and IDF
    fn tfidf(&self, tf: f64, idf: f64) -> f64;
}

/// デフォルトのTF-IDFエンジン
///
/// - `tf = round(count / row_sum)`
/// - `idf = round(1 + ln((D + 1) / (df + 1)))`
/// - `tfidf = round(tf * idf)`
///
/// Every step rounds to `decimals` digits, so the final value is rounded twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTFIDFEngine {
    decimals: u32,
}

impl DefaultTFIDFEngine {
    pub fn new(decimals: u32) -> Self {
        DefaultTFIDFEngine { decimals }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }
}

impl Default for DefaultTFIDFEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMALS)
    }
}

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(&self, count: f64, row_sum: f64) -> f64 {
        (count / row_sum).round_to(self.decimals)
    }

    #[inline]
    fn idf(&self, doc_num: u64, doc_freq: u64) -> f64 {
        let ratio = (doc_num as f64 + 1.0) / (doc_freq as f64 + 1.0);
        (1.0 + ratio.ln()).round_to(self.decimals)
    }

    #[inline]
    fn tfidf(&self, tf: f64, idf: f64) -> f64 {
        (tf * idf).round_to(self.decimals)
    }
}

/// Count matrix to TF-IDF matrix.
///
/// Stateless between calls: each method only looks at the matrix it is given.
/// Accepts any unsigned-ish count type (`u8`, `u16`, `u32`, ...).
///
/// # Examples
/// ```
/// use text_vectorizer::TfidfTransformer;
/// let transformer = TfidfTransformer::new();
/// let weights = transformer.fit_transform(&[vec![1u32, 1], vec![0, 2]]).unwrap();
/// assert_eq!(weights, vec![vec![0.703, 0.5], vec![0.0, 1.0]]);
/// ```
#[derive(Debug, Clone)]
pub struct TfidfTransformer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    engine: E,
}

impl TfidfTransformer<DefaultTFIDFEngine> {
    pub fn new() -> Self {
        Self::with_engine(DefaultTFIDFEngine::default())
    }

    pub fn with_decimals(decimals: u32) -> Self {
        Self::with_engine(DefaultTFIDFEngine::new(decimals))
    }
}

impl Default for TfidfTransformer<DefaultTFIDFEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TfidfTransformer<E>
where
    E: TFIDFEngine + Send + Sync,
{
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// TF行列を計算する
    ///
    /// Every row is divided by its own sum.
    /// The lowest-index row whose sum is zero is reported as
    /// `VectorizerError::ZeroRowSum`; nothing is coerced to 0 or NaN.
    pub fn tf_matrix<N>(&self, count_matrix: &[Vec<N>]) -> Result<WeightMatrix>
    where
        N: Num + Copy + Into<f64> + Send + Sync,
    {
        validate_shape(count_matrix)?;
        // 先にゼロ行を確認する (sequential so the reported row is deterministic)
        let sums = count_matrix.iter().map(|row| row_sum(row)).collect::<Vec<f64>>();
        if let Some(row) = sums.iter().position(|&sum| sum == 0.0) {
            return Err(VectorizerError::ZeroRowSum { row });
        }

        let tf = count_matrix
            .par_iter()
            .zip(sums.par_iter())
            .map(|(row, &sum)| {
                row.iter()
                    .map(|&count| self.engine.tf(count.into(), sum))
                    .collect::<Vec<f64>>()
            })
            .collect::<WeightMatrix>();
        Ok(tf)
    }

    /// IDFベクトルを計算する
    ///
    /// One value per column of the first row.
    pub fn idf_matrix<N>(&self, count_matrix: &[Vec<N>]) -> Result<Vec<f64>>
    where
        N: Num + Copy,
    {
        let stats = CorpusStats::from_counts(count_matrix)?;
        Ok(self.idf_from_stats(&stats))
    }

    pub fn idf_from_stats(&self, stats: &CorpusStats) -> Vec<f64> {
        stats
            .doc_freqs()
            .iter()
            .map(|&df| self.engine.idf(stats.doc_num(), df))
            .collect()
    }

    /// TF-IDF行列を計算する
    pub fn fit_transform<N>(&self, count_matrix: &[Vec<N>]) -> Result<WeightMatrix>
    where
        N: Num + Copy + Into<f64> + Send + Sync,
    {
        let (tfidf, _) = self.fit_transform_with_idf(count_matrix)?;
        Ok(tfidf)
    }

    /// Same as `fit_transform` but also hands back the IDF vector
    pub fn fit_transform_with_idf<N>(&self, count_matrix: &[Vec<N>]) -> Result<(WeightMatrix, Vec<f64>)>
    where
        N: Num + Copy + Into<f64> + Send + Sync,
    {
        let tf = self.tf_matrix(count_matrix)?;
        let idf = self.idf_matrix(count_matrix)?;
        debug!("TF-IDF over {} rows x {} columns", tf.len(), idf.len());

        let tfidf = tf
            .into_par_iter()
            .map(|tf_row| {
                tf_row
                    .into_iter()
                    .zip(idf.iter())
                    .map(|(tf, &idf)| self.engine.tfidf(tf, idf))
                    .collect::<Vec<f64>>()
            })
            .collect::<WeightMatrix>();
        Ok((tfidf, idf))
    }
}
