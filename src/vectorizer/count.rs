use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{
    matrix::CountMatrix,
    params::FitMode,
    token::{tokenize, TokenFrequency},
    vocabulary::Vocabulary,
};

/// Vocabulary builder and counter.
///
/// Turns a corpus into a dense count matrix whose columns follow the order in
/// which tokens were first seen.
///
/// # Examples
/// ```
/// use text_vectorizer::CountVectorizer;
/// let mut vectorizer = CountVectorizer::new();
/// let counts = vectorizer.fit_transform(&["Pasta boil pasta", "fresh pasta"]);
/// assert_eq!(vectorizer.get_feature_names(), vec!["pasta", "boil", "fresh"]);
/// assert_eq!(counts, vec![vec![2, 1, 0], vec![1, 0, 1]]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountVectorizer {
    vocabulary: Vocabulary,
    fit_mode: FitMode,
}

impl CountVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fit_mode(fit_mode: FitMode) -> Self {
        Self {
            vocabulary: Vocabulary::new(),
            fit_mode,
        }
    }

    pub(crate) fn from_vocabulary(vocabulary: Vocabulary, fit_mode: FitMode) -> Self {
        Self { vocabulary, fit_mode }
    }

    /// Fit the vocabulary to `corpus` and return its count matrix.
    ///
    /// One row per document in input order; every row is as wide as the
    /// vocabulary after fitting.
    pub fn fit_transform<T>(&mut self, corpus: &[T]) -> CountMatrix
    where
        T: AsRef<str> + Sync,
    {
        if self.fit_mode == FitMode::Reset {
            self.vocabulary.clear();
        }
        self.fit(corpus);
        self.count_rows(corpus)
    }

    /// Count `corpus` against the fitted vocabulary without growing it.
    /// Tokens outside the vocabulary are dropped.
    pub fn transform<T>(&self, corpus: &[T]) -> CountMatrix
    where
        T: AsRef<str> + Sync,
    {
        debug!("Transforming {} documents with a fitted vocabulary of {}", corpus.len(), self.vocabulary.len());
        self.count_rows(corpus)
    }

    /// pass 1: 語彙の構築 (sequential, order matters)
    fn fit<T>(&mut self, corpus: &[T])
    where
        T: AsRef<str>,
    {
        let before = self.vocabulary.len();
        for doc in corpus {
            for token in tokenize(doc.as_ref()) {
                self.vocabulary.insert(&token);
            }
        }
        debug!(
            "Vocabulary fitted on {} documents: {} new tokens, {} total",
            corpus.len(),
            self.vocabulary.len() - before,
            self.vocabulary.len()
        );
    }

    /// pass 2: rows are independent once the vocabulary is fixed
    fn count_rows<T>(&self, corpus: &[T]) -> CountMatrix
    where
        T: AsRef<str> + Sync,
    {
        let width = self.vocabulary.len();
        corpus
            .par_iter()
            .map(|doc| {
                let mut row = vec![0u32; width];
                let freq = TokenFrequency::from_document(doc.as_ref());
                for (token, count) in freq.iter() {
                    match self.vocabulary.index_of(token) {
                        Some(idx) => row[idx] += count,
                        None => trace!("Skipping unknown token {token:?}"),
                    }
                }
                row
            })
            .collect()
    }

    /// Feature names in column order, as of the latest fit
    pub fn get_feature_names(&self) -> Vec<String> {
        self.vocabulary.feature_names()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    pub fn num_features(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 2] = [
        "Crock Pot Pasta Never boil pasta again",
        "Pasta Pomodoro Fresh ingredients Parmesan to taste",
    ];

    #[test]
    fn pasta_scenario() {
        let mut vectorizer = CountVectorizer::new();
        let counts = vectorizer.fit_transform(&CORPUS);

        assert_eq!(
            vectorizer.get_feature_names(),
            vec![
                "crock", "pot", "pasta", "never", "boil", "again", "pomodoro", "fresh",
                "ingredients", "parmesan", "to", "taste"
            ]
        );
        assert_eq!(counts[0], vec![1, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(counts[1], vec![0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn fresh_instances_are_deterministic() {
        let corpus = ["b a c", "C d a", "e"];
        let mut first = CountVectorizer::new();
        let mut second = CountVectorizer::new();
        assert_eq!(first.fit_transform(&corpus), second.fit_transform(&corpus));
        assert_eq!(first.get_feature_names(), second.get_feature_names());
    }

    #[test]
    fn row_width_and_row_sum() {
        let corpus = ["one two two", "THREE three three one", "four"];
        let mut vectorizer = CountVectorizer::new();
        let counts = vectorizer.fit_transform(&corpus);

        let width = vectorizer.get_feature_names().len();
        for (row, doc) in counts.iter().zip(corpus.iter()) {
            assert_eq!(row.len(), width);
            let sum: u32 = row.iter().sum();
            assert_eq!(sum as usize, doc.split_whitespace().count());
        }
    }

    #[test]
    fn empty_corpus_gives_empty_matrix() {
        let mut vectorizer = CountVectorizer::new();
        let counts = vectorizer.fit_transform::<&str>(&[]);
        assert!(counts.is_empty());
        assert!(vectorizer.get_feature_names().is_empty());
    }

    #[test]
    fn blank_documents_give_zero_rows() {
        let mut vectorizer = CountVectorizer::new();
        let counts = vectorizer.fit_transform(&["", "a b", "   "]);
        assert_eq!(counts, vec![vec![0, 0], vec![1, 1], vec![0, 0]]);

        let mut vectorizer = CountVectorizer::new();
        let counts = vectorizer.fit_transform(&["", " \t"]);
        assert_eq!(counts, vec![Vec::<u32>::new(), Vec::new()]);
    }

    #[test]
    fn accumulate_mode_keeps_vocabulary_across_calls() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit_transform(&["a b"]);
        let counts = vectorizer.fit_transform(&["c a"]);

        assert_eq!(vectorizer.get_feature_names(), vec!["a", "b", "c"]);
        assert_eq!(counts, vec![vec![1, 0, 1]]);
    }

    #[test]
    fn reset_mode_starts_from_scratch() {
        let mut vectorizer = CountVectorizer::with_fit_mode(FitMode::Reset);
        vectorizer.fit_transform(&["a b"]);
        let counts = vectorizer.fit_transform(&["c a"]);

        assert_eq!(vectorizer.get_feature_names(), vec!["c", "a"]);
        assert_eq!(counts, vec![vec![1, 1]]);
    }

    #[test]
    fn transform_ignores_unknown_tokens() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit_transform(&CORPUS);
        let counts = vectorizer.transform(&["pasta PASTA risotto taste"]);

        assert_eq!(vectorizer.num_features(), 12);
        assert_eq!(counts, vec![vec![0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1]]);
    }
}
