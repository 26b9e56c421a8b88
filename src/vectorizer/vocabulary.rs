use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Token to column index mapping.
///
/// Indices are handed out in first-seen order starting at 0 and are never
/// reassigned, so a token keeps its column for the lifetime of the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    tokens: IndexSet<Box<str>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            tokens: IndexSet::new(),
        }
    }

    /// Add a token and return its column index.
    /// A known token keeps its existing index.
    #[inline]
    pub fn insert(&mut self, token: &str) -> usize {
        if let Some(idx) = self.tokens.get_index_of(token) {
            return idx;
        }
        let (idx, _) = self.tokens.insert_full(Box::from(token));
        idx
    }

    #[inline]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.tokens.get_index_of(token)
    }

    #[inline]
    pub fn token_at(&self, idx: usize) -> Option<&str> {
        self.tokens.get_index(idx).map(|t| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in column order
    pub fn feature_names(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_ref())
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}
