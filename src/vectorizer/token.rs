use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Split a document into lowercased, whitespace-delimited tokens.
///
/// Empty and whitespace-only documents yield nothing.
#[inline]
pub fn tokenize(doc: &str) -> impl Iterator<Item = String> + '_ {
    doc.split_whitespace().map(str::to_lowercase)
}

///  TokenFrequency 構造体
/// Counts tokens of a single document.
/// Tokens keep the order in which they were first added.
///
/// # Examples
/// ```
/// use text_vectorizer::TokenFrequency;
/// let mut token_freq = TokenFrequency::new();
/// token_freq.add_token("pasta");
/// token_freq.add_token("boil");
/// token_freq.add_token("pasta");
///
/// assert_eq!(token_freq.token_count("pasta"), 2);
/// assert_eq!(token_freq.token_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

/// Tokenの追加の実装
impl TokenFrequency {
    /// 新しいTokenFrequencyを作成するメソッド
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Tokenize `doc` and count its tokens
    pub fn from_document(doc: &str) -> Self {
        let mut freq = Self::new();
        for token in tokenize(doc) {
            freq.add_owned_token(token);
        }
        freq
    }

    /// tokenを追加する
    ///
    /// # Arguments
    /// * `token` - 追加するトークン
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        if let Some(count) = self.token_count.get_mut(token) {
            *count += 1;
        } else {
            self.token_count.insert(token.to_string(), 1);
        }
        self.total_token_count += 1;
        self
    }

    #[inline]
    fn add_owned_token(&mut self, token: String) {
        *self.token_count.entry(token).or_insert(0) += 1;
        self.total_token_count += 1;
    }

    /// 複数のtokenを追加する
    ///
    /// # Arguments
    /// * `tokens` - 追加するトークンのスライス
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// カウントを全リセットします
    #[inline]
    pub fn clear(&mut self) {
        self.token_count.clear();
        self.total_token_count = 0;
    }
}

/// TokenFrequencyの情報を取得するための実装
impl TokenFrequency {
    /// あるtokenの出現回数を取得します
    ///
    /// # Arguments
    /// * `token` - トークン
    ///
    /// # Returns
    /// * `u32` - トークンの出現回数
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// 全tokenのカウントの合計を取得します
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// 出現した単語数を取得します
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_token_count == 0
    }

    /// tokenが存在するかどうかを確認します
    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// tokenのsetを取得します (first-seen order)
    /// 文字列はこれの参照を返します
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }

    /// Iterate `(token, count)` pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits_on_any_whitespace() {
        let tokens: Vec<String> = tokenize("  Crock\tPot\nPASTA  ").collect();
        assert_eq!(tokens, vec!["crock", "pot", "pasta"]);
    }

    #[test]
    fn tokenize_empty_and_blank_documents() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \t\n ").count(), 0);
    }

    #[test]
    fn from_document_counts_case_insensitively() {
        let freq = TokenFrequency::from_document("Pasta pasta PASTA boil");
        assert_eq!(freq.token_count("pasta"), 3);
        assert_eq!(freq.token_count("boil"), 1);
        assert_eq!(freq.token_count("Pasta"), 0);
        assert_eq!(freq.token_sum(), 4);
        assert_eq!(freq.token_num(), 2);
        assert_eq!(freq.token_set_ref_str(), vec!["pasta", "boil"]);
    }

    #[test]
    fn add_tokens_chains_and_clear_resets() {
        let mut freq = TokenFrequency::new();
        freq.add_tokens(&["a", "b"]).add_token("a");
        assert_eq!(freq.iter().collect::<Vec<_>>(), vec![("a", 2), ("b", 1)]);
        assert!(freq.contains_token("b"));

        freq.clear();
        assert!(freq.is_empty());
        assert_eq!(freq.token_num(), 0);
    }
}
