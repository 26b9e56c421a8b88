use serde::{ser::SerializeStruct, Deserialize, Serialize};

use crate::{
    error::Result,
    vectorizer::{
        count::CountVectorizer,
        params::VectorizerParams,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine, TfidfTransformer},
        vocabulary::Vocabulary,
        TfidfVectorizer,
    },
};

/// TfidfVectorizerのデシリアライズ用のデータ構造
///
/// The fitted state of a `TfidfVectorizer`: its params, the vocabulary in
/// column order and the IDF of the last fit. The engine is not stored;
/// `into_tf_idf_vectorizer` rebuilds the default one from `params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerData {
    pub params: VectorizerParams,
    pub vocabulary: Vocabulary,
    pub idf: Vec<f64>,
}

impl VectorizerData {
    /// `VectorizerData`から`TfidfVectorizer`に変換します。
    pub fn into_tf_idf_vectorizer(self) -> TfidfVectorizer<DefaultTFIDFEngine> {
        let counter = CountVectorizer::from_vocabulary(self.vocabulary, self.params.fit_mode());
        let transformer = TfidfTransformer::with_decimals(self.params.decimals());
        TfidfVectorizer::from_parts(counter, transformer, self.params, self.idf)
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }
}

impl<E> TfidfVectorizer<E>
where
    E: TFIDFEngine + Send + Sync,
{
    /// Snapshot of the fitted state
    pub fn to_data(&self) -> VectorizerData {
        VectorizerData {
            params: self.params().clone(),
            vocabulary: self.counter().vocabulary().clone(),
            idf: self.idf().to_vec(),
        }
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }
}

impl<E> Serialize for TfidfVectorizer<E>
where
    E: TFIDFEngine + Send + Sync,
{
    /// TfidfVectorizerをシリアライズします
    /// The engine is left out; deserialize through `VectorizerData`.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("VectorizerData", 3)?;
        state.serialize_field("params", self.params())?;
        state.serialize_field("vocabulary", self.counter().vocabulary())?;
        state.serialize_field("idf", self.idf())?;
        state.end()
    }
}
