use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Text processing applied after normalization, both to indexed documents and
/// to queries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextProcessing {
    /// Tokens are the normalized words.
    #[default]
    None,
    /// Snowball English stemming.
    Stemmer,
    /// Lemmatization with every word treated as a noun. Words are not tagged,
    /// so verb and adjective forms are kept; see [`TextProcessing::LemmatizerPos`].
    Lemmatizer,
    /// Lemmatization driven by part-of-speech tags.
    LemmatizerPos,
}

/// Configuration of a [`crate::SearchEngine`], fixed at construction.
///
/// - `k1`: Controls term frequency saturation. Higher values give more weight to term frequency.
/// - `b`: Controls document length normalization. 0.0 means no normalization,
///   1.0 means full normalization.
/// - `stopwords`: Drops English stopwords from documents and queries.
/// - `text_processing`: Stemming or lemmatization mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub k1: f32,
    pub b: f32,
    pub stopwords: bool,
    pub text_processing: TextProcessing,
}

impl Default for EngineConfig {
    /// Returns k1=1.5, b=0.75, no stopword removal and no text processing.
    fn default() -> Self {
        EngineConfig {
            k1: 1.5,
            b: 0.75,
            stopwords: false,
            text_processing: TextProcessing::None,
        }
    }
}

impl EngineConfig {
    /// Checks the BM25 parameters.
    ///
    /// # Arguments
    ///
    /// * `name` - Engine name reported in the error
    ///
    /// # Returns
    ///
    /// * `Err(SearchError::InvalidConfig)` if `k1` is not a positive finite number
    ///   or `b` is outside `[0, 1]`
    pub fn validate(&self, name: &str) -> Result<(), SearchError> {
        if !self.k1.is_finite() || self.k1 <= 0.0 {
            return Err(SearchError::InvalidConfig {
                name: name.to_string(),
                reason: format!("k1 must be a positive number, got {}", self.k1),
            });
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(SearchError::InvalidConfig {
                name: name.to_string(),
                reason: format!("b must be within [0, 1], got {}", self.b),
            });
        }
        Ok(())
    }

    pub fn with_stopwords(mut self, stopwords: bool) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_text_processing(mut self, text_processing: TextProcessing) -> Self {
        self.text_processing = text_processing;
        self
    }
}
