//! # Page Search
//!
//! An in-memory full-text search engine that ranks `(identifier, content)`
//! documents, such as scraped web pages keyed by URL, with the BM25 ranking
//! algorithm.
//!
//! Documents and queries go through the same text pipeline: normalization,
//! optional English stopword removal, then optional Snowball stemming or
//! lemmatization.
//!
//! ```
//! use page_search::{EngineConfig, SearchEngine, TextProcessing};
//!
//! let engine = SearchEngine::new(
//!     "pages",
//!     Some(EngineConfig::default().with_text_processing(TextProcessing::Stemmer)),
//! )
//! .unwrap();
//! engine.index("https://example.com/rust", "Rust is a systems programming language");
//! engine.index("https://example.com/food", "Cooking recipes for every day");
//!
//! let results = engine.search_ranked("programs in rust", 10);
//! assert_eq!(results[0].0, "https://example.com/rust");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod lemmatizer;
pub mod normalizer;
pub mod tokenizer;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use lemmatizer::{PartOfSpeech, lemmatize, lemmatize_nouns};
pub use normalizer::{normalize, remove_stopwords};
pub use tokenizer::{TextPipeline, stem};
