//! # BM25 search engine over `(identifier, content)` pairs

use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeSet, HashMap},
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use crate::config::*;
use crate::error::*;
use crate::normalizer::normalize;
use crate::tokenizer::TextPipeline;

/// In-memory full-text search engine ranking documents with BM25.
///
/// A single writer updates the index under a write lock while any number of
/// readers score queries against a consistent snapshot under the read lock.
pub struct SearchEngine {
    /// Engine name
    name: String,

    /// BM25 parameters and text processing options
    config: EngineConfig,

    /// Pipeline applied to documents and queries alike
    pipeline: TextPipeline,

    /// Documents, postings and length totals
    state: RwLock<IndexState>,

    /// Number of search operations performed.
    search_count: AtomicU64,
}

/// Engine statistics.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Updated version for the index. It will be incremented when the index is updated.
    pub version: u64,

    /// Number of stored documents.
    pub num_documents: u64,

    /// Number of distinct tokens in the inverted index.
    pub num_tokens: u64,

    /// Average raw document length in characters, 0 when empty.
    pub avg_document_length: f32,

    /// Number of documents indexed under a new identifier.
    pub insert_count: u64,

    /// Number of documents that replaced an existing identifier.
    pub overwrite_count: u64,

    /// Number of search operations performed.
    pub search_count: u64,
}

/// Raw document content with its character length.
#[derive(Debug)]
struct StoredDocument {
    content: String,
    length: usize,
}

#[derive(Debug, Default)]
struct IndexState {
    documents: HashMap<String, StoredDocument>,

    /// token -> (document id -> occurrences)
    postings: HashMap<String, HashMap<String, usize>>,

    /// Sum of the character lengths of all stored documents
    total_length: usize,

    version: u64,
    insert_count: u64,
    overwrite_count: u64,
}

impl IndexState {
    fn average_length(&self) -> Option<f32> {
        if self.documents.is_empty() {
            return None;
        }
        Some(self.total_length as f32 / self.documents.len() as f32)
    }

    fn idf(&self, token: &str) -> f32 {
        let n = self.documents.len() as f32;
        let df = self.postings.get(token).map_or(0, |p| p.len()) as f32;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// BM25 score of every document containing `token`.
    fn bm25(&self, token: &str, avdl: f32, config: &EngineConfig) -> HashMap<String, f32> {
        let Some(posting) = self.postings.get(token) else {
            return HashMap::new();
        };

        let idf = self.idf(token);
        let mut scores = HashMap::with_capacity(posting.len());
        for (id, freq) in posting {
            let length = self.documents.get(id).map_or(0, |d| d.length) as f32;
            let tf = *freq as f32;
            let tf_component = (tf * (config.k1 + 1.0))
                / (tf + config.k1 * (1.0 - config.b + config.b * length / avdl));
            scores.insert(id.clone(), idf * tf_component);
        }
        scores
    }

    /// Drops every posting of `id` for the given tokens, removing tokens
    /// left without documents.
    fn retract(&mut self, id: &str, tokens: &[String]) {
        for token in tokens {
            if let Some(posting) = self.postings.get_mut(token) {
                posting.remove(id);
                if posting.is_empty() {
                    self.postings.remove(token);
                }
            }
        }
    }
}

impl SearchEngine {
    /// Creates a new empty search engine.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the engine, reported in errors and logs
    /// * `config` - Optional configuration, defaults to [`EngineConfig::default`]
    ///
    /// # Returns
    ///
    /// * `Err(SearchError::InvalidConfig)` if the BM25 parameters are out of range
    pub fn new(name: impl Into<String>, config: Option<EngineConfig>) -> Result<Self, SearchError> {
        let name = name.into();
        let config = config.unwrap_or_default();
        config.validate(&name)?;

        Ok(SearchEngine {
            pipeline: TextPipeline::new(&config),
            name,
            config,
            state: RwLock::new(IndexState::default()),
            search_count: AtomicU64::new(0),
        })
    }

    /// Returns the engine name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the number of stored documents
    pub fn len(&self) -> usize {
        self.state.read().documents.len()
    }

    /// Returns whether no document is stored
    pub fn is_empty(&self) -> bool {
        self.state.read().documents.is_empty()
    }

    /// Number of distinct stored identifiers.
    pub fn document_count(&self) -> usize {
        self.len()
    }

    /// Stored identifiers in ascending order.
    pub fn document_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.state.read().documents.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Raw content stored under `id`.
    pub fn document(&self, id: &str) -> Option<String> {
        self.state
            .read()
            .documents
            .get(id)
            .map(|d| d.content.clone())
    }

    /// Gets all tokens in the index.
    pub fn tokens(&self) -> BTreeSet<String> {
        self.state.read().postings.keys().cloned().collect()
    }

    /// Gets current statistics about the engine
    pub fn stats(&self) -> SearchStats {
        let state = self.state.read();
        SearchStats {
            version: state.version,
            num_documents: state.documents.len() as u64,
            num_tokens: state.postings.len() as u64,
            avg_document_length: state.average_length().unwrap_or(0.0),
            insert_count: state.insert_count,
            overwrite_count: state.overwrite_count,
            search_count: self.search_count.load(Ordering::Relaxed),
        }
    }

    /// Mean character length of the stored raw documents.
    ///
    /// # Returns
    ///
    /// * `Err(SearchError::EmptyIndex)` if no document is stored
    pub fn average_document_length(&self) -> Result<f32, SearchError> {
        self.state
            .read()
            .average_length()
            .ok_or_else(|| self.empty_index())
    }

    /// Posting list of a token: document id -> occurrences.
    ///
    /// The token is normalized but not stemmed or lemmatized, so this is a raw
    /// index lookup; use [`SearchEngine::search`] for pipeline-aware queries.
    pub fn postings(&self, token: &str) -> HashMap<String, usize> {
        let token = normalize(token);
        self.state
            .read()
            .postings
            .get(&token)
            .cloned()
            .unwrap_or_default()
    }

    /// Inverse document frequency `ln((N - n + 0.5) / (n + 0.5) + 1)`, where
    /// `N` is the number of documents and `n` the number containing `token`.
    ///
    /// The value is positive for every `0 <= n <= N` and is not clamped.
    ///
    /// # Returns
    ///
    /// * `Err(SearchError::EmptyIndex)` if no document is stored
    pub fn idf(&self, token: &str) -> Result<f32, SearchError> {
        let token = normalize(token);
        let state = self.state.read();
        if state.documents.is_empty() {
            return Err(self.empty_index());
        }
        Ok(state.idf(&token))
    }

    /// BM25 score of `token` for every document containing it.
    ///
    /// Documents without the token get no entry.
    ///
    /// # Returns
    ///
    /// * `Err(SearchError::EmptyIndex)` if no document is stored
    pub fn bm25_score(&self, token: &str) -> Result<HashMap<String, f32>, SearchError> {
        let token = normalize(token);
        let state = self.state.read();
        let avdl = state.average_length().ok_or_else(|| self.empty_index())?;
        Ok(state.bm25(&token, avdl, &self.config))
    }

    /// Indexes a document, replacing any content previously stored under `id`.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique document identifier, e.g. a URL
    /// * `content` - Raw document text, stored verbatim
    pub fn index(&self, id: impl Into<String>, content: impl Into<String>) {
        let (id, content) = (id.into(), content.into());
        let tokens = self.pipeline.tokens(&content);

        let mut state = self.state.write();
        self.apply(&mut state, id, content, tokens);
        state.version += 1;
    }

    /// Indexes multiple documents, equivalent to calling [`SearchEngine::index`]
    /// for each pair in order.
    ///
    /// Text processing runs in parallel; the documents are then applied to the
    /// index in input order, so a later pair overwrites an earlier one with the
    /// same identifier.
    pub fn bulk_index(&self, docs: Vec<(String, String)>) {
        if docs.is_empty() {
            return;
        }

        let start = Instant::now();
        let count = docs.len();
        let processed: Vec<(String, String, Vec<String>)> = docs
            .into_par_iter()
            .map(|(id, content)| {
                let tokens = self.pipeline.tokens(&content);
                (id, content, tokens)
            })
            .collect();

        {
            let mut state = self.state.write();
            for (id, content, tokens) in processed {
                self.apply(&mut state, id, content, tokens);
            }
            state.version += 1;
        }

        let elapsed = start.elapsed();
        log::info!(
            action = "bulk_index",
            engine = self.name,
            count = count,
            elapsed = elapsed.as_millis();
            "Indexed {count} documents in {elapsed:?}",
        );
    }

    /// Scores every document against the query.
    ///
    /// The query goes through the same pipeline as indexed documents; the
    /// BM25 scores of its tokens are summed per document. An empty query, a
    /// query without known tokens or an empty index yield an empty map.
    pub fn search(&self, query: &str) -> HashMap<String, f32> {
        self.search_count.fetch_add(1, Ordering::Relaxed);
        let keywords = self.pipeline.tokens(query);
        if keywords.is_empty() {
            return HashMap::new();
        }

        let state = self.state.read();
        let Some(avdl) = state.average_length() else {
            return HashMap::new();
        };

        let mut scores: HashMap<String, f32> = HashMap::new();
        for keyword in &keywords {
            for (id, score) in state.bm25(keyword, avdl, &self.config) {
                *scores.entry(id).or_default() += score;
            }
        }

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                action = "search",
                engine = self.name;
                "Query {query:?} matched {} documents with {} tokens",
                scores.len(),
                keywords.len()
            );
        }
        scores
    }

    /// Searches the engine and ranks the matches.
    ///
    /// # Arguments
    ///
    /// * `query` - Search query text
    /// * `top_k` - Maximum number of results to return
    ///
    /// # Returns
    ///
    /// A vector of (document id, score) pairs, sorted by descending score, ties by ascending id
    pub fn search_ranked(&self, query: &str, top_k: usize) -> Vec<(String, f32)> {
        let mut results: Vec<(String, f32)> = self.search(query).into_iter().collect();
        results.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        results.truncate(top_k);
        results
    }

    /// Folds one processed document into the index state.
    fn apply(&self, state: &mut IndexState, id: String, content: String, tokens: Vec<String>) {
        let length = content.chars().count();
        if let Some(previous) = state.documents.remove(&id) {
            let mut old_tokens = self.pipeline.tokens(&previous.content);
            old_tokens.sort_unstable();
            old_tokens.dedup();
            state.retract(&id, &old_tokens);
            state.total_length -= previous.length;
            state.overwrite_count += 1;
        } else {
            state.insert_count += 1;
        }

        for token in &tokens {
            *state
                .postings
                .entry(token.clone())
                .or_default()
                .entry(id.clone())
                .or_default() += 1;
        }

        log::debug!(
            action = "index",
            engine = self.name,
            id = id,
            tokens = tokens.len();
            "Indexed document of {length} characters",
        );

        state.total_length += length;
        state.documents.insert(id, StoredDocument { content, length });
    }

    fn empty_index(&self) -> SearchError {
        SearchError::EmptyIndex {
            name: self.name.clone(),
        }
    }
}
