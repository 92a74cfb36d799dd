use thiserror::Error;

/// Errors that can occur when working with a search engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A corpus statistic was requested while no document is stored.
    #[error("search engine {name:?}, index is empty")]
    EmptyIndex { name: String },

    /// BM25 parameters out of their valid range.
    #[error("search engine {name:?}, invalid configuration: {reason}")]
    InvalidConfig { name: String, reason: String },
}
