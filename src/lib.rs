//! # Uber Filters
//!
//! Configurable token filters for a search-indexing pipeline, with term lists
//! sourced either from static configuration or from a relational database.
//!
//! ## Features
//!
//! - Keyword marking, stemmer overrides, stop-word removal, synonym expansion
//! - Term lists loaded from a SQL database with a single parameterized query
//! - Static fallbacks: inline lists, word-list files, regex patterns
//! - Solr-style and WordNet-style synonym rule dialects

pub mod analysis;
pub mod error;
pub mod factory;
pub mod loader;
pub mod settings;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
