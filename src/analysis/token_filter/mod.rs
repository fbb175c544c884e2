//! Token filter implementations for token transformation.
//!
//! This module provides the filters produced by the uber filter factories.
//! Filters receive a stream of tokens and produce a new stream, allowing them
//! to modify, remove, or add tokens.
//!
//! # Available Filters
//!
//! - [`keyword_marker::KeywordMarkerFilter`] - Marks tokens as exempt from stemming
//! - [`stemmer_override::StemmerOverrideFilter`] - Forces specific stem replacements
//! - [`stop::StopFilter`] - Removes stop words
//! - [`synonym::SynonymFilter`] - Expands synonyms
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//!
//! # Examples
//!
//! ```
//! use uber_filters::analysis::token::Token;
//! use uber_filters::analysis::token_filter::Filter;
//! use uber_filters::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod keyword_marker;
pub mod lowercase;
pub mod stemmer_override;
pub mod stop;
pub mod synonym;
