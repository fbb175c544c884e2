//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split input text into tokens. In this crate they serve one
//! purpose: normalizing synonym rule text before parsing, selected by name
//! through the synonym factory's `tokenizer` setting.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`whole::WholeTokenizer`] - Treats entire text as a single token
//!
//! # Examples
//!
//! ```
//! use uber_filters::analysis::tokenizer::Tokenizer;
//! use uber_filters::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod whitespace;
pub mod whole;

pub use whitespace::WhitespaceTokenizer;
pub use whole::WholeTokenizer;

/// Look up a tokenizer by its configured name.
///
/// Returns `None` for unknown names; callers decide whether that is fatal.
pub fn tokenizer_by_name(name: &str) -> Option<Arc<dyn Tokenizer>> {
    match name {
        "whitespace" => Some(Arc::new(WhitespaceTokenizer::new())),
        "whole" => Some(Arc::new(WholeTokenizer::new())),
        _ => None,
    }
}
