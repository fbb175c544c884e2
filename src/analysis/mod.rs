//! Text analysis module for uber-filters.
//!
//! This module provides the token model, tokenizers, and the token filter
//! implementations the filter factories produce. The filters operate on
//! precomputed immutable structures; all term-source resolution happens at
//! factory-construction time.

pub mod synonym;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
pub mod word_list;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
