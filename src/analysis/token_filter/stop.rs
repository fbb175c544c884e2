//! Stop filter implementation.
//!
//! Removes common words (stop words) that typically don't contribute to
//! search relevance. Two mutually exclusive behaviors exist: standard removal
//! of every matching token, and a "suggest" mode that removes a matching stop
//! word only when it is the final token of the stream (trailing-word
//! suppression for autocomplete-style analysis).
//!
//! # Examples
//!
//! ```
//! use uber_filters::analysis::token::Token;
//! use uber_filters::analysis::token_filter::Filter;
//! use uber_filters::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// By default every matching token is removed and its position increment is
/// folded into the following token, preserving positional gaps for phrase
/// queries. With [`remove_trailing(false)`](StopFilter::remove_trailing) only
/// a stop word in final position is removed; matches anywhere else are kept.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Case-insensitive matching (the set must then hold lowercased words)
    ignore_case: bool,
    /// Standard removal everywhere versus trailing-only suggest mode
    remove_trailing: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone(), false)
    }

    /// Create a new stop filter with custom stop words.
    ///
    /// With `ignore_case` the words are matched case-insensitively.
    pub fn with_stop_words(stop_words: HashSet<String>, ignore_case: bool) -> Self {
        let stop_words = if ignore_case {
            stop_words.into_iter().map(|w| w.to_lowercase()).collect()
        } else {
            stop_words
        };

        StopFilter {
            stop_words: Arc::new(stop_words),
            ignore_case,
            remove_trailing: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words, false)
    }

    /// Select between standard removal (`true`, the default) and trailing-only
    /// suggest mode (`false`).
    pub fn remove_trailing(mut self, remove_trailing: bool) -> Self {
        self.remove_trailing = remove_trailing;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.ignore_case {
            self.stop_words.contains(&word.to_lowercase())
        } else {
            self.stop_words.contains(word)
        }
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    fn remove_all(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut result = Vec::with_capacity(tokens.len());
        let mut pending_increment = 0;

        for mut token in tokens {
            if self.is_stop_word(&token.text) {
                pending_increment += token.position_increment;
            } else {
                token.position_increment += pending_increment;
                pending_increment = 0;
                result.push(token);
            }
        }

        result
    }

    fn remove_last(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        if let Some(last) = tokens.last()
            && self.is_stop_word(&last.text)
        {
            tokens.pop();
        }
        tokens
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let tokens: Vec<Token> = tokens.collect();

        let filtered = if self.remove_trailing {
            self.remove_all(tokens)
        } else {
            self.remove_last(tokens)
        };

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn stream(words: &[&str]) -> TokenStream {
        let tokens: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        Box::new(tokens.into_iter())
    }

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let result: Vec<Token> = filter
            .filter(stream(&["hello", "the", "world", "and", "test"]))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_removed_tokens_leave_position_gaps() {
        let filter = StopFilter::from_words(vec!["the"]);
        let result: Vec<Token> = filter
            .filter(stream(&["the", "quick", "the", "fox"]))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "quick");
        assert_eq!(result[0].position_increment, 2);
        assert_eq!(result[1].text, "fox");
        assert_eq!(result[1].position_increment, 2);
    }

    #[test]
    fn test_suggest_mode_keeps_inner_stop_words() {
        // stop set {"not"}: with remove_trailing=false, "not" survives when
        // it is not the final token
        let filter = StopFilter::from_words(vec!["not"]).remove_trailing(false);
        let result: Vec<Token> = filter
            .filter(stream(&["does", "not", "matter"]))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[1].text, "not");
    }

    #[test]
    fn test_suggest_mode_removes_trailing_stop_word() {
        let filter = StopFilter::from_words(vec!["not"]).remove_trailing(false);
        let result: Vec<Token> = filter
            .filter(stream(&["matter", "does", "not"]))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[1].text, "does");
    }

    #[test]
    fn test_standard_mode_removes_everywhere() {
        let filter = StopFilter::from_words(vec!["not"]);
        let result: Vec<Token> = filter
            .filter(stream(&["does", "not", "matter"]))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "does");
        assert_eq!(result[1].text, "matter");
    }

    #[test]
    fn test_ignore_case() {
        let words: HashSet<String> = ["The".to_string()].into_iter().collect();
        let filter = StopFilter::with_stop_words(words, true);

        assert!(filter.is_stop_word("the"));
        assert!(filter.is_stop_word("THE"));
    }

    #[test]
    fn test_default_stop_words() {
        let filter = StopFilter::new();
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("hello"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
