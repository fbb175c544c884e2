//! Keyword marker filter implementation.
//!
//! Marks tokens as keywords so that downstream stemmers leave them untouched.
//! Two matching strategies exist: a lookup set of exact words (optionally
//! case-insensitive) and a regular-expression pattern.
//!
//! # Examples
//!
//! ```
//! use uber_filters::analysis::token::Token;
//! use uber_filters::analysis::token_filter::Filter;
//! use uber_filters::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
//!
//! let filter = KeywordMarkerFilter::from_words(vec!["elasticsearch"], false);
//! let tokens = vec![Token::new("elasticsearch", 0), Token::new("running", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert!(result[0].is_keyword());
//! assert!(!result[1].is_keyword());
//! ```

use std::collections::HashSet;

use regex::Regex;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

#[derive(Clone, Debug)]
enum KeywordMatcher {
    Set {
        words: HashSet<String>,
        ignore_case: bool,
    },
    Pattern(Regex),
}

/// A filter that marks matching tokens as keywords ("do not stem").
///
/// The filter only sets the keyword flag; applying it (skipping stemming) is
/// the job of whatever stemmer runs later in the chain.
#[derive(Clone, Debug)]
pub struct KeywordMarkerFilter {
    matcher: KeywordMatcher,
}

impl KeywordMarkerFilter {
    /// Create a filter marking tokens whose text is in the given word list.
    ///
    /// With `ignore_case` the lookup is case-insensitive.
    pub fn from_words<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                let w = w.into();
                if ignore_case { w.to_lowercase() } else { w }
            })
            .collect();

        KeywordMarkerFilter {
            matcher: KeywordMatcher::Set { words, ignore_case },
        }
    }

    /// Create a filter marking tokens whose text matches the given pattern.
    pub fn from_pattern(pattern: Regex) -> Self {
        KeywordMarkerFilter {
            matcher: KeywordMatcher::Pattern(pattern),
        }
    }

    /// Check whether a token text would be marked as a keyword.
    pub fn is_keyword(&self, text: &str) -> bool {
        match &self.matcher {
            KeywordMatcher::Set { words, ignore_case } => {
                if *ignore_case {
                    words.contains(&text.to_lowercase())
                } else {
                    words.contains(text)
                }
            }
            KeywordMatcher::Pattern(pattern) => pattern.is_match(text),
        }
    }

    /// Get the number of configured keywords (0 for pattern matchers).
    pub fn len(&self) -> usize {
        match &self.matcher {
            KeywordMatcher::Set { words, .. } => words.len(),
            KeywordMatcher::Pattern(_) => 0,
        }
    }

    /// Check if the keyword set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Filter for KeywordMarkerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if !token.is_keyword() && self.is_keyword(&token.text) {
                    token.keyword()
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn texts_marked(filter: &KeywordMarkerFilter, words: &[&str]) -> Vec<bool> {
        let tokens: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();

        filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.is_keyword())
            .collect()
    }

    #[test]
    fn test_set_marker() {
        let filter = KeywordMarkerFilter::from_words(vec!["jumping", "running"], false);
        let marked = texts_marked(&filter, &["running", "walking", "jumping"]);
        assert_eq!(marked, vec![true, false, true]);
    }

    #[test]
    fn test_set_marker_case_sensitivity() {
        let filter = KeywordMarkerFilter::from_words(vec!["Running"], false);
        assert!(!filter.is_keyword("running"));
        assert!(filter.is_keyword("Running"));

        let filter = KeywordMarkerFilter::from_words(vec!["Running"], true);
        assert!(filter.is_keyword("running"));
        assert!(filter.is_keyword("RUNNING"));
    }

    #[test]
    fn test_pattern_marker() {
        let pattern = Regex::new("^runn.*$").unwrap();
        let filter = KeywordMarkerFilter::from_pattern(pattern);
        let marked = texts_marked(&filter, &["running", "walking", "runner"]);
        assert_eq!(marked, vec![true, false, true]);
    }

    #[test]
    fn test_filter_name() {
        let filter = KeywordMarkerFilter::from_words(vec!["a"], false);
        assert_eq!(filter.name(), "keyword_marker");
    }
}
