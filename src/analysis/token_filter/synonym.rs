//! Synonym filter implementation.
//!
//! Expands tokens using a precomputed [`SynonymMap`]. Matching is
//! longest-first over consecutive tokens, so multi-word inputs like
//! `i pod` win over their single-word prefixes. Alternatives are emitted at
//! the matched position (`position_increment` 0) with a `position_length`
//! covering the matched words; multi-word replacements are emitted as a
//! single phrase token.
//!
//! # Examples
//!
//! ```
//! use uber_filters::analysis::synonym::{RuleNormalizer, solr};
//! use uber_filters::analysis::token::Token;
//! use uber_filters::analysis::token_filter::Filter;
//! use uber_filters::analysis::token_filter::synonym::SynonymFilter;
//!
//! let map = solr::parse("universe, cosmos", true, &RuleNormalizer::whitespace(false)).unwrap();
//! let filter = SynonymFilter::new(map, false);
//!
//! let tokens = vec![Token::new("universe", 0)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! let texts: Vec<_> = result.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["universe", "cosmos"]);
//! ```

use std::sync::Arc;

use crate::analysis::synonym::SynonymMap;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that expands tokens according to a synonym rule table.
#[derive(Clone, Debug)]
pub struct SynonymFilter {
    map: Arc<SynonymMap>,
    ignore_case: bool,
}

impl SynonymFilter {
    /// Create a synonym filter over a prebuilt rule table.
    ///
    /// With `ignore_case` the table must have been built with lowercased
    /// keys; input tokens are lowercased for lookup only.
    pub fn new(map: SynonymMap, ignore_case: bool) -> Self {
        SynonymFilter {
            map: Arc::new(map),
            ignore_case,
        }
    }

    /// Get the number of input phrases in the rule table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the rule table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn lookup_key(&self, tokens: &[Token]) -> String {
        let words: Vec<String> = tokens
            .iter()
            .map(|t| {
                if self.ignore_case {
                    t.text.to_lowercase()
                } else {
                    t.text.clone()
                }
            })
            .collect();
        words.join(" ")
    }

    /// Find the longest phrase match starting at `start`, returning the
    /// matched word count and the alternatives.
    fn longest_match<'a>(&'a self, tokens: &[Token], start: usize) -> Option<(usize, &'a [String])> {
        let max_words = self.map.max_phrase_words().min(tokens.len() - start);

        for length in (1..=max_words).rev() {
            let key = self.lookup_key(&tokens[start..start + length]);
            if let Some(alternatives) = self.map.lookup(&key) {
                return Some((length, alternatives));
            }
        }
        None
    }
}

impl Filter for SynonymFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.map.is_empty() {
            return Ok(tokens);
        }

        let tokens: Vec<Token> = tokens.collect();
        let mut result = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            match self.longest_match(&tokens, i) {
                Some((length, alternatives)) => {
                    let first = &tokens[i];
                    let last = &tokens[i + length - 1];

                    for (j, alternative) in alternatives.iter().enumerate() {
                        let mut token = Token::with_offsets(
                            alternative.clone(),
                            first.position,
                            first.start_offset,
                            last.end_offset,
                        )
                        .with_position_length(length);

                        token.position_increment = if j == 0 {
                            first.position_increment
                        } else {
                            0
                        };
                        result.push(token);
                    }
                    i += length;
                }
                None => {
                    result.push(tokens[i].clone());
                    i += 1;
                }
            }
        }

        Ok(Box::new(result.into_iter()))
    }

    fn name(&self) -> &'static str {
        "synonym"
    }
}
