//! Synonym rule parsing and the synonym lookup table.
//!
//! Synonym rules arrive as a text document in one of two dialects
//! ([`solr`]-style or [`wordnet`]-style) and are compiled at
//! filter-construction time into an immutable [`SynonymMap`]: a table from
//! normalized input phrases to their alternatives. Rule terms are normalized
//! through a [`RuleNormalizer`] (a named tokenizer plus optional lowercasing)
//! before they enter the table, so lookup at filter time matches what the
//! parser produced.
//!
//! # Examples
//!
//! ```
//! use uber_filters::analysis::synonym::{RuleNormalizer, solr};
//!
//! let normalizer = RuleNormalizer::whitespace(false);
//! let map = solr::parse("universe, cosmos", true, &normalizer).unwrap();
//!
//! let alternatives = map.lookup("universe").unwrap();
//! assert!(alternatives.contains(&"cosmos".to_string()));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::{Result, UberFilterError};

pub mod solr;
pub mod wordnet;

/// Normalizes synonym rule terms before they enter the lookup table.
///
/// Runs the configured tokenizer over each term (lowercasing the tokens when
/// requested) and joins the resulting words with a single space, so
/// multi-word terms become canonical phrases.
pub struct RuleNormalizer {
    tokenizer: Arc<dyn Tokenizer>,
    lowercase: bool,
}

impl RuleNormalizer {
    /// Create a normalizer around the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, lowercase: bool) -> Self {
        RuleNormalizer {
            tokenizer,
            lowercase,
        }
    }

    /// Create a whitespace-splitting normalizer, the default for synonym rules.
    pub fn whitespace(lowercase: bool) -> Self {
        Self::new(Arc::new(WhitespaceTokenizer::new()), lowercase)
    }

    /// Normalize one rule term into a canonical phrase.
    ///
    /// Fails when the tokenizer produces no tokens for the term.
    pub fn normalize(&self, term: &str) -> Result<String> {
        let mut tokens = self.tokenizer.tokenize(term)?;
        if self.lowercase {
            tokens = LowercaseFilter::new().filter(tokens)?;
        }

        let words: Vec<String> = tokens.map(|t| t.text).collect();
        if words.is_empty() {
            return Err(UberFilterError::configuration(format!(
                "term [{term}] analyzes to no tokens"
            )));
        }

        Ok(words.join(" "))
    }
}

/// Immutable synonym lookup table built at filter-construction time.
///
/// Keys are normalized phrases (words joined by single spaces); values are
/// the alternative phrases to emit when the key matches.
#[derive(Clone, Debug, Default)]
pub struct SynonymMap {
    entries: HashMap<String, Vec<String>>,
    max_phrase_words: usize,
}

impl SynonymMap {
    /// Look up the alternatives for a normalized phrase.
    pub fn lookup(&self, phrase: &str) -> Option<&[String]> {
        self.entries.get(phrase).map(|v| v.as_slice())
    }

    /// The longest input phrase in the table, in words.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Get the number of input phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder accumulating synonym mappings from the dialect parsers.
#[derive(Debug, Default)]
pub struct SynonymMapBuilder {
    entries: HashMap<String, Vec<String>>,
    max_phrase_words: usize,
}

impl SynonymMapBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        SynonymMapBuilder::default()
    }

    /// Map one input phrase to an output phrase, skipping duplicates.
    pub fn add_mapping(&mut self, input: &str, output: &str) {
        self.max_phrase_words = self.max_phrase_words.max(input.split(' ').count());

        let outputs = self.entries.entry(input.to_string()).or_default();
        if !outputs.iter().any(|o| o == output) {
            outputs.push(output.to_string());
        }
    }

    /// Add a synonym group (`a, b, c` style).
    ///
    /// With `expand` every term maps to every term in the group (itself
    /// included), making the group bidirectional. Without it every term maps
    /// to the first term only.
    pub fn add_group(&mut self, terms: &[String], expand: bool) {
        if terms.is_empty() {
            return;
        }

        if expand {
            for input in terms {
                for output in terms {
                    self.add_mapping(input, output);
                }
            }
        } else {
            for input in terms {
                self.add_mapping(input, &terms[0]);
            }
        }
    }

    /// Add a directional rule (`lhs, ... => rhs, ...` style): every input is
    /// replaced by the outputs.
    pub fn add_directional(&mut self, inputs: &[String], outputs: &[String]) {
        for input in inputs {
            for output in outputs {
                self.add_mapping(input, output);
            }
        }
    }

    /// Finish building the immutable map.
    pub fn build(self) -> SynonymMap {
        SynonymMap {
            entries: self.entries,
            max_phrase_words: self.max_phrase_words,
        }
    }
}
