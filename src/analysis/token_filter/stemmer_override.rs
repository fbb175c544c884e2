//! Stemmer override filter implementation.
//!
//! Substitutes a token's text with a configured replacement before any
//! algorithmic stemmer runs, and marks the token as a keyword so later
//! stemmers skip it. Rules come as `key => replacement` lines.
//!
//! # Examples
//!
//! ```
//! use uber_filters::analysis::token::Token;
//! use uber_filters::analysis::token_filter::Filter;
//! use uber_filters::analysis::token_filter::stemmer_override::StemmerOverrideFilter;
//!
//! let filter = StemmerOverrideFilter::from_rules(&["running => run".to_string()]).unwrap();
//! let tokens = vec![Token::new("running", 0)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "run");
//! assert!(result[0].is_keyword());
//! ```

use std::collections::HashMap;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::{Result, UberFilterError};

/// Separator between the key and the replacement in a rule line.
const MAPPING_SEPARATOR: &str = "=>";

/// A filter that replaces a token's stem with a configured override.
///
/// The key → replacement table is case-sensitive and immutable after
/// construction. Tokens already marked as keywords are left alone.
#[derive(Clone, Debug)]
pub struct StemmerOverrideFilter {
    overrides: HashMap<String, String>,
}

impl StemmerOverrideFilter {
    /// Build the override table from `key => replacement` rule lines.
    ///
    /// Each line must contain the separator exactly once, with both sides
    /// non-empty after trimming; anything else fails with a configuration
    /// error naming the offending rule.
    pub fn from_rules(rules: &[String]) -> Result<Self> {
        let mut overrides = HashMap::with_capacity(rules.len());

        for rule in rules {
            let mut mapping = rule.split(MAPPING_SEPARATOR);
            let (key, replacement) = match (mapping.next(), mapping.next(), mapping.next()) {
                (Some(key), Some(replacement), None) => (key.trim(), replacement.trim()),
                _ => {
                    return Err(UberFilterError::configuration(format!(
                        "Invalid stemmer override rule: {rule}"
                    )));
                }
            };

            if key.is_empty() || replacement.is_empty() {
                return Err(UberFilterError::configuration(format!(
                    "Invalid stemmer override rule: {rule}"
                )));
            }

            overrides.insert(key.to_string(), replacement.to_string());
        }

        Ok(StemmerOverrideFilter { overrides })
    }

    /// Look up the override for a token text, if any.
    pub fn override_for(&self, text: &str) -> Option<&str> {
        self.overrides.get(text).map(|s| s.as_str())
    }

    /// Get the number of override rules.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Check if the override table is empty.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl Filter for StemmerOverrideFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_keyword() {
                    return token;
                }
                match self.override_for(&token.text) {
                    Some(replacement) => token.with_text(replacement.to_string()).keyword(),
                    None => token,
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stemmer_override"
    }
}
