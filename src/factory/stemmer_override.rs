//! Stemmer override filter factory (`uber_stemmer_override`).
//!
//! Builds an immutable key → replacement table from `key => replacement` rule
//! lines sourced from the database (`query`), an inline `rules` list, or a
//! `rules_path` file.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use uber_filters::analysis::token::Token;
//! use uber_filters::factory::{StemmerOverrideFilterFactory, TokenFilterFactory};
//! use uber_filters::settings::ConnectionSettings;
//!
//! let factory = StemmerOverrideFilterFactory::new(
//!     &ConnectionSettings::default(),
//!     "my_overrides",
//!     &json!({ "rules": ["running => run"] }),
//! )
//! .unwrap();
//!
//! let tokens = vec![Token::new("running", 0)];
//! let result: Vec<_> = factory.create(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//! assert_eq!(result[0].text, "run");
//! ```

use log::info;
use serde::Deserialize;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stemmer_override::StemmerOverrideFilter;
use crate::analysis::word_list;
use crate::error::{Result, UberFilterError};
use crate::factory::{TermSource, TokenFilterFactory};
use crate::settings::{self, ConnectionSettings, TermSourceSettings};

#[derive(Debug, Default, Deserialize)]
struct StemmerOverrideSettings {
    #[serde(flatten)]
    source: TermSourceSettings,

    rules: Option<Vec<String>>,
    rules_path: Option<String>,
}

/// Factory producing stemmer override filters.
#[derive(Debug)]
pub struct StemmerOverrideFilterFactory {
    name: String,
    filter: StemmerOverrideFilter,
}

impl StemmerOverrideFilterFactory {
    /// Construct the factory, resolving and parsing the rule source now.
    ///
    /// Any rule line without exactly one `=>` separator, or with an empty
    /// side, fails construction with a configuration error naming the rule.
    pub fn new(
        connection: &ConnectionSettings,
        name: &str,
        filter_settings: &serde_json::Value,
    ) -> Result<Self> {
        info!("Creating {name}");
        let s: StemmerOverrideSettings = settings::filter_settings(name, filter_settings)?;

        let term_source = TermSource::from_settings(connection, &s.source)?;

        let rules = match term_source.load_terms()? {
            Some(terms) => terms,
            None => {
                if let Some(rules) = &s.rules {
                    word_list::parse_word_list(rules)
                } else if let Some(path) = &s.rules_path {
                    word_list::read_word_list(path)?
                } else {
                    return Err(UberFilterError::configuration(
                        "uber stemmer override filter requires either `query`, `rules` \
                         or `rules_path` to be configured",
                    ));
                }
            }
        };

        let filter = StemmerOverrideFilter::from_rules(&rules)?;

        Ok(StemmerOverrideFilterFactory {
            name: name.to_string(),
            filter,
        })
    }
}

impl TokenFilterFactory for StemmerOverrideFilterFactory {
    fn create(&self, tokens: TokenStream) -> Result<TokenStream> {
        self.filter.filter(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::analysis::token::Token;

    fn apply(factory: &StemmerOverrideFilterFactory, words: &[&str]) -> Vec<String> {
        let tokens: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();

        factory
            .create(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_static_rules() {
        let factory = StemmerOverrideFilterFactory::new(
            &ConnectionSettings::default(),
            "overrides",
            &json!({ "rules": ["running => run", "mice => mouse"] }),
        )
        .unwrap();

        assert_eq!(
            apply(&factory, &["running", "mice", "cats"]),
            vec!["run", "mouse", "cats"]
        );
    }

    #[test]
    fn test_rules_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# overrides").unwrap();
        writeln!(file, "running => run").unwrap();
        file.flush().unwrap();

        let factory = StemmerOverrideFilterFactory::new(
            &ConnectionSettings::default(),
            "overrides",
            &json!({ "rules_path": file.path().to_str().unwrap() }),
        )
        .unwrap();

        assert_eq!(apply(&factory, &["running"]), vec!["run"]);
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let err = StemmerOverrideFilterFactory::new(
            &ConnectionSettings::default(),
            "overrides",
            &json!({}),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("`query`"));
        assert!(message.contains("`rules_path`"));
    }

    #[test]
    fn test_malformed_rule_is_fatal() {
        let err = StemmerOverrideFilterFactory::new(
            &ConnectionSettings::default(),
            "overrides",
            &json!({ "rules": ["running run"] }),
        )
        .unwrap_err();

        assert!(err.to_string().contains("running run"));
    }

    #[test]
    fn test_query_without_connection_settings() {
        let err = StemmerOverrideFilterFactory::new(
            &ConnectionSettings::default(),
            "overrides",
            &json!({ "query": "SELECT rule FROM overrides" }),
        )
        .unwrap_err();

        assert!(
            err.to_string()
                .contains("Required uber_filters. settings are not defined")
        );
    }
}
