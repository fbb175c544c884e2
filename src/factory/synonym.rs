//! Synonym filter factory (`uber_synonym`).
//!
//! The most structurally complex factory: it builds a rule-normalization
//! analyzer (a named tokenizer plus optional lowercasing), picks one of two
//! rule-dialect parsers (`format`: Solr-style by default, `wordnet`
//! otherwise), and compiles the rules into an immutable [`SynonymMap`] at
//! construction. Rule text comes from the database source (loaded lines
//! joined into one document), an inline `synonyms` list, or a
//! `synonyms_path` file.
//!
//! If the compiled table ends up empty, `create` is the identity
//! pass-through rather than a no-op-wrapping filter.
//!
//! [`SynonymMap`]: crate::analysis::synonym::SynonymMap
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use uber_filters::analysis::token::Token;
//! use uber_filters::factory::{SynonymFilterFactory, TokenFilterFactory};
//! use uber_filters::settings::ConnectionSettings;
//!
//! let factory = SynonymFilterFactory::new(
//!     &ConnectionSettings::default(),
//!     "my_synonyms",
//!     &json!({ "synonyms": ["universe, cosmos"] }),
//! )
//! .unwrap();
//!
//! let tokens = vec![Token::new("universe", 0)];
//! let texts: Vec<_> = factory.create(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(texts, vec!["universe", "cosmos"]);
//! ```

use log::info;
use serde::Deserialize;

use crate::analysis::synonym::{self, RuleNormalizer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::synonym::SynonymFilter;
use crate::analysis::tokenizer::tokenizer_by_name;
use crate::analysis::word_list;
use crate::error::{Result, UberFilterError};
use crate::factory::{TermSource, TokenFilterFactory};
use crate::settings::{self, ConnectionSettings, TermSourceSettings};

fn default_expand() -> bool {
    true
}

fn default_tokenizer() -> String {
    "whitespace".to_string()
}

#[derive(Debug, Deserialize)]
struct SynonymSettings {
    #[serde(flatten)]
    source: TermSourceSettings,

    synonyms: Option<Vec<String>>,
    synonyms_path: Option<String>,

    format: Option<String>,

    #[serde(default = "default_expand")]
    expand: bool,

    #[serde(default = "default_tokenizer")]
    tokenizer: String,

    #[serde(default)]
    ignore_case: bool,
}

/// Factory producing synonym filters.
#[derive(Debug)]
pub struct SynonymFilterFactory {
    name: String,
    /// `None` when the rule table compiled empty; `create` then passes through
    filter: Option<SynonymFilter>,
}

impl SynonymFilterFactory {
    /// Construct the factory, resolving and compiling the rule source now.
    pub fn new(
        connection: &ConnectionSettings,
        name: &str,
        filter_settings: &serde_json::Value,
    ) -> Result<Self> {
        info!("Creating {name}");
        let s: SynonymSettings = settings::filter_settings(name, filter_settings)?;

        let rules_text = Self::rules_text(connection, &s)?;

        let tokenizer = tokenizer_by_name(&s.tokenizer).ok_or_else(|| {
            UberFilterError::configuration(format!(
                "failed to find tokenizer [{}] for synonym token filter",
                s.tokenizer
            ))
        })?;
        let normalizer = RuleNormalizer::new(tokenizer, s.ignore_case);

        let wordnet = s
            .format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("wordnet"));

        let map = if wordnet {
            synonym::wordnet::parse(&rules_text, s.expand, &normalizer)
        } else {
            synonym::solr::parse(&rules_text, s.expand, &normalizer)
        }
        .map_err(|e| UberFilterError::configuration(format!("failed to build synonyms: {e}")))?;

        let filter = if map.is_empty() {
            None
        } else {
            Some(SynonymFilter::new(map, s.ignore_case))
        };

        Ok(SynonymFilterFactory {
            name: name.to_string(),
            filter,
        })
    }

    /// Resolve the rule document: database lines joined with `\n`, or the
    /// static settings.
    fn rules_text(connection: &ConnectionSettings, s: &SynonymSettings) -> Result<String> {
        let term_source = TermSource::from_settings(connection, &s.source)?;

        if let Some(terms) = term_source.load_terms()? {
            return Ok(terms.join("\n"));
        }

        if let Some(lines) = &s.synonyms {
            Ok(lines.join("\n"))
        } else if let Some(path) = &s.synonyms_path {
            word_list::read_rules_text(path)
        } else {
            Err(UberFilterError::configuration(
                "synonym filter requires either `query`, `synonyms` or `synonyms_path` \
                 to be configured",
            ))
        }
    }

    /// Whether the compiled rule table has any entries.
    pub fn has_rules(&self) -> bool {
        self.filter.is_some()
    }
}

impl TokenFilterFactory for SynonymFilterFactory {
    fn create(&self, tokens: TokenStream) -> Result<TokenStream> {
        match &self.filter {
            Some(filter) => filter.filter(tokens),
            // empty rule table: identity pass-through
            None => Ok(tokens),
        }
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

    fn apply(factory: &SynonymFilterFactory, words: &[&str]) -> Vec<String> {
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
    fn test_solr_rules() {
        let factory = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({ "synonyms": ["i-pod, i pod => ipod", "universe, cosmos"] }),
        )
        .unwrap();

        assert_eq!(apply(&factory, &["i-pod"]), vec!["ipod"]);
        assert_eq!(apply(&factory, &["i", "pod"]), vec!["ipod"]);
        assert_eq!(
            apply(&factory, &["universe"]),
            vec!["universe", "cosmos"]
        );
        assert_eq!(apply(&factory, &["cosmos"]), vec!["universe", "cosmos"]);
    }

    #[test]
    fn test_expand_false() {
        let factory = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({ "synonyms": ["universe, cosmos"], "expand": false }),
        )
        .unwrap();

        assert_eq!(apply(&factory, &["cosmos"]), vec!["universe"]);
    }

    #[test]
    fn test_wordnet_format() {
        let factory = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({
                "synonyms": [
                    "s(1,1,'universe',n,1,0).",
                    "s(1,2,'cosmos',n,1,0).",
                ],
                "format": "wordnet",
            }),
        )
        .unwrap();

        assert_eq!(apply(&factory, &["cosmos"]), vec!["universe", "cosmos"]);
    }

    #[test]
    fn test_ignore_case() {
        let factory = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({ "synonyms": ["Universe, Cosmos"], "ignore_case": true }),
        )
        .unwrap();

        assert_eq!(
            apply(&factory, &["UNIVERSE"]),
            vec!["universe", "cosmos"]
        );
    }

    #[test]
    fn test_empty_rules_pass_through() {
        let factory = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({ "synonyms": ["# nothing but comments"] }),
        )
        .unwrap();

        assert!(!factory.has_rules());
        assert_eq!(apply(&factory, &["hello"]), vec!["hello"]);
    }

    #[test]
    fn test_unknown_tokenizer_is_rejected() {
        let err = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({ "synonyms": ["a, b"], "tokenizer": "standard" }),
        )
        .unwrap_err();

        assert!(
            err.to_string()
                .contains("failed to find tokenizer [standard]")
        );
    }

    #[test]
    fn test_malformed_rules_are_fatal() {
        let err = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({ "synonyms": ["a => b => c"] }),
        )
        .unwrap_err();

        assert!(err.to_string().contains("failed to build synonyms"));
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let err = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({}),
        )
        .unwrap_err();

        assert!(err.to_string().contains("`synonyms_path`"));
    }

    #[test]
    fn test_query_without_connection_settings() {
        let err = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({ "query": "select * from synonyms" }),
        )
        .unwrap_err();

        assert!(
            err.to_string()
                .contains("Required uber_filters. settings are not defined")
        );
    }

    #[test]
    fn test_synonyms_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "universe, cosmos").unwrap();
        file.flush().unwrap();

        let factory = SynonymFilterFactory::new(
            &ConnectionSettings::default(),
            "synonyms",
            &json!({ "synonyms_path": file.path().to_str().unwrap() }),
        )
        .unwrap();

        assert_eq!(apply(&factory, &["cosmos"]), vec!["universe", "cosmos"]);
    }
}
