//! Keyword marker filter factory (`uber_keyword_marker`).
//!
//! Marks configured tokens as exempt from stemming. The keyword list comes
//! from the database source (`query`), an inline `keywords` list, a
//! `keywords_path` word-list file, or a `keywords_pattern` regular
//! expression.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use uber_filters::analysis::token::Token;
//! use uber_filters::factory::{KeywordMarkerFilterFactory, TokenFilterFactory};
//! use uber_filters::settings::ConnectionSettings;
//!
//! let factory = KeywordMarkerFilterFactory::new(
//!     &ConnectionSettings::default(),
//!     "my_keywords",
//!     &json!({ "keywords": ["elasticsearch"] }),
//! )
//! .unwrap();
//!
//! let tokens = vec![Token::new("elasticsearch", 0)];
//! let result: Vec<_> = factory.create(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//! assert!(result[0].is_keyword());
//! ```

use log::info;
use regex::Regex;
use serde::Deserialize;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
use crate::analysis::word_list;
use crate::error::{Result, UberFilterError};
use crate::factory::{TermSource, TokenFilterFactory};
use crate::settings::{self, ConnectionSettings, TermSourceSettings};

#[derive(Debug, Default, Deserialize)]
struct KeywordMarkerSettings {
    #[serde(flatten)]
    source: TermSourceSettings,

    keywords: Option<Vec<String>>,
    keywords_path: Option<String>,
    keywords_pattern: Option<String>,

    #[serde(default)]
    ignore_case: bool,
}

/// Factory producing keyword marker filters.
#[derive(Debug)]
pub struct KeywordMarkerFilterFactory {
    name: String,
    filter: KeywordMarkerFilter,
}

impl KeywordMarkerFilterFactory {
    /// Construct the factory, resolving and parsing the keyword source now.
    pub fn new(
        connection: &ConnectionSettings,
        name: &str,
        filter_settings: &serde_json::Value,
    ) -> Result<Self> {
        info!("Creating {name}");
        let s: KeywordMarkerSettings = settings::filter_settings(name, filter_settings)?;

        let term_source = TermSource::from_settings(connection, &s.source)?;

        let keywords = match term_source.load_terms()? {
            Some(terms) => Some(terms),
            None => {
                if let Some(words) = &s.keywords {
                    Some(word_list::parse_word_list(words))
                } else if let Some(path) = &s.keywords_path {
                    Some(word_list::read_word_list(path)?)
                } else {
                    None
                }
            }
        };

        let filter = match keywords {
            Some(words) => KeywordMarkerFilter::from_words(words, s.ignore_case),
            None => {
                let pattern = s.keywords_pattern.as_deref().ok_or_else(|| {
                    UberFilterError::configuration(
                        "uber keyword filter requires either `query`, `keywords`, \
                         `keywords_path`, or `keywords_pattern` to be configured",
                    )
                })?;

                let regex = Regex::new(pattern).map_err(|e| {
                    UberFilterError::configuration(format!(
                        "invalid `keywords_pattern` [{pattern}]: {e}"
                    ))
                })?;
                KeywordMarkerFilter::from_pattern(regex)
            }
        };

        Ok(KeywordMarkerFilterFactory {
            name: name.to_string(),
            filter,
        })
    }
}

impl TokenFilterFactory for KeywordMarkerFilterFactory {
    fn create(&self, tokens: TokenStream) -> Result<TokenStream> {
        self.filter.filter(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
