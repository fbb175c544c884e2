//! Stop filter factory (`uber_stop`).
//!
//! Builds a stop-word set from the database source (`query`), an inline
//! `stopwords` list, a `stopwords_path` file, or the default English set when
//! nothing is configured. `remove_trailing` (default true) selects between
//! standard removal everywhere and trailing-only suggest mode. The retired
//! `enable_position_increments` setting is rejected outright.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use uber_filters::analysis::token::Token;
//! use uber_filters::factory::{StopFilterFactory, TokenFilterFactory};
//! use uber_filters::settings::ConnectionSettings;
//!
//! let factory = StopFilterFactory::new(
//!     &ConnectionSettings::default(),
//!     "my_stop",
//!     &json!({ "stopwords": ["not"] }),
//! )
//! .unwrap();
//!
//! let tokens = vec![
//!     Token::new("does", 0),
//!     Token::new("not", 1),
//!     Token::new("matter", 2),
//! ];
//! let result: Vec<_> = factory.create(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//! assert_eq!(result.len(), 2);
//! ```

use std::collections::HashSet;

use log::info;
use serde::Deserialize;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::{DEFAULT_ENGLISH_STOP_WORDS_SET, StopFilter};
use crate::analysis::word_list;
use crate::error::{Result, UberFilterError};
use crate::factory::{TermSource, TokenFilterFactory};
use crate::settings::{self, ConnectionSettings, TermSourceSettings};

fn default_remove_trailing() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct StopSettings {
    #[serde(flatten)]
    source: TermSourceSettings,

    stopwords: Option<Vec<String>>,
    stopwords_path: Option<String>,

    #[serde(default)]
    ignore_case: bool,

    #[serde(default = "default_remove_trailing")]
    remove_trailing: bool,

    // retired; any value is a configuration error
    enable_position_increments: Option<serde_json::Value>,
}

/// Factory producing stop filters.
#[derive(Debug)]
pub struct StopFilterFactory {
    name: String,
    filter: StopFilter,
}

impl StopFilterFactory {
    /// Construct the factory, resolving the stop-word source now.
    pub fn new(
        connection: &ConnectionSettings,
        name: &str,
        filter_settings: &serde_json::Value,
    ) -> Result<Self> {
        info!("Creating {name}");
        let s: StopSettings = settings::filter_settings(name, filter_settings)?;

        if s.enable_position_increments.is_some() {
            return Err(UberFilterError::configuration(
                "enable_position_increments is not supported anymore. \
                 Please fix your analysis chain",
            ));
        }

        let term_source = TermSource::from_settings(connection, &s.source)?;

        let stop_words: HashSet<String> = match term_source.load_terms()? {
            Some(terms) => terms.into_iter().collect(),
            None => {
                if let Some(words) = &s.stopwords {
                    word_list::parse_word_list(words).into_iter().collect()
                } else if let Some(path) = &s.stopwords_path {
                    word_list::read_word_list(path)?.into_iter().collect()
                } else {
                    DEFAULT_ENGLISH_STOP_WORDS_SET.clone()
                }
            }
        };

        let filter = StopFilter::with_stop_words(stop_words, s.ignore_case)
            .remove_trailing(s.remove_trailing);

        Ok(StopFilterFactory {
            name: name.to_string(),
            filter,
        })
    }
}

impl TokenFilterFactory for StopFilterFactory {
    fn create(&self, tokens: TokenStream) -> Result<TokenStream> {
        self.filter.filter(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
