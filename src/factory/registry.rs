//! Registry of the built-in uber filter types.
//!
//! Exposes the four filter factories under the names the host configuration
//! system refers to them by. Every filter requires explicit per-use
//! configuration; no default or shared instance is preloaded.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use uber_filters::factory::registry;
//! use uber_filters::settings::ConnectionSettings;
//!
//! let filters = registry::builtin_filters();
//! let build = filters["uber_stop"];
//!
//! let factory = build(
//!     &ConnectionSettings::default(),
//!     "my_stop",
//!     &json!({ "stopwords": ["the"] }),
//! )
//! .unwrap();
//! assert_eq!(factory.name(), "my_stop");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::factory::{
    KeywordMarkerFilterFactory, StemmerOverrideFilterFactory, StopFilterFactory,
    SynonymFilterFactory, TokenFilterFactory,
};
use crate::settings::ConnectionSettings;

/// Constructor signature shared by all registered filter types.
pub type FactoryBuilder =
    fn(&ConnectionSettings, &str, &serde_json::Value) -> Result<Arc<dyn TokenFilterFactory>>;

/// The built-in filter types, keyed by their registered names.
pub fn builtin_filters() -> HashMap<&'static str, FactoryBuilder> {
    let mut filters: HashMap<&'static str, FactoryBuilder> = HashMap::new();

    filters.insert("uber_keyword_marker", |connection, name, settings| {
        Ok(Arc::new(KeywordMarkerFilterFactory::new(
            connection, name, settings,
        )?))
    });
    filters.insert("uber_stemmer_override", |connection, name, settings| {
        Ok(Arc::new(StemmerOverrideFilterFactory::new(
            connection, name, settings,
        )?))
    });
    filters.insert("uber_stop", |connection, name, settings| {
        Ok(Arc::new(StopFilterFactory::new(connection, name, settings)?))
    });
    filters.insert("uber_synonym", |connection, name, settings| {
        Ok(Arc::new(SynonymFilterFactory::new(
            connection, name, settings,
        )?))
    });

    filters
}
