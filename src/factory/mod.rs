//! Token filter factories with configurable term sources.
//!
//! A factory is constructed once per named filter definition, at index/filter
//! configuration time. Construction synchronously resolves the term source
//! (database query or static settings), parses it into the filter-specific
//! structure, and stores the immutable result; per-document filtering only
//! consumes that precomputed structure.
//!
//! Term-source resolution is the same for every filter kind (see
//! [`TermSource`]): a configured `query` wins and the static fallback is
//! skipped entirely; a configured-but-failing database source is a fatal
//! construction error, not a fallback to the static path.

use log::{debug, warn};

use crate::analysis::token::TokenStream;
use crate::error::Result;
use crate::loader::{DatabaseTermLoader, TermLoader};
use crate::settings::{ConnectionSettings, TermSourceSettings};

/// Trait for factories that produce configured token filter stages.
///
/// `create` wraps a token stream with this factory's precomputed filter. A
/// factory can be applied to any number of streams; its configuration is
/// immutable after construction.
pub trait TokenFilterFactory: Send + Sync {
    /// Apply this factory's filter to a token stream.
    fn create(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// The configured name of this filter definition.
    fn name(&self) -> &str;
}

/// Shared term-source resolution used by all four filter factories.
///
/// The factories only see the [`TermLoader`] capability through this type.
pub(crate) struct TermSource {
    loader: Option<DatabaseTermLoader>,
}

impl TermSource {
    /// Construct the loader when the filter settings configure a `query`.
    ///
    /// Missing connection settings fail here, before any I/O.
    pub fn from_settings(
        connection: &ConnectionSettings,
        source: &TermSourceSettings,
    ) -> Result<Self> {
        let loader = if source.query.is_some() {
            Some(DatabaseTermLoader::new(connection, source)?)
        } else {
            warn!("No term loader created");
            None
        };

        Ok(TermSource { loader })
    }

    /// Load terms from the configured loader, if any.
    ///
    /// `Ok(None)` means "no database source configured, use the static path".
    /// A loader failure propagates; it never degrades to the static path.
    pub fn load_terms(&self) -> Result<Option<Vec<String>>> {
        match &self.loader {
            Some(loader) => {
                let terms = loader.load_terms()?;
                debug!("Found {} terms", terms.len());
                Ok(Some(terms))
            }
            None => {
                warn!("No term loader defined");
                Ok(None)
            }
        }
    }
}

// Individual factory modules
pub mod keyword_marker;
pub mod registry;
pub mod stemmer_override;
pub mod stop;
pub mod synonym;

pub use keyword_marker::KeywordMarkerFilterFactory;
pub use stemmer_override::StemmerOverrideFilterFactory;
pub use stop::StopFilterFactory;
pub use synonym::SynonymFilterFactory;
