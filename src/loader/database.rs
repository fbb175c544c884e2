//! Database-backed term loader.
//!
//! Fetches a flat list of terms from a relational database with a single
//! parameterized query, reading the first column of every row. The loader is
//! narrow on purpose: one connection, one read-only statement, no
//! transactions, no retries.
//!
//! # Examples
//!
//! ```no_run
//! use uber_filters::loader::{DatabaseTermLoader, TermLoader};
//! use uber_filters::settings::{ConnectionSettings, TermSourceSettings};
//!
//! let connection = ConnectionSettings {
//!     driver: Some("sqlite".to_string()),
//!     url: Some("sqlite://terms.db".to_string()),
//!     ..Default::default()
//! };
//! let source = TermSourceSettings {
//!     query: Some("SELECT term FROM stopwords".to_string()),
//!     params: vec![],
//! };
//!
//! let loader = DatabaseTermLoader::new(&connection, &source).unwrap();
//! let terms = loader.load_terms().unwrap();
//! ```

use std::sync::Once;
use std::time::Duration;

use futures::TryStreamExt;
use log::{debug, info, warn};
use sqlx::{AnyConnection, Connection, Row};

use crate::error::{Result, UberFilterError};
use crate::loader::TermLoader;
use crate::settings::{ConnectionSettings, TermSourceSettings};

/// Fixed server-side query timeout bounding worst-case blocking.
const QUERY_TIMEOUT: Duration = Duration::from_secs(60 * 20);

static DRIVERS_LOADED: Once = Once::new();

/// Install the database drivers exactly once per process.
///
/// `Once` serializes the check-then-act for factories constructed in
/// parallel during startup.
fn load_driver(driver: &str) {
    if DRIVERS_LOADED.is_completed() {
        debug!("Driver {driver} already loaded");
    } else {
        DRIVERS_LOADED.call_once(|| {
            debug!("Load driver {driver}");
            sqlx::any::install_default_drivers();
        });
    }
}

/// A [`TermLoader`] that reads terms from a SQL database.
///
/// Owned by exactly one filter factory and invoked at most once, synchronously,
/// during that factory's construction. Construction validates that the shared
/// `uber_filters.jdbc.driver` and `uber_filters.jdbc.url` settings are present
/// but performs no I/O; connectivity failures surface only from
/// [`load_terms`](TermLoader::load_terms).
///
/// The concrete driver is selected from the URL scheme when the connection is
/// opened; the configured `driver` identifier is validated for presence and
/// logged. `user` and `password` are accepted in configuration but currently
/// not applied to the connection (connect via the URL instead).
#[derive(Debug)]
pub struct DatabaseTermLoader {
    driver: String,
    url: String,
    fetchsize: u32,

    // filter level settings
    query: String,
    params: Vec<String>,
}

impl DatabaseTermLoader {
    /// Create a loader from the shared connection settings and the filter's
    /// local term-source settings.
    ///
    /// Fails with a configuration error naming the missing keys when
    /// `jdbc.driver` or `jdbc.url` is absent, or when no `query` is set.
    pub fn new(connection: &ConnectionSettings, source: &TermSourceSettings) -> Result<Self> {
        let (driver, url) = connection.require_connection()?;

        let query = source.query.clone().ok_or_else(|| {
            UberFilterError::configuration("database term loader requires a `query` setting")
        })?;

        info!(
            "load with driver:{} url:{} query:{}",
            driver, url, query
        );

        Ok(DatabaseTermLoader {
            driver: driver.to_string(),
            url: url.to_string(),
            fetchsize: connection.fetchsize,
            query,
            params: source.params.clone(),
        })
    }

    async fn run_query(&self) -> Result<Vec<String>> {
        let mut connection = AnyConnection::connect(&self.url).await.map_err(|e| {
            UberFilterError::load(format!("failed to connect to [{}]", self.url), e)
        })?;

        let result = self.stream_terms(&mut connection).await;

        // close failures are logged, not returned
        if let Err(e) = connection.close().await {
            warn!("failed to close connection: {e}");
        }

        result
    }

    async fn stream_terms(&self, connection: &mut AnyConnection) -> Result<Vec<String>> {
        let mut statement = sqlx::query(&self.query);
        for param in &self.params {
            statement = statement.bind(param.as_str());
        }

        debug!("query: {}", self.query);

        // the fetch size is a batching hint, not a correctness constraint
        let mut terms = Vec::with_capacity(self.fetchsize as usize);

        let mut rows = statement.fetch(connection);
        while let Some(row) = rows
            .try_next()
            .await
            .map_err(|e| UberFilterError::load("query execution failed", e))?
        {
            let value: String = row
                .try_get(0)
                .map_err(|e| UberFilterError::load("failed to read term column", e))?;

            let term = value.trim();
            debug!("next term: {term}");
            if term.is_empty() || term.starts_with('#') {
                continue;
            }
            terms.push(term.to_string());
        }

        Ok(terms)
    }
}

impl TermLoader for DatabaseTermLoader {
    fn load_terms(&self) -> Result<Vec<String>> {
        load_driver(&self.driver);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| UberFilterError::load("failed to start database runtime", e))?;

        let terms = runtime.block_on(async {
            tokio::time::timeout(QUERY_TIMEOUT, self.run_query())
                .await
                .map_err(|e| {
                    UberFilterError::load(
                        format!("query timed out after {}s", QUERY_TIMEOUT.as_secs()),
                        e,
                    )
                })?
        })?;

        debug!("loaded {} terms", terms.len());
        Ok(terms)
    }

    fn name(&self) -> &'static str {
        "database"
    }
}
