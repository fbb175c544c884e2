//! Settings types for filter configuration.
//!
//! Two scopes exist: connection settings live in the process/index-wide
//! `uber_filters.` namespace and are shared by every filter definition, while
//! term-source settings (`query`, `params`) are local to a single filter.
//! Filter factories deserialize their own typed settings structs from the
//! host's JSON configuration blob and embed [`TermSourceSettings`] via
//! `#[serde(flatten)]`.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, UberFilterError};

/// Namespace prefix for the shared connection settings.
pub const PLUGIN_PREFIX: &str = "uber_filters.";

/// Default number of rows the driver is hinted to fetch per round trip.
pub const DEFAULT_FETCH_SIZE: u32 = 100;

fn default_fetch_size() -> u32 {
    DEFAULT_FETCH_SIZE
}

/// Process/index-scoped database connection settings (`uber_filters.jdbc.*`).
///
/// `driver` and `url` are required as soon as any filter configures a `query`;
/// `user` and `password` are accepted but currently not applied to the
/// connection, which is a known gap rather than a feature.
///
/// # Examples
///
/// ```
/// use uber_filters::settings::ConnectionSettings;
///
/// let settings = ConnectionSettings {
///     driver: Some("sqlite".to_string()),
///     url: Some("sqlite://terms.db".to_string()),
///     ..Default::default()
/// };
/// assert!(settings.require_connection().is_ok());
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Database driver identifier (`uber_filters.jdbc.driver`)
    pub driver: Option<String>,

    /// Database connection URL (`uber_filters.jdbc.url`)
    pub url: Option<String>,

    /// Credentials (`uber_filters.jdbc.user`, `.password`).
    /// Accepted but not applied to the connection; connect via the URL.
    pub user: Option<String>,
    pub password: Option<String>,

    /// Result batching hint (`uber_filters.jdbc.fetchsize`, default 100)
    pub fetchsize: u32,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        ConnectionSettings {
            driver: None,
            url: None,
            user: None,
            password: None,
            fetchsize: default_fetch_size(),
        }
    }
}

impl ConnectionSettings {
    /// Validate that the settings required for database sourcing are present.
    ///
    /// Returns `(driver, url)` on success. The error message names every
    /// missing key and keeps the `Required uber_filters. settings are not
    /// defined` prefix relied on by existing deployments.
    pub fn require_connection(&self) -> Result<(&str, &str)> {
        let mut missing = Vec::new();
        if self.driver.is_none() {
            missing.push("jdbc.driver");
        }
        if self.url.is_none() {
            missing.push("jdbc.url");
        }

        if missing.is_empty() {
            Ok((
                self.driver.as_deref().unwrap_or_default(),
                self.url.as_deref().unwrap_or_default(),
            ))
        } else {
            Err(UberFilterError::configuration(format!(
                "Required {PLUGIN_PREFIX} settings are not defined: {missing:?}"
            )))
        }
    }
}

/// Filter-local term-source settings shared by all four filter kinds.
///
/// Presence of `query` signals "use the database source"; `params` are bound
/// positionally, in order.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TermSourceSettings {
    /// SQL query returning one term per row in its first column
    pub query: Option<String>,

    /// Positional bind parameters for the query
    #[serde(default)]
    pub params: Vec<String>,
}

/// Deserialize a filter's typed settings struct from the host's JSON blob.
pub fn filter_settings<T: DeserializeOwned>(name: &str, value: &serde_json::Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| {
        UberFilterError::configuration(format!("invalid settings for filter [{name}]: {e}"))
    })
}
