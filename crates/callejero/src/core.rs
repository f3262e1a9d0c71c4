//! Core suggestion lookup functionality.
//!
//! This module provides the main [`SuggestionClient`] interface for querying
//! an address gazetteer over HTTP and turning its GeoJSON feature payload
//! into a short, ordered suggestion list. The lookup contract is deliberately
//! forgiving: short queries short-circuit and every failure mode collapses
//! to an empty list, so callers never handle errors on the hot path.
//!
//! # Quick Start
//!
//! ```no_run
//! use callejero::SuggestionClient;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), callejero::error::CallejeroError> {
//! let client = SuggestionClient::rosario()?;
//!
//! let suggestions = client.suggest("ALEM LEANDRO").await;
//! for suggestion in &suggestions {
//!     println!("{} [{}]", suggestion.label, suggestion.id);
//! }
//! # Ok(())
//! # }
//! ```

use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    config::LookupConfig,
    error::CallejeroError,
    suggest::{FeatureCollection, LookupFailure, Suggestion, map_collection, suggestion_url},
};

/// Public gazetteer endpoint of the city of Rosario.
///
/// One encoded query segment is appended per lookup. Deployments that front
/// the service with a same-origin reverse proxy pass the proxy route (e.g.
/// `https://host/proxy/locations`) as the base URL instead.
pub const ROSARIO_UBICACIONES_URL: &str =
    "https://ws.rosario.gob.ar/ubicaciones/public/geojson/ubicaciones/all/all";

/// Client for address suggestion lookups against a gazetteer endpoint.
///
/// The client owns a connection pool and is cheap to clone; clones share the
/// pool. Concurrent lookups are independent and unordered, so callers racing
/// keystrokes against each other are responsible for discarding stale
/// results.
///
/// # Examples
///
/// Basic usage:
/// ```
/// use callejero::SuggestionClient;
///
/// let client = SuggestionClient::new("https://example.test/proxy/locations")?;
/// # Ok::<(), callejero::error::CallejeroError>(())
/// ```
///
/// With custom configuration:
/// ```
/// use callejero::{LookupConfig, SuggestionClient};
///
/// let config = LookupConfig::builder().min_query_len(2).limit(5).build();
///
/// let client = SuggestionClient::builder()
///     .base_url("https://example.test/proxy/locations")
///     .config(config)
///     .build()?;
/// # Ok::<(), callejero::error::CallejeroError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    base: Url,
    config: LookupConfig,
}

impl SuggestionClient {
    /// Create a client for the given endpoint base URL with the default
    /// configuration.
    ///
    /// The base URL must be absolute; lookup queries are appended to it as a
    /// single encoded path segment.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CallejeroError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client for the public Rosario gazetteer,
    /// [`ROSARIO_UBICACIONES_URL`].
    pub fn rosario() -> Result<Self, CallejeroError> {
        Self::new(ROSARIO_UBICACIONES_URL)
    }

    /// Create a builder for customizing the client.
    #[must_use]
    pub fn builder() -> SuggestionClientBuilder {
        SuggestionClientBuilder::new()
    }

    /// The endpoint base URL this client queries.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The configuration applied by [`suggest`](Self::suggest).
    #[must_use]
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Look up address suggestions for a free-text query.
    ///
    /// Returns at most `limit` suggestions in upstream order. Queries shorter
    /// than the configured minimum return an empty list without a request
    /// being issued. Transport failures, non-success statuses and malformed
    /// payloads are logged and also produce an empty list; this method never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use callejero::SuggestionClient;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), callejero::error::CallejeroError> {
    /// let client = SuggestionClient::rosario()?;
    ///
    /// assert!(client.suggest("AL").await.is_empty()); // below minimum length
    /// let suggestions = client.suggest("ALEM LEANDRO").await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        self.suggest_with_config(query, &self.config).await
    }

    /// Look up suggestions using an ad-hoc configuration for this call only.
    #[instrument(name = "Suggest", level = "debug", skip(self, config))]
    pub async fn suggest_with_config(
        &self,
        query: &str,
        config: &LookupConfig,
    ) -> Vec<Suggestion> {
        if query.chars().count() < config.min_query_len {
            return Vec::new();
        }

        match self.lookup(query, config).await {
            Ok(suggestions) => suggestions,
            Err(failure) => {
                warn!(query, %failure, "suggestion lookup failed");
                Vec::new()
            }
        }
    }

    async fn lookup(
        &self,
        query: &str,
        config: &LookupConfig,
    ) -> Result<Vec<Suggestion>, LookupFailure> {
        let url = suggestion_url(&self.base, query);
        debug!(%url, "querying gazetteer");

        let mut request = self.http.get(&url);
        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupFailure::Status(status));
        }

        let body = response.text().await?;
        let collection: FeatureCollection = serde_json::from_str(&body)?;

        map_collection(collection, config.limit)
    }
}

// === Builder Pattern ===

/// Builder for creating a [`SuggestionClient`] with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct SuggestionClientBuilder {
    base_url: Option<String>,
    config: LookupConfig,
    http: Option<reqwest::Client>,
}

impl SuggestionClientBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint base URL. Required.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the default lookup configuration.
    #[must_use]
    pub fn config(mut self, config: LookupConfig) -> Self {
        self.config = config;
        self
    }

    /// Supply a pre-configured HTTP client, e.g. one with custom headers or
    /// proxy settings. Defaults to a plain `reqwest::Client`.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the [`SuggestionClient`].
    pub fn build(self) -> Result<SuggestionClient, CallejeroError> {
        let raw = self
            .base_url
            .ok_or_else(|| CallejeroError::ConfigError("base URL is required".to_string()))?;
        let base = Url::parse(&raw)
            .map_err(|source| CallejeroError::InvalidBaseUrl { url: raw, source })?;

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().build()?,
        };

        Ok(SuggestionClient {
            http,
            base,
            config: self.config,
        })
    }
}
