use std::time::Duration;

const DEFAULT_MIN_QUERY_LEN: usize = 3;
const DEFAULT_LIMIT: usize = 10;

/// Tunables for suggestion lookups.
///
/// The defaults reproduce the standard autocomplete contract: queries under
/// three characters short-circuit and at most ten suggestions come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Queries shorter than this many characters return an empty result
    /// without a request being issued.
    pub min_query_len: usize,
    /// Maximum number of suggestions returned from a single lookup.
    pub limit: usize,
    /// Optional per-request timeout. `None` means the transport decides;
    /// no deadline is enforced by default.
    pub timeout: Option<Duration>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            limit: DEFAULT_LIMIT,
            timeout: None,
        }
    }
}

impl LookupConfig {
    /// Create a builder for customizing lookup behavior.
    #[must_use]
    pub fn builder() -> LookupConfigBuilder {
        LookupConfigBuilder::new()
    }
}

/// Builder for creating lookup configurations with ergonomic defaults.
#[derive(Debug, Clone, Default)]
pub struct LookupConfigBuilder {
    config: LookupConfig,
}

impl LookupConfigBuilder {
    /// Create a new builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LookupConfig::default(),
        }
    }

    /// Set the minimum query length below which lookups short-circuit.
    #[must_use]
    pub fn min_query_len(mut self, len: usize) -> Self {
        self.config.min_query_len = len;
        self
    }

    /// Set the maximum number of suggestions to return.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    /// Enforce a deadline on each request.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    #[must_use]
    pub fn build(self) -> LookupConfig {
        self.config
    }
}
