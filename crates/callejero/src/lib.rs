//! Callejero - Address Suggestion Lookup Client
//!
//! Callejero queries a gazetteer HTTP endpoint and maps its GeoJSON feature
//! payload into a short, normalized suggestion list for autocomplete UIs.
//! The lookup contract is forgiving by design: queries under the minimum
//! length short-circuit, results are truncated to a configurable limit, and
//! every failure mode (transport, status, decode) collapses to an empty list
//! so callers never handle errors while the user is typing.
//!
//! # Quick Start
//!
//! ```no_run
//! use callejero::SuggestionClient;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), callejero::error::CallejeroError> {
//! // Query the public Rosario gazetteer directly
//! let client = SuggestionClient::rosario()?;
//!
//! let suggestions = client.suggest("ALEM LEANDRO").await;
//! for suggestion in &suggestions {
//!     println!(
//!         "{} ({})",
//!         suggestion.label,
//!         suggestion.kind.as_deref().unwrap_or("?")
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Typed decoding**: the GeoJSON payload is schema-validated into record
//!   types; missing fields fall back through explicit ordered chains
//! - **No error channel on the hot path**: `suggest` always resolves to a
//!   (possibly empty) list, with failure causes tagged internally for logging
//! - **Configurable**: minimum query length, suggestion limit and an optional
//!   per-request deadline via [`LookupConfig`]
//! - **Runtime-agnostic**: plain async functions over a shared `reqwest` pool
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
pub mod error;
mod suggest;

pub use crate::core::{ROSARIO_UBICACIONES_URL, SuggestionClient, SuggestionClientBuilder};
pub use config::{LookupConfig, LookupConfigBuilder};
pub use suggest::Suggestion;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Callejero library.
///
/// This sets up structured logging with configurable levels and filtering.
/// Call this once at the start of your application to enable diagnostic
/// output from lookup operations, including the tagged cause of every
/// swallowed failure.
///
/// # Arguments
///
/// * `level` - The minimum log level to display
///
/// # Examples
///
/// ```rust
/// use callejero::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), callejero::error::CallejeroError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::CallejeroError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}
