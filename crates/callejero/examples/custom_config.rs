//! Customizing lookup behavior
//!
//! This example demonstrates:
//! - Tuning minimum query length, suggestion limit and request deadline
//! - Applying an ad-hoc configuration to a single call
//! - Pointing the client at a custom endpoint, e.g. a same-origin proxy route

use std::time::Duration;

use callejero::{LookupConfig, ROSARIO_UBICACIONES_URL, SuggestionClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    callejero::init_logging(tracing::Level::INFO)?;

    // A deployment fronting the gazetteer with a reverse proxy would pass its
    // proxy route here instead of the upstream URL.
    let client = SuggestionClient::builder()
        .base_url(ROSARIO_UBICACIONES_URL)
        .config(
            LookupConfig::builder()
                .limit(5)
                .timeout(Duration::from_secs(5))
                .build(),
        )
        .build()?;

    println!("Top 5 for 'SAN MARTIN':");
    for suggestion in client.suggest("SAN MARTIN").await {
        println!("  {} [{}]", suggestion.label, suggestion.id);
    }

    // One-off lenient lookup without touching the client defaults
    let lenient = LookupConfig::builder().min_query_len(2).build();
    println!("\nLenient lookup for 'AL':");
    for suggestion in client.suggest_with_config("AL", &lenient).await {
        println!("  {}", suggestion.label);
    }

    Ok(())
}
