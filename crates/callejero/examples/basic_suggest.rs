//! Basic address suggestion lookups
//!
//! This example demonstrates the fundamental operations:
//! - Creating a client for the public Rosario gazetteer
//! - Looking up suggestions for a free-text query
//! - The empty-result contract for short queries

use callejero::SuggestionClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    callejero::init_logging(tracing::Level::INFO)?;

    let client = SuggestionClient::rosario()?;

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ALEM LEANDRO".to_string());

    println!("Searching for '{query}':");
    let suggestions = client.suggest(&query).await;
    if suggestions.is_empty() {
        println!("  no suggestions (short query, no matches, or service unreachable)");
    }
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "  {}. {} [{}]",
            i + 1,
            suggestion.label,
            suggestion.kind.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
