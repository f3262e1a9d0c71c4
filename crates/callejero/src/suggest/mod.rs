//! Suggestion payload decoding and mapping.
//!
//! This module models the slice of the upstream GeoJSON response that the
//! lookup consumes and turns it into the flat [`Suggestion`] records callers
//! display. Decoding is schema-validated; missing optional fields are handled
//! through ordered fallback chains rather than ad-hoc checks at use sites.

use serde::{Deserialize, Serialize};
use url::Url;

pub use error::LookupFailure;

/// Normalized address or place entry for display in an autocomplete list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Stable upstream identifier. Falls back to the display text when the
    /// source record carries no dedicated identifier, and is empty only when
    /// the record carries neither.
    pub id: String,
    /// Human-readable display text, e.g. `"ALEM LEANDRO N 1000"`.
    pub label: String,
    /// Upstream category tag such as `"DIRECCION_EXACTA"`, passed through
    /// unchanged. Absent when the upstream record has none.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// The slice of a GeoJSON feature collection the lookup cares about.
///
/// `features` stays an `Option` so that a payload lacking the field entirely
/// is distinguishable from an empty result set.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Option<Vec<Feature>>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub properties: FeatureProperties,
}

/// Descriptive fields of an upstream feature. All optional on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    pub id: Option<String>,
    pub descripcion: Option<String>,
    pub name: Option<String>,
    pub subtipo: Option<String>,
}

impl Suggestion {
    /// Map upstream properties to a suggestion.
    ///
    /// Fallback chains: `id` is the upstream identifier, else the description;
    /// `label` is the description, else the generic name. An empty string
    /// counts as absent for both chains. `subtipo` passes through as-is.
    fn from_properties(properties: FeatureProperties) -> Self {
        let descripcion = non_empty(properties.descripcion);
        let id = non_empty(properties.id)
            .or_else(|| descripcion.clone())
            .unwrap_or_default();
        let label = descripcion
            .or_else(|| non_empty(properties.name))
            .unwrap_or_default();

        Self {
            id,
            label,
            kind: properties.subtipo,
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Map a decoded feature collection to at most `limit` suggestions,
/// preserving upstream order.
pub fn map_collection(
    collection: FeatureCollection,
    limit: usize,
) -> Result<Vec<Suggestion>, LookupFailure> {
    let features = collection.features.ok_or(LookupFailure::MissingFeatures)?;

    Ok(features
        .into_iter()
        .take(limit)
        .map(|feature| Suggestion::from_properties(feature.properties))
        .collect())
}

/// Build the request URL for a query: the endpoint base plus exactly one
/// percent-encoded path segment, no query parameters.
pub fn suggestion_url(base: &Url, query: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

mod error {
    use thiserror::Error;

    /// Why a lookup produced no suggestions. Tagged for logging only; the
    /// public contract collapses every variant to an empty result.
    #[derive(Error, Debug)]
    pub enum LookupFailure {
        #[error("transport error: {0}")]
        Transport(#[from] reqwest::Error),
        #[error("upstream returned status {0}")]
        Status(reqwest::StatusCode),
        #[error("payload decode error: {0}")]
        Decode(#[from] serde_json::Error),
        #[error("payload has no features field")]
        MissingFeatures,
    }
}
