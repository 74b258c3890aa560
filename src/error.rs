//! Error types for HAL link processing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HalError {
    #[error("Link with rel '{rel}' is not a CURI: only 'curies' links can be registered")]
    NotACurie { rel: String },

    #[error("CURI link '{href}' has no name")]
    MissingCurieName { href: String },

    #[error("Invalid CURI template '{template}': expected exactly one {{rel}} placeholder")]
    InvalidCurieTemplate { template: String },

    #[error("Document is not in application/hal+json format. Expected a single link-object or an array of link-objects: rel={rel} value={value}")]
    FormatViolation {
        rel: String,
        value: serde_json::Value,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
