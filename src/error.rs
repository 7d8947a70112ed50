use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use log::error;
use thiserror::Error;

use crate::render::NOT_FOUND_HTML;

/// Errors that can occur while serving or seeding recipes
#[derive(Error, Debug)]
pub enum SiteError {
    /// An entity failed its declarative field constraints
    #[error("Validation failed for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// A requested resource does not exist or is not publicly visible
    #[error("{0} not found")]
    NotFound(String),

    /// Failed to render a template
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to read a seed fixture file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed fixture file is malformed
    #[error("Seed error: {0}")]
    Seed(String),
}

impl SiteError {
    /// Shorthand for a field constraint violation
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Seed(err.to_string())
    }
}

/// NotFound surfaces as an HTTP 404; anything else reaching the view
/// layer is a server fault and surfaces as a 500.
impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
            }
            other => {
                error!("Internal error while handling request: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
