//! Error types for the hub
//!
//! Wraps the errors of every view-model the hub drives, plus its own
//! configuration and modal-state failures.

use recipe_catalog::CatalogError;
use recipe_forms::ValidationErrors;
use recipe_payment::PaymentError;
use std::path::PathBuf;

/// Main hub error type
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// Unknown recipe, bad page, bad rating
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A form was submitted with failing fields
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// An action needs a modal that is not open
    #[error("{0} is not open")]
    NotOpen(&'static str),

    #[error("comment text is empty")]
    EmptyComment,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl HubError {
    /// Problems the user fixes by editing input rather than by navigating
    #[inline]
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EmptyComment)
    }

    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Catalog(e) if e.is_not_found())
    }
}
