//! Catalog error types.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while fetching or normalizing the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The raw catalog is structurally invalid (missing required
    /// identifiers). Not retried; a collaborator bug.
    #[error("invalid catalog entry: {0}")]
    Configuration(String),

    /// The capability registry could not be reached. Unlike preference and
    /// monitoring trouble there is nothing to rank without a catalog, so
    /// this propagates to the caller.
    #[error("capability registry unavailable: {0}")]
    Unavailable(String),
}
