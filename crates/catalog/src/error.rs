use thiserror::Error;

/// Failure talking to the remote catalog.
///
/// Transport, status, and decode failures surface unmodified; the client
/// performs no internal recovery.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}
