//! HTTP client for the remote public catalog.

use tracing::debug;

use crate::error::CatalogError;
use crate::types::PlanetsPage;

/// Default public endpoint serving the planets listing.
pub const DEFAULT_PLANETS_URL: &str = "https://swapi.dev/api/planets";

/// Thin read-only client for the remote catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    planets_url: String,
}

impl CatalogClient {
    /// Client against the default public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_PLANETS_URL)
    }

    /// Client against `planets_url` (tests, mirrors).
    pub fn with_base_url(planets_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            planets_url: planets_url.into(),
        }
    }

    /// Replace the underlying HTTP client, e.g. to apply a timeout policy.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Fetch a single page of planets and hand the payload back verbatim.
    pub async fn planets(&self) -> Result<PlanetsPage, CatalogError> {
        debug!(url = %self.planets_url, "fetching planets page");

        let page = self
            .http
            .get(&self.planets_url)
            .send()
            .await?
            .error_for_status()?
            .json::<PlanetsPage>()
            .await?;

        Ok(page)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
