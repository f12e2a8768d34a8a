//! `shopkit-catalog` — read-only client for the remote public catalog.
//!
//! One HTTP GET per call, payload handed back verbatim. No caching, no
//! pagination traversal, and no retry/timeout policy of its own: callers
//! that need one supply a preconfigured [`reqwest::Client`].

pub mod client;
pub mod error;
pub mod types;

pub use client::{CatalogClient, DEFAULT_PLANETS_URL};
pub use error::CatalogError;
pub use types::{Planet, PlanetsPage};
