//! Product factory.

use shopkit_core::{DomainError, ProductId};
use shopkit_users::{AuthzError, UserDirectory, authorize_creator};

use crate::{Price, Product, ProductDraft, generator};

/// Creates validated products.
///
/// Holds the user-directory seam and its own entropy source; both are
/// injected, so tests run against fixed records and a seeded rng.
#[derive(Debug)]
pub struct ProductFactory<D> {
    directory: D,
    rng: fastrand::Rng,
}

impl<D: UserDirectory> ProductFactory<D> {
    /// Factory with an OS-seeded entropy source.
    pub fn new(directory: D) -> Self {
        Self::with_rng(directory, fastrand::Rng::new())
    }

    /// Factory with a caller-supplied rng. Seed it for deterministic output.
    pub fn with_rng(directory: D, rng: fastrand::Rng) -> Self {
        Self { directory, rng }
    }

    /// Validate `draft` and mint a product from it.
    ///
    /// Every field is carried over unchanged (the price stays numeric); only
    /// the id is generated. Fails with the first violated constraint, and
    /// constructs nothing on failure.
    pub fn create(&mut self, draft: ProductDraft) -> Result<Product, DomainError> {
        draft.validate()?;

        Ok(Product::new(
            ProductId::random(&mut self.rng),
            draft.name,
            draft.description,
            Price::Amount(draft.price),
            draft.tags,
        ))
    }

    /// Generate a randomized product on behalf of `caller_email`.
    ///
    /// Only callers the directory maps to the creator role may do this;
    /// anyone else is rejected before any entropy is consumed. Generated
    /// data is valid by construction, so authorization is the only failure
    /// mode.
    pub fn create_random(&mut self, caller_email: &str) -> Result<Product, AuthzError> {
        authorize_creator(&self.directory, caller_email)?;

        Ok(generator::random_product(&mut self.rng))
    }
}
