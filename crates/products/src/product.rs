use serde::{Deserialize, Serialize};

use shopkit_core::{DomainError, DomainResult, ProductId};

use crate::Price;

/// Minimum length of a product name, in characters.
pub const MIN_NAME_LEN: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Product
// ─────────────────────────────────────────────────────────────────────────────

/// A validated catalog entry.
///
/// # Invariants
/// - Only the factory constructs this type, and only after the draft passed
///   validation: a `Product` is never observable invalid or half-built.
/// - `tags` is never empty; the random-generation path guarantees at least
///   two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    tags: Vec<String>,
}

impl Product {
    pub(crate) fn new(
        id: ProductId,
        name: String,
        description: String,
        price: Price,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            tags,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Product Draft
// ─────────────────────────────────────────────────────────────────────────────

/// Candidate product input, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tags: Vec<String>,
}

impl ProductDraft {
    /// Check the draft against the field constraints.
    ///
    /// Fail-fast: the first violated constraint wins, in declaration order
    /// (name, description, tags, price).
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.chars().count() < MIN_NAME_LEN {
            return Err(DomainError::validation(
                "name",
                format!("must be at least {MIN_NAME_LEN} characters"),
            ));
        }

        if self.description.is_empty() {
            return Err(DomainError::validation("description", "cannot be empty"));
        }

        if self.tags.is_empty() {
            return Err(DomainError::validation(
                "tags",
                "must contain at least one entry",
            ));
        }

        if !self.price.is_finite() {
            return Err(DomainError::validation("price", "must be a valid number"));
        }

        Ok(())
    }
}
