//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
///
/// Ids are drawn from an injected entropy source at creation time. They are
/// best-effort unique within a process: nothing persists them and nothing
/// checks for collisions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Draw a fresh identifier from `rng`.
    ///
    /// Prefer a seeded rng in tests for determinism.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self(rng.u32(..))
    }

    pub fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = u32::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_id_is_deterministic_under_a_seed() {
        let mut a = fastrand::Rng::with_seed(7);
        let mut b = fastrand::Rng::with_seed(7);
        assert_eq!(ProductId::random(&mut a), ProductId::random(&mut b));
    }

    #[test]
    fn parses_from_decimal_string() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id.as_u32(), 42);
    }

    #[test]
    fn rejects_non_numeric_string() {
        let err = "not-an-id".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn serializes_as_a_bare_integer() {
        let json = serde_json::to_value(ProductId::from_raw(9)).unwrap();
        assert_eq!(json, serde_json::json!(9));
    }
}
