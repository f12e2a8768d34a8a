use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role recorded for a user.
///
/// Roles are intentionally opaque strings at this layer; the only value this
/// workspace interprets is [`Role::CREATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// The sole role permitted to generate randomized products.
    pub const CREATOR: Role = Role(Cow::Borrowed("creator"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_creator(&self) -> bool {
        *self == Self::CREATOR
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
