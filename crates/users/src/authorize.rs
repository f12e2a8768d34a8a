//! Creator authorization.

use thiserror::Error;

use crate::UserDirectory;

/// Authorization failure at the product-creation boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// Caller is missing the creator role, or is unknown to the directory.
    #[error("You are not allowed to create products")]
    NotAllowed,
}

/// Check that `email` maps to a creator in `directory`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize_creator(
    directory: &impl UserDirectory,
    email: &str,
) -> Result<(), AuthzError> {
    match directory.role_of(email) {
        Some(role) if role.is_creator() => Ok(()),
        _ => Err(AuthzError::NotAllowed),
    }
}
