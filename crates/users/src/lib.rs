//! `shopkit-users` — user reference data and creator authorization.
//!
//! The user directory is external to this workspace: we read `email` and
//! `role`, and own nothing else about the records. The only role with any
//! meaning here is `creator`, which gates random product generation.

pub mod authorize;
pub mod directory;
pub mod role;
pub mod user;

pub use authorize::{AuthzError, authorize_creator};
pub use directory::{InMemoryUserDirectory, UserDirectory};
pub use role::Role;
pub use user::User;
