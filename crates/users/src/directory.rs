//! User directory seam.

use crate::{Role, User};

/// Read-only lookup into an external user directory.
///
/// The product factory depends on this trait rather than on a concrete
/// directory, so callers (and tests) decide where the records live.
pub trait UserDirectory {
    /// Role recorded for `email`, if the directory knows the address.
    fn role_of(&self, email: &str) -> Option<Role>;
}

/// Directory backed by an in-memory list of records.
///
/// Lookup is a linear scan; directories here are small reference lists, not
/// account stores.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl FromIterator<User> for InMemoryUserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn role_of(&self, email: &str) -> Option<Role> {
        self.users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.role.clone())
    }
}

impl<D: UserDirectory> UserDirectory for &D {
    fn role_of(&self, email: &str) -> Option<Role> {
        (**self).role_of(email)
    }
}
