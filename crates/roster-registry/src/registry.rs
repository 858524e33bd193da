use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::{create_user, normalize_email, User, ValidationError};

/// Ordered collection of users with unique emails.
///
/// `emails` mirrors the emails in `users` so duplicate checks don't scan the list.
#[derive(Debug, Default, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
    emails: FxHashSet<String>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `user`, or fails with `DuplicateEmail` leaving the registry unchanged.
    pub fn add_user(&mut self, user: User) -> Result<(), ValidationError> {
        if self.emails.contains(user.email()) {
            warn!("Rejected duplicate email {}", user.email());
            return Err(ValidationError::DuplicateEmail {
                email: user.email().to_string(),
            });
        }
        debug!("Adding user {}", user.display_name());
        self.emails.insert(user.email().to_string());
        self.users.push(user);
        Ok(())
    }

    /// Validates and inserts in one step, returning the stored user.
    pub fn register(&mut self, name: &str, email: &str) -> Result<&User, ValidationError> {
        let user = create_user(name, email)?;
        self.add_user(user)?;
        Ok(&self.users[self.users.len() - 1])
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.emails.contains(&normalize_email(email))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub(crate) fn replace_with(&mut self, other: UserRegistry) {
        *self = other;
    }
}
