use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const NAME_MIN_LEN: usize = 2;

/// A registered user. Email is the natural key.
///
/// Values are only built through [`create_user`], so the name is always
/// trimmed and the email always normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns `Name <email>`.
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Raw `{name, email}` pair as it appears in the store document.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserRecord {
    pub name: String,
    pub email: String,
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn create_user(name: &str, email: &str) -> Result<User, ValidationError> {
    let name = name.trim();
    if name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort { min: NAME_MIN_LEN });
    }

    let email = normalize_email(email);
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidEmailFormat { email });
    }

    Ok(User {
        name: name.to_string(),
        email,
    })
}
