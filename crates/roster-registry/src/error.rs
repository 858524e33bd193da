use thiserror::Error;

/// Reason a user was rejected by `create_user` or `UserRegistry::add_user`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("invalid email format: {email:?}")]
    InvalidEmailFormat { email: String },
    #[error("duplicate email: {email}")]
    DuplicateEmail { email: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
