use serde::Serialize;

use roster_registry::{User, ValidationError};

#[derive(Debug, Clone, Serialize)]
pub struct ListResult<'a> {
    pub users: &'a [User],
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AddResult<'a> {
    Added { added: &'a User },
    Rejected { error: String },
}

impl<'a> AddResult<'a> {
    pub fn from_outcome(outcome: Result<&'a User, ValidationError>) -> Self {
        match outcome {
            Ok(added) => AddResult::Added { added },
            Err(error) => AddResult::Rejected {
                error: error.to_string(),
            },
        }
    }
}

/// Outcome of the seeded demonstration run.
#[derive(Debug, Clone, Serialize)]
pub struct DemoResult<'a> {
    pub users: &'a [User],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
