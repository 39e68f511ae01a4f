//! The user entity and its creation input.

use serde::{Deserialize, Serialize};

/// A user record. Ids are assigned by the store, never by the client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Request body for creating a user.
///
/// Both fields are optional at the wire level so that an absent field reaches
/// validation (and produces a 400) instead of failing body deserialization.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Convenience constructor used by tests and callers embedding the crate.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}
