//! In-memory user store.
//!
//! The store is an explicitly owned object built in `main` (or a test) and
//! shared with the router, not a module-level singleton. All state lives
//! behind one mutex so concurrent creates cannot interleave id assignment.

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::user::{CreateUserRequest, User};

struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

/// Ordered collection of users plus the id counter. Cheap to clone; clones
/// share the same underlying state.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl UserStore {
    /// Creates a store seeded with the two initial records, counter at 3.
    pub fn new() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "Alice Smith".to_string(),
                email: "alice@example.com".to_string(),
            },
            User {
                id: 2,
                name: "Bob Johnson".to_string(),
                email: "bob@example.com".to_string(),
            },
        ];
        Self {
            inner: Arc::new(Mutex::new(StoreInner { users, next_id: 3 })),
        }
    }

    /// Returns all users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Returns the user with the given id, if any.
    pub fn get(&self, id: u64) -> ApiResult<User> {
        let inner = self.lock();
        match inner.users.iter().find(|u| u.id == id) {
            Some(user) => Ok(user.clone()),
            None => {
                debug!("lookup miss for user id {}", id);
                Err(ApiError::NotFound)
            }
        }
    }

    /// Validates the request and appends a new user with the next id.
    ///
    /// Rejected requests leave the collection and the counter untouched.
    pub fn create(&self, req: CreateUserRequest) -> ApiResult<User> {
        let name = req.name.filter(|n| !n.is_empty());
        let email = req.email.filter(|e| !e.is_empty());
        let (Some(name), Some(email)) = (name, email) else {
            return Err(ApiError::MissingFields);
        };

        let mut inner = self.lock();
        let user = User {
            id: inner.next_id,
            name,
            email,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        info!("created user {} ({})", user.id, user.email);
        Ok(user)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // State stays consistent even if a holder panicked mid-read.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
