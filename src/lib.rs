//! In-memory user CRUD service.
//!
//! The library exposes the user store and the HTTP router so that tests (and
//! the binary) can build isolated instances: construct a [`UserStore`], hand
//! it to [`build_router`], and serve.

mod api;
mod error;
mod store;
mod user;

pub use api::build_router;
pub use error::{ApiError, ApiResult};
pub use store::UserStore;
pub use user::{CreateUserRequest, User};
