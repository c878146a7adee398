//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod auth;
mod role;
mod user;

pub use auth::{Credentials, TokenResponse};
pub use role::{Role, RoleInput, RolePatch};
pub use user::{NewUser, User, UserUpdate};
