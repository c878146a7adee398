mod auth;
mod common;
mod roles;
mod users;

pub use auth::{LoginRequest, LoginResponse};
pub use common::{HealthResponse, MessageResponse};
pub use roles::{PatchRoleRequest, RoleRequest, RoleResponse};
pub use users::{
    CreateUserRequest, ListUsersQuery, UpdatePasswordRequest, UpdateUserRequest, UserResponse,
};
